//! Generated-policy entity models.

use privacyguard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `generated_policies` table. Immutable once created;
/// regeneration inserts a new row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GeneratedPolicy {
    pub id: DbId,
    pub user_id: DbId,
    pub policy_type: String,
    pub content: String,
    pub config: serde_json::Value,
    pub created_at: Timestamp,
}
