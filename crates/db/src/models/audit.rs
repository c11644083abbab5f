//! Privacy-audit entity models.

use privacyguard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `privacy_audits` table.
///
/// `compliance_score` is always derived from `audit_data` at write time;
/// the two can never be out of step in a committed row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrivacyAudit {
    pub id: DbId,
    pub user_id: DbId,
    pub audit_data: serde_json::Value,
    pub compliance_score: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
