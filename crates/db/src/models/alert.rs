//! Compliance-alert entity models and DTOs.

use chrono::NaiveDate;
use privacyguard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `compliance_alerts` table. `user_id` is `None` for
/// global broadcasts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComplianceAlert {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub alert_type: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub jurisdiction: String,
    pub due_date: Option<NaiveDate>,
    pub action_required: bool,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting an alert (sweep-generated or manual).
#[derive(Debug, Clone, Deserialize)]
pub struct NewAlert {
    pub alert_type: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub jurisdiction: String,
    pub due_date: Option<NaiveDate>,
    pub action_required: bool,
    pub link: Option<String>,
}
