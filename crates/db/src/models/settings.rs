//! Per-account settings entity models and DTOs.

use privacyguard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_settings` table (one-to-one with `users`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSettings {
    pub id: DbId,
    pub user_id: DbId,
    pub notifications_enabled: bool,
    pub email_alerts: bool,
    pub jurisdictions: Vec<String>,
    pub business_type: Option<String>,
    pub website_url: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a partial settings update; absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateSettings {
    pub notifications_enabled: Option<bool>,
    pub email_alerts: Option<bool>,
    pub jurisdictions: Option<Vec<String>>,
    pub business_type: Option<String>,
    pub website_url: Option<String>,
    pub contact_email: Option<String>,
}
