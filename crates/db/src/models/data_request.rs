//! Data-subject request entity models and DTOs.

use chrono::NaiveDate;
use privacyguard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `data_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DataRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub requester_name: String,
    pub requester_email: String,
    pub request_type: String,
    pub status: String,
    pub priority: String,
    pub description: Option<String>,
    pub submitted_date: NaiveDate,
    pub due_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a data request. The due date is deliberately absent:
/// it is fixed at creation.
#[derive(Debug, Deserialize)]
pub struct UpdateDataRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
}

/// A pending request nearing its deadline, joined with the owning
/// account's contact details for the sweep.
#[derive(Debug, Clone, FromRow)]
pub struct DueRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub requester_name: String,
    pub request_type: String,
    pub due_date: NaiveDate,
    pub owner_email: String,
    pub owner_company: String,
    /// From the account's settings row; absent row means the default (on).
    pub email_alerts: bool,
}
