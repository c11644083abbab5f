//! Repository for the `compliance_alerts` table.

use privacyguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::{ComplianceAlert, NewAlert};

const ALERT_COLUMNS: &str = "\
    id, user_id, alert_type, title, description, severity, jurisdiction, \
    due_date, action_required, link, is_read, created_at";

/// Provides insert/list/read-flag operations for compliance alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert an alert. `user_id = None` creates a global broadcast.
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        alert: &NewAlert,
    ) -> Result<ComplianceAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO compliance_alerts \
                 (user_id, alert_type, title, description, severity, \
                  jurisdiction, due_date, action_required, link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {ALERT_COLUMNS}"
        );
        sqlx::query_as::<_, ComplianceAlert>(&query)
            .bind(user_id)
            .bind(&alert.alert_type)
            .bind(&alert.title)
            .bind(&alert.description)
            .bind(&alert.severity)
            .bind(&alert.jurisdiction)
            .bind(alert.due_date)
            .bind(alert.action_required)
            .bind(&alert.link)
            .fetch_one(pool)
            .await
    }

    /// List alerts visible to an account (its own plus global broadcasts),
    /// newest first, with optional severity and read-state filters.
    pub async fn list_visible_to_user(
        pool: &PgPool,
        user_id: DbId,
        severity: Option<&str>,
        is_read: Option<bool>,
    ) -> Result<Vec<ComplianceAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {ALERT_COLUMNS} FROM compliance_alerts \
             WHERE (user_id = $1 OR user_id IS NULL) \
               AND ($2::TEXT IS NULL OR severity = $2) \
               AND ($3::BOOLEAN IS NULL OR is_read = $3) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ComplianceAlert>(&query)
            .bind(user_id)
            .bind(severity)
            .bind(is_read)
            .fetch_all(pool)
            .await
    }

    /// Flip an alert to read. The alert must be visible to the account
    /// (owned or global); marking a global alert read applies to everyone.
    pub async fn mark_read(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE compliance_alerts SET is_read = TRUE \
             WHERE id = $1 AND (user_id = $2 OR user_id IS NULL)",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unread alerts visible to an account.
    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM compliance_alerts \
             WHERE (user_id = $1 OR user_id IS NULL) AND NOT is_read",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
