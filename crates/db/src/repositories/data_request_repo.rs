//! Repository for the `data_requests` table.

use chrono::NaiveDate;
use privacyguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::data_request::{DataRequest, DueRequest};

const REQUEST_COLUMNS: &str = "\
    id, user_id, requester_name, requester_email, request_type, status, \
    priority, description, submitted_date, due_date, created_at, updated_at";

/// Provides CRUD operations for data-subject requests.
pub struct DataRequestRepo;

impl DataRequestRepo {
    /// Insert a new request. The caller supplies the submitted and due
    /// dates; the due date is fixed here for the lifetime of the row.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        requester_name: &str,
        requester_email: &str,
        request_type: &str,
        priority: &str,
        description: Option<&str>,
        submitted_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<DataRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO data_requests \
                 (user_id, requester_name, requester_email, request_type, \
                  priority, description, submitted_date, due_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, DataRequest>(&query)
            .bind(user_id)
            .bind(requester_name)
            .bind(requester_email)
            .bind(request_type)
            .bind(priority)
            .bind(description)
            .bind(submitted_date)
            .bind(due_date)
            .fetch_one(pool)
            .await
    }

    /// List one account's requests, newest first, with optional status
    /// filter and case-insensitive requester search.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<DataRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM data_requests \
             WHERE user_id = $1 \
               AND ($2::TEXT IS NULL OR status = $2) \
               AND ($3::TEXT IS NULL \
                    OR requester_name ILIKE '%' || $3 || '%' \
                    OR requester_email ILIKE '%' || $3 || '%') \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, DataRequest>(&query)
            .bind(user_id)
            .bind(status)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Partially update a request. `due_date` is intentionally not
    /// touchable: it is immutable after creation.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        status: Option<&str>,
        priority: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<DataRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE data_requests SET \
                 status = COALESCE($3, status), \
                 priority = COALESCE($4, priority), \
                 description = COALESCE($5, description), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, DataRequest>(&query)
            .bind(id)
            .bind(user_id)
            .bind(status)
            .bind(priority)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request owned by the given account.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data_requests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(status, due_date)` pairs for one account, for stats aggregation.
    pub async fn list_status_due_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<(String, NaiveDate)>, sqlx::Error> {
        sqlx::query_as::<_, (String, NaiveDate)>(
            "SELECT status, due_date FROM data_requests WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Creation timestamps of one account's completed requests, for the
    /// (approximate) response-time metric.
    pub async fn list_completed_created_at(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<chrono::DateTime<chrono::Utc>>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT created_at FROM data_requests \
             WHERE user_id = $1 AND status = 'completed'",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Pending requests due within the inclusive `[start, end]` window,
    /// joined with the owner's contact details and email-alert preference.
    ///
    /// Accounts without a settings row get the default preference (on).
    pub async fn list_pending_due_between(
        pool: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DueRequest>, sqlx::Error> {
        sqlx::query_as::<_, DueRequest>(
            "SELECT r.id, r.user_id, r.requester_name, r.request_type, r.due_date, \
                    u.email AS owner_email, \
                    u.company_name AS owner_company, \
                    COALESCE(s.email_alerts, TRUE) AS email_alerts \
             FROM data_requests r \
             JOIN users u ON u.id = r.user_id \
             LEFT JOIN user_settings s ON s.user_id = r.user_id \
             WHERE r.status = 'pending' \
               AND r.due_date >= $1 AND r.due_date <= $2 \
             ORDER BY r.due_date ASC, r.id ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }
}
