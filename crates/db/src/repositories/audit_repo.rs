//! Repository for the `privacy_audits` table.

use privacyguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::audit::PrivacyAudit;

const AUDIT_COLUMNS: &str = "\
    id, user_id, audit_data, compliance_score, status, created_at, updated_at";

/// Provides CRUD operations for privacy audits.
pub struct AuditRepo;

impl AuditRepo {
    /// Insert a new audit with its freshly computed score.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        audit_data: &serde_json::Value,
        compliance_score: i32,
        status: &str,
    ) -> Result<PrivacyAudit, sqlx::Error> {
        let query = format!(
            "INSERT INTO privacy_audits (user_id, audit_data, compliance_score, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {AUDIT_COLUMNS}"
        );
        sqlx::query_as::<_, PrivacyAudit>(&query)
            .bind(user_id)
            .bind(audit_data)
            .bind(compliance_score)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List one account's audits, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PrivacyAudit>, sqlx::Error> {
        let query = format!(
            "SELECT {AUDIT_COLUMNS} FROM privacy_audits \
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PrivacyAudit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an audit's answers (and the score derived from them).
    ///
    /// The ownership predicate makes an update against someone else's audit
    /// indistinguishable from a missing row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        audit_data: &serde_json::Value,
        compliance_score: i32,
        status: &str,
    ) -> Result<Option<PrivacyAudit>, sqlx::Error> {
        let query = format!(
            "UPDATE privacy_audits SET \
                 audit_data = $3, \
                 compliance_score = $4, \
                 status = $5, \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {AUDIT_COLUMNS}"
        );
        sqlx::query_as::<_, PrivacyAudit>(&query)
            .bind(id)
            .bind(user_id)
            .bind(audit_data)
            .bind(compliance_score)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Score of the account's most recent completed audit, if any.
    pub async fn latest_completed_score(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "SELECT compliance_score FROM privacy_audits \
             WHERE user_id = $1 AND status = 'completed' \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
