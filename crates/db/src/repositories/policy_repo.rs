//! Repository for the `generated_policies` table.

use privacyguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::policy::GeneratedPolicy;

const POLICY_COLUMNS: &str = "\
    id, user_id, policy_type, content, config, created_at";

/// Provides insert/list operations for generated policies. Rows are
/// immutable: there is no update, regeneration inserts a new row.
pub struct PolicyRepo;

impl PolicyRepo {
    /// Persist a rendered document together with its config snapshot.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        policy_type: &str,
        content: &str,
        config: &serde_json::Value,
    ) -> Result<GeneratedPolicy, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_policies (user_id, policy_type, content, config) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {POLICY_COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedPolicy>(&query)
            .bind(user_id)
            .bind(policy_type)
            .bind(content)
            .bind(config)
            .fetch_one(pool)
            .await
    }

    /// List one account's generated policies, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<GeneratedPolicy>, sqlx::Error> {
        let query = format!(
            "SELECT {POLICY_COLUMNS} FROM generated_policies \
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GeneratedPolicy>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Number of policies an account has generated.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM generated_policies WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
