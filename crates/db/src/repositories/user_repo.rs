//! Repository for the `users` table.

use privacyguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{PublicUser, User, UserContact};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

const USER_COLUMNS: &str = "\
    id, email, password_hash, company_name, plan, created_at, updated_at";

const PUBLIC_COLUMNS: &str = "\
    id, email, company_name, plan, created_at, updated_at";

/// Provides CRUD operations for accounts.
pub struct UserRepo;

impl UserRepo {
    /// Create a new account. The unique constraint `uq_users_email` turns
    /// duplicate signups into a database error the API maps to 409.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        company_name: &str,
        plan: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, company_name, plan) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(company_name)
            .bind(plan)
            .fetch_one(pool)
            .await
    }

    /// Find an account by email (login path).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find an account's public projection by id.
    pub async fn find_public_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PublicUser>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, PublicUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update the account's company name (profile edit).
    pub async fn update_company_name(
        pool: &PgPool,
        id: DbId,
        company_name: &str,
    ) -> Result<Option<PublicUser>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET company_name = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PUBLIC_COLUMNS}"
        );
        sqlx::query_as::<_, PublicUser>(&query)
            .bind(id)
            .bind(company_name)
            .fetch_optional(pool)
            .await
    }

    /// Contact details for every account subscribed to a jurisdiction.
    ///
    /// Used by broadcast fan-out: an account qualifies when its settings
    /// list the alert's jurisdiction and email alerts are not switched off.
    pub async fn list_contacts_for_jurisdiction(
        pool: &PgPool,
        jurisdiction: &str,
    ) -> Result<Vec<UserContact>, sqlx::Error> {
        sqlx::query_as::<_, UserContact>(
            "SELECT u.id, u.email, u.company_name \
             FROM users u \
             JOIN user_settings s ON s.user_id = u.id \
             WHERE s.jurisdictions @> ARRAY[$1]::TEXT[] \
               AND s.email_alerts \
             ORDER BY u.id",
        )
        .bind(jurisdiction)
        .fetch_all(pool)
        .await
    }
}
