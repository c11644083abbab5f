//! Repository for the `user_settings` table.

use privacyguard_core::types::DbId;
use sqlx::PgPool;

use crate::models::settings::{UpdateSettings, UserSettings};

const SETTINGS_COLUMNS: &str = "\
    id, user_id, notifications_enabled, email_alerts, jurisdictions, \
    business_type, website_url, contact_email, created_at, updated_at";

/// Provides read/upsert operations for per-account settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch an account's settings row, if one exists.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserSettings>, sqlx::Error> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM user_settings WHERE user_id = $1");
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch an account's settings, creating the row with defaults on
    /// first access. The ON CONFLICT arm makes concurrent first reads safe.
    pub async fn find_or_create_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<UserSettings, sqlx::Error> {
        if let Some(settings) = Self::find_for_user(pool, user_id).await? {
            return Ok(settings);
        }
        let query = format!(
            "INSERT INTO user_settings (user_id) VALUES ($1) \
             ON CONFLICT ON CONSTRAINT uq_user_settings_user \
             DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Partially update an account's settings. Creates the row first when
    /// the account has never touched its settings.
    pub async fn update_for_user(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateSettings,
    ) -> Result<UserSettings, sqlx::Error> {
        // Ensure the row exists so a first-time PUT behaves like a lazy read.
        Self::find_or_create_for_user(pool, user_id).await?;

        let query = format!(
            "UPDATE user_settings SET \
                 notifications_enabled = COALESCE($2, notifications_enabled), \
                 email_alerts = COALESCE($3, email_alerts), \
                 jurisdictions = COALESCE($4, jurisdictions), \
                 business_type = COALESCE($5, business_type), \
                 website_url = COALESCE($6, website_url), \
                 contact_email = COALESCE($7, contact_email), \
                 updated_at = NOW() \
             WHERE user_id = $1 \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .bind(input.notifications_enabled)
            .bind(input.email_alerts)
            .bind(input.jurisdictions.as_deref())
            .bind(input.business_type.as_deref())
            .bind(input.website_url.as_deref())
            .bind(input.contact_email.as_deref())
            .fetch_one(pool)
            .await
    }
}
