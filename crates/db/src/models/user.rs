//! Account entity models.

use privacyguard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table. Never serialized to clients directly;
/// use [`PublicUser`] for responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub company_name: String,
    pub plan: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The client-facing projection of a user (no credential material).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub email: String,
    pub company_name: String,
    pub plan: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            company_name: user.company_name,
            plan: user.plan,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// An account's notification address, as used by alert fan-out.
#[derive(Debug, Clone, FromRow)]
pub struct UserContact {
    pub id: DbId,
    pub email: String,
    pub company_name: String,
}
