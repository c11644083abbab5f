//! Handlers for the `/settings` resource.

use axum::extract::State;
use axum::Json;
use privacyguard_core::error::CoreError;
use privacyguard_db::models::settings::UpdateSettings;
use privacyguard_db::repositories::{SettingsRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /settings/profile`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: String,
}

/// GET /api/v1/settings
///
/// First access creates the row with defaults.
pub async fn get_settings(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let settings = SettingsRepo::find_or_create_for_user(&state.pool, user.user_id).await?;
    Ok(Json(serde_json::json!({ "settings": settings })))
}

/// PUT /api/v1/settings
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateSettings>,
) -> AppResult<Json<serde_json::Value>> {
    let settings = SettingsRepo::update_for_user(&state.pool, user.user_id, &input).await?;
    Ok(Json(serde_json::json!({ "settings": settings })))
}

/// PUT /api/v1/settings/profile
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<serde_json::Value>> {
    input.validate()?;

    let updated = UserRepo::update_company_name(&state.pool, user.user_id, &input.company_name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    Ok(Json(serde_json::json!({ "user": updated })))
}
