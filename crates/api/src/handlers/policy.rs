//! Handlers for the `/policies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use privacyguard_core::policy::{render, PolicyConfig, PolicyKind};
use privacyguard_db::models::policy::GeneratedPolicy;
use privacyguard_db::repositories::PolicyRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /policies/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub policy_type: String,
    pub config: PolicyConfig,
}

/// Response payload for policy generation.
#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub policy: GeneratedPolicy,
}

/// GET /api/v1/policies
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let policies = PolicyRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(serde_json::json!({ "policies": policies })))
}

/// POST /api/v1/policies/generate
///
/// Renders the requested document from the config and persists the content
/// together with a snapshot of the config used.
pub async fn generate(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<GenerateRequest>,
) -> AppResult<(StatusCode, Json<PolicyResponse>)> {
    let kind = PolicyKind::parse(&input.policy_type).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown policy type: {}", input.policy_type))
    })?;

    let content = render(kind, &input.config, Utc::now().date_naive());

    let config_snapshot = serde_json::to_value(&input.config)
        .map_err(|e| AppError::InternalError(format!("Config serialization error: {e}")))?;

    let policy = PolicyRepo::create(
        &state.pool,
        user.user_id,
        kind.as_str(),
        &content,
        &config_snapshot,
    )
    .await?;

    tracing::info!(policy_id = policy.id, policy_type = %policy.policy_type, "Policy generated");

    Ok((StatusCode::CREATED, Json(PolicyResponse { policy })))
}
