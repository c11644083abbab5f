//! Handlers for the `/audits` resource.
//!
//! The compliance score is always recomputed server-side from the submitted
//! answers; a score supplied by the client is ignored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use privacyguard_core::error::CoreError;
use privacyguard_core::scoring::{score, AuditAnswers, ScoreReport};
use privacyguard_core::types::DbId;
use privacyguard_db::models::audit::PrivacyAudit;
use privacyguard_db::repositories::AuditRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Default audit status when the client omits one.
const DEFAULT_STATUS: &str = "completed";

/// Request body for `POST /audits` and `PUT /audits/{id}`.
#[derive(Debug, Deserialize)]
pub struct AuditInput {
    /// The raw questionnaire answers, keyed by question id.
    pub audit_data: serde_json::Value,
    pub status: Option<String>,
}

/// Response payload for audit create/update.
#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub audit: PrivacyAudit,
    pub recommendations: Vec<privacyguard_core::scoring::Recommendation>,
}

/// Score the raw answers, rejecting non-object payloads early.
fn score_audit_data(audit_data: &serde_json::Value) -> Result<ScoreReport, AppError> {
    if !audit_data.is_object() {
        return Err(AppError::BadRequest(
            "audit_data must be a JSON object".into(),
        ));
    }
    let answers = AuditAnswers::from_value(audit_data);
    Ok(score(&answers))
}

/// GET /api/v1/audits
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let audits = AuditRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(serde_json::json!({ "audits": audits })))
}

/// POST /api/v1/audits
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AuditInput>,
) -> AppResult<(StatusCode, Json<AuditResponse>)> {
    let report = score_audit_data(&input.audit_data)?;
    let status = input.status.as_deref().unwrap_or(DEFAULT_STATUS);

    let audit = AuditRepo::create(
        &state.pool,
        user.user_id,
        &input.audit_data,
        i32::from(report.score),
        status,
    )
    .await?;

    tracing::info!(
        audit_id = audit.id,
        score = audit.compliance_score,
        "Audit created"
    );

    Ok((
        StatusCode::CREATED,
        Json(AuditResponse {
            audit,
            recommendations: report.recommendations,
        }),
    ))
}

/// PUT /api/v1/audits/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AuditInput>,
) -> AppResult<Json<AuditResponse>> {
    let report = score_audit_data(&input.audit_data)?;
    let status = input.status.as_deref().unwrap_or(DEFAULT_STATUS);

    let audit = AuditRepo::update(
        &state.pool,
        id,
        user.user_id,
        &input.audit_data,
        i32::from(report.score),
        status,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Audit",
        id,
    }))?;

    Ok(Json(AuditResponse {
        audit,
        recommendations: report.recommendations,
    }))
}
