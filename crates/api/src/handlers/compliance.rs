//! Handlers for the `/compliance` resource (alerts and dashboard metrics).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use privacyguard_core::alerts::{AlertKind, AlertSeverity};
use privacyguard_core::error::CoreError;
use privacyguard_core::types::{DbId, PlanTier};
use privacyguard_db::models::alert::NewAlert;
use privacyguard_db::repositories::{AlertRepo, AuditRepo, DataRequestRepo, PolicyRepo};
use privacyguard_events::broadcast_alert;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /compliance/alerts`.
#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    pub severity: Option<String>,
    pub is_read: Option<bool>,
}

/// Dashboard metrics payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    /// Score of the most recent completed audit, if any.
    pub compliance_score: Option<i32>,
    /// Approximate mean response time in days for completed requests,
    /// measured from creation to now rather than to completion time.
    pub data_request_response_time: Option<i64>,
    pub policies_generated: i64,
    /// Unread alerts visible to the account.
    pub active_alerts: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/compliance/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<AlertQuery>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(severity) = query.severity.as_deref() {
        if AlertSeverity::parse(severity).is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown severity: {severity}"
            )));
        }
    }

    let alerts = AlertRepo::list_visible_to_user(
        &state.pool,
        user.user_id,
        query.severity.as_deref(),
        query.is_read,
    )
    .await?;

    Ok(Json(serde_json::json!({ "alerts": alerts })))
}

/// PUT /api/v1/compliance/alerts/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = AlertRepo::mark_read(&state.pool, id, user.user_id).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Alert", id }))
    }
}

/// POST /api/v1/compliance/alerts
///
/// Publish a global alert with jurisdiction-filtered email fan-out.
/// Restricted to enterprise-plan accounts.
pub async fn broadcast(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewAlert>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if PlanTier::parse(&user.plan) != Some(PlanTier::Enterprise) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Broadcasting alerts requires an enterprise plan".into(),
        )));
    }

    if AlertKind::parse(&input.alert_type).is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown alert type: {}",
            input.alert_type
        )));
    }
    if AlertSeverity::parse(&input.severity).is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown severity: {}",
            input.severity
        )));
    }

    let alert = broadcast_alert(&state.pool, state.mailer.as_deref(), &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "alert": alert })),
    ))
}

/// GET /api/v1/compliance/metrics
pub async fn metrics(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let compliance_score = AuditRepo::latest_completed_score(&state.pool, user.user_id).await?;
    let policies_generated = PolicyRepo::count_for_user(&state.pool, user.user_id).await?;
    let active_alerts = AlertRepo::unread_count(&state.pool, user.user_id).await?;

    // Approximate: measured from creation to now, not to completion time.
    let completed = DataRequestRepo::list_completed_created_at(&state.pool, user.user_id).await?;
    let data_request_response_time = if completed.is_empty() {
        None
    } else {
        let now = Utc::now();
        let total_days: i64 = completed.iter().map(|c| (now - *c).num_days()).sum();
        Some(total_days / completed.len() as i64)
    };

    let metrics = MetricsResponse {
        compliance_score,
        data_request_response_time,
        policies_generated,
        active_alerts,
    };

    Ok(Json(serde_json::json!({ "metrics": metrics })))
}
