//! Handlers for the `/data-requests` resource.
//!
//! The 30-day response window is fixed at creation; updates never touch the
//! due date. List responses carry derived `days_until_due` and `overdue`
//! fields computed against the current date.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use privacyguard_core::error::CoreError;
use privacyguard_core::requests::{
    days_until_due, due_date_for, is_overdue, RequestKind, RequestPriority, RequestStats,
    RequestStatus,
};
use privacyguard_core::types::DbId;
use privacyguard_db::models::data_request::{DataRequest, UpdateDataRequest};
use privacyguard_db::repositories::DataRequestRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /data-requests`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDataRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub requester_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub requester_email: String,
    pub request_type: String,
    pub priority: Option<String>,
    pub description: Option<String>,
}

/// Query parameters for `GET /data-requests`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// A request row decorated with deadline-derived fields.
#[derive(Debug, Serialize)]
pub struct DataRequestView {
    #[serde(flatten)]
    pub request: DataRequest,
    pub days_until_due: i64,
    pub overdue: bool,
}

impl DataRequestView {
    fn derive(request: DataRequest, today: chrono::NaiveDate) -> Self {
        let days = days_until_due(request.due_date, today);
        let overdue = RequestStatus::parse(&request.status)
            .map(|s| is_overdue(s, request.due_date, today))
            .unwrap_or(false);
        Self {
            request,
            days_until_due: days,
            overdue,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/data-requests
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let rows = DataRequestRepo::list_for_user(
        &state.pool,
        user.user_id,
        query.status.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    let today = Utc::now().date_naive();
    let requests: Vec<DataRequestView> = rows
        .into_iter()
        .map(|r| DataRequestView::derive(r, today))
        .collect();

    Ok(Json(serde_json::json!({ "requests": requests })))
}

/// POST /api/v1/data-requests
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateDataRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    input.validate()?;

    let kind = RequestKind::parse(&input.request_type).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown request type: {}", input.request_type))
    })?;

    let priority = match input.priority.as_deref() {
        Some(p) => RequestPriority::parse(p)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown priority: {p}")))?,
        None => RequestPriority::Medium,
    };

    let today = Utc::now().date_naive();
    let due = due_date_for(today);

    let request = DataRequestRepo::create(
        &state.pool,
        user.user_id,
        &input.requester_name,
        &input.requester_email,
        kind.as_str(),
        priority.as_str(),
        input.description.as_deref(),
        today,
        due,
    )
    .await?;

    tracing::info!(
        request_id = request.id,
        request_type = %request.request_type,
        due_date = %request.due_date,
        "Data request created"
    );

    let view = DataRequestView::derive(request, today);
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "request": view })),
    ))
}

/// PUT /api/v1/data-requests/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDataRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(status) = input.status.as_deref() {
        if RequestStatus::parse(status).is_none() {
            return Err(AppError::BadRequest(format!("Unknown status: {status}")));
        }
    }
    if let Some(priority) = input.priority.as_deref() {
        if RequestPriority::parse(priority).is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown priority: {priority}"
            )));
        }
    }

    let request = DataRequestRepo::update(
        &state.pool,
        id,
        user.user_id,
        input.status.as_deref(),
        input.priority.as_deref(),
        input.description.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Data request",
        id,
    }))?;

    let view = DataRequestView::derive(request, Utc::now().date_naive());
    Ok(Json(serde_json::json!({ "request": view })))
}

/// DELETE /api/v1/data-requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DataRequestRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Data request",
            id,
        }))
    }
}

/// GET /api/v1/data-requests/stats
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let rows = DataRequestRepo::list_status_due_for_user(&state.pool, user.user_id).await?;

    let today = Utc::now().date_naive();
    let stats = RequestStats::collect(
        rows.into_iter()
            .map(|(status, due)| (RequestStatus::parse(&status), due)),
        today,
    );

    Ok(Json(serde_json::json!({ "stats": stats })))
}
