//! Route definitions for the `/compliance` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::compliance;
use crate::state::AppState;

/// Routes mounted at `/compliance`.
///
/// ```text
/// GET  /alerts            -> list (?severity, ?is_read)
/// POST /alerts            -> manual broadcast (enterprise plan only)
/// PUT  /alerts/{id}/read  -> mark read
/// GET  /metrics           -> dashboard metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/alerts",
            get(compliance::list_alerts).post(compliance::broadcast),
        )
        .route("/alerts/{id}/read", put(compliance::mark_read))
        .route("/metrics", get(compliance::metrics))
}
