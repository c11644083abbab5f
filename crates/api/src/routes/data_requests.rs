//! Route definitions for the `/data-requests` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::data_request;
use crate::state::AppState;

/// Routes mounted at `/data-requests`.
///
/// ```text
/// GET    /        -> list (?status, ?search)
/// POST   /        -> create (due date fixed server-side)
/// GET    /stats   -> dashboard counters
/// PUT    /{id}    -> update (status/priority/description only)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(data_request::list).post(data_request::create))
        .route("/stats", get(data_request::stats))
        .route(
            "/{id}",
            put(data_request::update).delete(data_request::delete),
        )
}
