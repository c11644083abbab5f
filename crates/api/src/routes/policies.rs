//! Route definitions for the `/policies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::policy;
use crate::state::AppState;

/// Routes mounted at `/policies`.
///
/// ```text
/// GET  /          -> list
/// POST /generate  -> render + persist a document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(policy::list))
        .route("/generate", post(policy::generate))
}
