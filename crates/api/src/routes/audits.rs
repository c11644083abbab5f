//! Route definitions for the `/audits` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audits`.
///
/// ```text
/// GET  /      -> list
/// POST /      -> create (scores server-side)
/// PUT  /{id}  -> update (rescores)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(audit::list).post(audit::create))
        .route("/{id}", put(audit::update))
}
