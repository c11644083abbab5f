//! Route definitions for the `/settings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /          -> get (lazily created with defaults)
/// PUT /          -> partial update
/// PUT /profile   -> update company name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get_settings).put(settings::update))
        .route("/profile", put(settings::update_profile))
}
