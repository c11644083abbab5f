pub mod audits;
pub mod auth;
pub mod compliance;
pub mod data_requests;
pub mod health;
pub mod policies;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/profile                       profile (requires auth)
///
/// /audits                             list, create
/// /audits/{id}                        update (rescore)
///
/// /policies                           list
/// /policies/generate                  render + persist (POST)
///
/// /data-requests                      list (?status, ?search), create
/// /data-requests/stats                dashboard counters (GET)
/// /data-requests/{id}                 update, delete
///
/// /compliance/alerts                  list (?severity, ?is_read), broadcast (enterprise)
/// /compliance/alerts/{id}/read        mark read (PUT)
/// /compliance/metrics                 dashboard metrics (GET)
///
/// /settings                           get, update
/// /settings/profile                   update company name (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/audits", audits::router())
        .nest("/policies", policies::router())
        .nest("/data-requests", data_requests::router())
        .nest("/compliance", compliance::router())
        .nest("/settings", settings::router())
}
