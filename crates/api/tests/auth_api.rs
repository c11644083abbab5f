//! HTTP-level tests for authentication enforcement and input validation.
//!
//! These run against a lazy pool, so they cover the paths that reject a
//! request before any database work happens.

mod common;

use axum::http::StatusCode;
use common::{assert_unauthorized, body_json, get, get_auth, post_json};

use privacyguard_api::auth::jwt::generate_access_token;

// ---------------------------------------------------------------------------
// Bearer-token enforcement
// ---------------------------------------------------------------------------

/// Every authenticated route rejects a request with no Authorization header.
#[tokio::test]
async fn missing_token_returns_401() {
    for uri in [
        "/api/v1/auth/profile",
        "/api/v1/audits",
        "/api/v1/policies",
        "/api/v1/data-requests",
        "/api/v1/data-requests/stats",
        "/api/v1/compliance/alerts",
        "/api/v1/compliance/metrics",
        "/api/v1/settings",
    ] {
        let app = common::build_test_app(common::lazy_pool());
        let response = get(app, uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "expected 401 for {uri}"
        );
    }
}

#[tokio::test]
async fn malformed_authorization_header_returns_401() {
    let app = common::build_test_app(common::lazy_pool());
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/audits")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_unauthorized(response).await;
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let app = common::build_test_app(common::lazy_pool());
    let response = get_auth(app, "/api/v1/audits", "not-a-jwt").await;
    assert_unauthorized(response).await;
}

/// A token signed with a different secret is rejected.
#[tokio::test]
async fn token_with_wrong_secret_returns_401() {
    let mut foreign = common::test_config();
    foreign.jwt.secret = "a-completely-different-secret".to_string();
    let token = generate_access_token(1, "free", &foreign.jwt).expect("token should generate");

    let app = common::build_test_app(common::lazy_pool());
    let response = get_auth(app, "/api/v1/audits", &token).await;
    assert_unauthorized(response).await;
}

// ---------------------------------------------------------------------------
// Registration input validation (rejected before touching the database)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = common::build_test_app(common::lazy_pool());
    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "long-enough-password",
        "company_name": "Acme",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"].is_array());
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = common::build_test_app(common::lazy_pool());
    let body = serde_json::json!({
        "email": "owner@example.com",
        "password": "short",
        "company_name": "Acme",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let details = json["details"].as_array().expect("details array");
    assert!(
        details.iter().any(|d| d.as_str().map(|s| s.starts_with("password")).unwrap_or(false)),
        "details should name the password field: {details:?}"
    );
}

#[tokio::test]
async fn register_rejects_empty_company_name() {
    let app = common::build_test_app(common::lazy_pool());
    let body = serde_json::json!({
        "email": "owner@example.com",
        "password": "long-enough-password",
        "company_name": "",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Plan gating
// ---------------------------------------------------------------------------

/// Manual alert broadcast is enterprise-only; a free-plan token gets 403
/// before any database access.
#[tokio::test]
async fn broadcast_requires_enterprise_plan() {
    let config = common::test_config();
    let token = generate_access_token(7, "free", &config.jwt).expect("token should generate");

    let app = common::build_test_app(common::lazy_pool());
    let body = serde_json::json!({
        "alert_type": "new-law",
        "title": "New regulation",
        "description": "A new privacy law takes effect next quarter.",
        "severity": "medium",
        "jurisdiction": "Global",
        "due_date": null,
        "action_required": false,
        "link": null,
    });

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/compliance/alerts")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}
