mod common;

use axum::http::{HeaderValue, StatusCode, header};
use nadash_web::domain::session::SessionStrategy;
use serde_json::{Value, json};

fn cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&common::session_cookie(token)).unwrap()
}

#[tokio::test]
async fn test_api_dashboard_without_session() {
    let base = common::spawn_backend(common::healthy_backend()).await;
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Cookie));

    let response = server.get("/api/dashboard").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>(), json!({ "status": "UNAUTHORIZED" }));
}

#[tokio::test]
async fn test_api_dashboard_relays_payload() {
    let base = common::spawn_backend(common::healthy_backend()).await;
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Cookie));

    let response = server
        .get("/api/dashboard")
        .add_header(header::COOKIE, cookie(&common::valid_token()))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), common::live_payload());
}

#[tokio::test]
async fn test_api_dashboard_expired_clears_cookie() {
    let base = common::spawn_backend(common::healthy_backend()).await;
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Cookie));

    let response = server
        .get("/api/dashboard")
        .add_header(header::COOKIE, cookie("stale-token"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>(), json!({ "status": "EXPIRED" }));

    let set_cookie = common::set_cookie(&response).expect("removal cookie");
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_api_dashboard_offline() {
    let base = common::unreachable_url();
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Cookie));

    let response = server
        .get("/api/dashboard")
        .add_header(header::COOKIE, cookie(&common::valid_token()))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "status": "OFFLINE" }));
}

#[tokio::test]
async fn test_api_dashboard_non_json_error_is_offline() {
    let base = common::spawn_backend(common::warming_backend()).await;
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Cookie));

    let response = server
        .get("/api/dashboard")
        .add_header(header::COOKIE, cookie(&common::valid_token()))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "status": "OFFLINE" }));
}

#[tokio::test]
async fn test_api_dashboard_header_strategy() {
    let base = common::spawn_backend(common::healthy_backend()).await;
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Header));
    let bearer = HeaderValue::from_str(&format!("bearer {}", common::valid_token())).unwrap();

    let response = server
        .get("/api/dashboard")
        .add_header(header::AUTHORIZATION, bearer)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "HEALTHY");
}

#[tokio::test]
async fn test_api_dashboard_header_strategy_ignores_cookie() {
    let base = common::spawn_backend(common::healthy_backend()).await;
    let server = common::make_server(common::create_test_state(&base, SessionStrategy::Header));

    let response = server
        .get("/api/dashboard")
        .add_header(header::COOKIE, cookie(&common::valid_token()))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>(), json!({ "status": "UNAUTHORIZED" }));
}
