#![allow(dead_code)]

use axum::{
    Form, Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use nadash_web::domain::session::{self, SessionStrategy};
use nadash_web::infrastructure::backend::HttpBackend;
use nadash_web::routes;
use nadash_web::state::AppState;
use nadash_web::web::middleware::origin_guard::OriginPolicy;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

pub const USERNAME: &str = "analyst";
pub const PASSWORD: &str = "hunter2";
pub const PUBLIC_ORIGIN: &str = "http://dash.test";

/// Builds an unsigned three-segment token whose payload carries `claims`.
pub fn fake_jwt(claims: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

/// The token the stub backend issues and accepts.
pub fn valid_token() -> String {
    fake_jwt(json!({ "sub": USERNAME, "name": "Ada Analyst", "exp": 4102444800_i64 }))
}

pub fn live_payload() -> Value {
    json!({
        "status": "HEALTHY",
        "score": 0.125,
        "alert": null,
        "timestamp": "2026-10-16T09:00:00Z",
        "interface": "eth0",
        "model": "isolation-forest-v3",
        "metrics": { "cpu": 12.5, "mbps": 88.1, "pps": 5400 },
        "flow_data": {
            "top_ips": [{ "label": "10.0.0.5", "value": 1200 }],
            "protocols": [{ "label": "TCP", "value": 900 }]
        },
        "history": [{ "timestamp": "09:00", "score": 0.1 }]
    })
}

async fn stub_token(Form(form): Form<HashMap<String, String>>) -> Response {
    let ok = form.get("username").map(String::as_str) == Some(USERNAME)
        && form.get("password").map(String::as_str) == Some(PASSWORD);

    if ok {
        Json(json!({ "access_token": valid_token(), "token_type": "bearer" })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
            .into_response()
    }
}

async fn stub_dashboard(headers: HeaderMap) -> Response {
    let expected = format!("Bearer {}", valid_token());
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);

    if authorized {
        Json(live_payload()).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Could not validate credentials" })),
        )
            .into_response()
    }
}

/// A backend that behaves: issues tokens, serves the dashboard and history.
pub fn healthy_backend() -> Router {
    Router::new()
        .route("/", get(|| async { Json(json!({ "service": "nadash-backend" })) }))
        .route("/token", post(stub_token))
        .route("/dashboard", get(stub_dashboard))
        .route(
            "/history",
            get(|| async { Json(json!([{ "timestamp": "09:00", "score": 0.1 }])) }),
        )
}

/// A backend that is up but failing every request with a plain-text 503.
pub fn warming_backend() -> Router {
    let unavailable = || async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") };
    Router::new()
        .route("/", get(unavailable))
        .route("/token", post(unavailable))
        .route("/dashboard", get(unavailable))
        .route("/history", get(unavailable))
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A local URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn create_test_state(base_url: &str, strategy: SessionStrategy) -> AppState {
    let client = HttpBackend::build_client(None).unwrap();
    let backend = Arc::new(HttpBackend::new(client, base_url, base_url));

    AppState::new(
        backend,
        session::store_for(strategy, 3600),
        OriginPolicy::new(
            vec![
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
            Some(PUBLIC_ORIGIN.to_string()),
            true,
        ),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(routes::router(state)).unwrap()
}

pub fn session_cookie(token: &str) -> String {
    format!("auth_token={token}")
}

pub fn set_cookie(response: &axum_test::TestResponse) -> Option<String> {
    response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

pub fn location(response: &axum_test::TestResponse) -> Option<String> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
