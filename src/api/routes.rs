//! API route configuration.
//!
//! Credentials are resolved inside the handlers through the configured
//! [`crate::domain::session::SessionStore`].

use crate::api::handlers::dashboard_proxy_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET /dashboard` - Relay of the backend dashboard payload
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard_proxy_handler))
}
