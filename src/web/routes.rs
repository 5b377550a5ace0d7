//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, login_action_handler, login_page_handler, logout_handler,
};
use axum::{Router, routing::get};

/// Dashboard and logout routes.
///
/// Session checks happen inside the handlers so that an expired credential
/// can be cleared on the same response that redirects.
///
/// # Endpoints
///
/// - `GET  /`       - Dashboard page (or history JSON for JSON clients)
/// - `POST /logout` - Clear session and redirect to login
/// - `GET  /logout` - Same, for plain links
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/logout", get(logout_handler).post(logout_handler))
}

/// Login routes, kept apart so they can be rate limited on their own.
///
/// # Endpoints
///
/// - `GET  /login` - Login page
/// - `POST /login` - Login form action
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_action_handler))
}
