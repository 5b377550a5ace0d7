//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Dashboard page, or history JSON for JSON clients
//! - `GET|POST /login`     - Login page and form action (rate limited)
//! - `GET|POST /logout`    - Clear session
//! - `GET  /api/dashboard` - Backend dashboard relay for polling
//! - `GET  /health`        - Backend reachability check
//! - `/static/*`           - Static assets
//!
//! # Middleware
//!
//! Outermost first: tracing, origin normalization, CSRF check. Path
//! normalization wraps the whole router in [`app_router`].

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::{csrf, origin_guard};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the production router.
///
/// The login routes are rate limited per peer IP, so the server must be
/// started with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let login = web::routes::login_routes().layer(rate_limit::login_layer());

    NormalizePathLayer::trim_trailing_slash().layer(compose(state, login))
}

/// Constructs the router without rate limiting or path normalization.
///
/// Used where no peer address is available, such as in-process test servers.
pub fn router(state: AppState) -> Router {
    compose(state, web::routes::login_routes())
}

fn compose(state: AppState, login: Router<AppState>) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(login)
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .layer(middleware::from_fn_with_state(state.clone(), csrf::layer))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin_guard::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
