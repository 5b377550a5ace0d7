//! # nadash-web
//!
//! Server-rendered dashboard for a network anomaly detection backend, built
//! with Axum. The server holds no state of its own: it proxies credentials
//! and telemetry to the analytics backend and renders what comes back.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Backend contract, payloads, sessions, display identity
//! - **Application Layer** ([`application`]) - Login and dashboard orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP backend client, address discovery
//! - **API Layer** ([`api`]) - JSON relay and health endpoints
//! - **Web Layer** ([`web`]) - HTML pages, login/logout, origin and CSRF middleware
//!
//! ## Behavior
//!
//! - Session credential kept in an HttpOnly `auth_token` cookie (or a
//!   `Bearer` header when `SESSION_STRATEGY=header`)
//! - Backend rejection clears the session and redirects to `/login`
//! - Backend outages degrade to a placeholder payload instead of an error page
//!
//! ## Quick Start
//!
//! ```bash
//! export API_URL="http://nadash-backend:8000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, DashboardService, ProxyOutcome};
    pub use crate::domain::backend::{BackendApi, BackendError};
    pub use crate::domain::session::SessionStrategy;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
