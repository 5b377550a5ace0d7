//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, DashboardService};
use crate::config::Config;
use crate::domain::session::{self, SessionStore};
use crate::infrastructure::backend::HttpBackend;
use crate::web::middleware::origin_guard::OriginPolicy;

/// Immutable per-process state. Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService<HttpBackend>>,
    pub auth_service: Arc<AuthService<HttpBackend>>,
    pub session: Arc<dyn SessionStore>,
    pub origins: Arc<OriginPolicy>,
}

impl AppState {
    pub fn new(
        backend: Arc<HttpBackend>,
        session: Arc<dyn SessionStore>,
        origins: OriginPolicy,
    ) -> Self {
        Self {
            dashboard_service: Arc::new(DashboardService::new(backend.clone())),
            auth_service: Arc::new(AuthService::new(backend)),
            session,
            origins: Arc::new(origins),
        }
    }

    /// Wires state from validated configuration and an already-resolved backend.
    pub fn from_config(config: &Config, backend: Arc<HttpBackend>) -> Self {
        Self::new(
            backend,
            session::store_for(config.session_strategy, config.session_max_age),
            OriginPolicy::from_config(config),
        )
    }
}
