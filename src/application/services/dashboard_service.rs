//! Dashboard data service: page loading, API relay and history.

use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::application::outcome::{Navigation, PageOutcome};
use crate::domain::backend::{BackendApi, BackendError, BackendReply};
use crate::domain::identity::DisplayIdentity;
use crate::domain::payload::{self, FallbackStatus};

/// Signed-in user as shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfo {
    pub name: String,
}

/// Data handed to the dashboard template: `{ user: { name }, health }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub user: UserInfo,
    pub health: Value,
    #[serde(skip)]
    pub identity: DisplayIdentity,
}

/// Result of relaying `GET /dashboard` for the JSON endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    /// Backend JSON, relayed verbatim.
    Relay(Value),
    /// No credential on the request.
    Unauthorized,
    /// The backend rejected the credential.
    Expired,
    /// No usable answer from the backend.
    Offline,
}

/// Service behind the dashboard page and its JSON endpoints.
pub struct DashboardService<B: BackendApi> {
    backend: Arc<B>,
}

impl<B: BackendApi> DashboardService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Loads the dashboard page for the given session credential.
    ///
    /// # Outcomes
    ///
    /// - no credential: redirect `302 /login`
    /// - backend 401: redirect `302 /login` and drop the credential
    /// - backend non-OK: placeholder payload with status `CONNECTING...`
    /// - backend unreachable or undecodable: placeholder with `UNREACHABLE`
    /// - backend OK with a JSON object: the object, verbatim
    ///
    /// Never fails: every backend problem becomes a renderable payload.
    pub async fn load_page(&self, token: Option<&str>) -> PageOutcome<DashboardPage> {
        let Some(token) = token else {
            return PageOutcome::Redirect(Navigation::found("/login"));
        };

        let identity = DisplayIdentity::from_token(token);

        let health = match self.backend.fetch_dashboard(token).await {
            Ok(reply) => health_from_reply(reply),
            Err(BackendError::Unauthorized) => {
                tracing::info!("Backend rejected session credential, redirecting to login");
                return PageOutcome::Redirect(Navigation::found("/login").clearing_session());
            }
            Err(BackendError::Status { status, .. }) => {
                tracing::warn!(status, "Backend answered with non-OK status");
                payload::fallback(FallbackStatus::Connecting)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch dashboard data");
                payload::fallback(FallbackStatus::Unreachable)
            }
        };

        PageOutcome::Render(DashboardPage {
            user: UserInfo {
                name: identity.name.clone(),
            },
            health,
            identity,
        })
    }

    /// Relays the dashboard payload for client-side polling.
    ///
    /// Any JSON answer other than a 401 is relayed as-is, whatever its status.
    pub async fn proxy(&self, token: Option<&str>) -> ProxyOutcome {
        let Some(token) = token else {
            return ProxyOutcome::Unauthorized;
        };

        match self.backend.fetch_dashboard(token).await {
            Ok(reply) => ProxyOutcome::Relay(reply.body),
            Err(BackendError::Unauthorized) => ProxyOutcome::Expired,
            Err(e) => {
                tracing::error!(error = %e, "Dashboard proxy connection failed");
                ProxyOutcome::Offline
            }
        }
    }

    /// Fetches score history, degrading to an empty list on any failure.
    pub async fn history(&self) -> Value {
        match self.backend.fetch_history().await {
            Ok(history) => history,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch history");
                json!([])
            }
        }
    }

    /// Checks that the backend answers at all.
    pub async fn backend_reachable(&self) -> Result<(), BackendError> {
        self.backend.ping().await
    }
}

fn health_from_reply(reply: BackendReply) -> Value {
    if !reply.is_success() {
        tracing::warn!(status = reply.status, "Backend answered with non-OK status");
        return payload::fallback(FallbackStatus::Connecting);
    }

    if reply.body.is_object() {
        reply.body
    } else {
        tracing::warn!("Backend dashboard payload is not a JSON object");
        payload::fallback(FallbackStatus::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backend::MockBackendApi;
    use crate::domain::identity::UNKNOWN_NAME;

    fn live_payload() -> Value {
        json!({
            "status": "HEALTHY",
            "score": 0.12,
            "interface": "enp1s0",
            "model": "COPOD",
            "metrics": { "cpu": 3.5, "mbps": 0.5, "pps": 40 },
            "flow_data": { "top_ips": [], "protocols": [] },
            "history": []
        })
    }

    fn service_returning(
        result: impl Fn() -> Result<BackendReply, BackendError> + Send + 'static,
    ) -> DashboardService<MockBackendApi> {
        let mut mock = MockBackendApi::new();
        mock.expect_fetch_dashboard()
            .times(1)
            .returning(move |_| result());
        DashboardService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_load_page_without_token_redirects() {
        let mut mock = MockBackendApi::new();
        mock.expect_fetch_dashboard().never();
        let service = DashboardService::new(Arc::new(mock));

        let outcome = service.load_page(None).await;

        assert_eq!(outcome, PageOutcome::Redirect(Navigation::found("/login")));
    }

    #[tokio::test]
    async fn test_load_page_passes_token_to_backend() {
        let mut mock = MockBackendApi::new();
        mock.expect_fetch_dashboard()
            .withf(|token| token == "session-token")
            .times(1)
            .returning(|_| Ok(BackendReply::new(200, live_payload())));
        let service = DashboardService::new(Arc::new(mock));

        let PageOutcome::Render(page) = service.load_page(Some("session-token")).await else {
            panic!("expected page to render");
        };

        assert_eq!(page.health, live_payload());
        assert_eq!(page.user.name, UNKNOWN_NAME);
    }

    #[tokio::test]
    async fn test_load_page_expired_clears_session() {
        let service = service_returning(|| Err(BackendError::Unauthorized));

        let outcome = service.load_page(Some("old")).await;

        assert_eq!(
            outcome,
            PageOutcome::Redirect(Navigation::found("/login").clearing_session())
        );
    }

    #[tokio::test]
    async fn test_load_page_unreachable_falls_back() {
        let service =
            service_returning(|| Err(BackendError::Unreachable("connection refused".into())));

        let PageOutcome::Render(page) = service.load_page(Some("tok")).await else {
            panic!("expected page to render");
        };

        assert_eq!(page.health, payload::fallback(FallbackStatus::Unreachable));
    }

    #[tokio::test]
    async fn test_load_page_non_ok_is_connecting() {
        let service = service_returning(|| {
            Ok(BackendReply::new(503, json!({ "detail": "warming up" })))
        });

        let PageOutcome::Render(page) = service.load_page(Some("tok")).await else {
            panic!("expected page to render");
        };

        assert_eq!(page.health["status"], "CONNECTING...");
    }

    #[tokio::test]
    async fn test_load_page_non_ok_without_body_is_connecting() {
        let service = service_returning(|| {
            Err(BackendError::Status {
                status: 502,
                detail: None,
            })
        });

        let PageOutcome::Render(page) = service.load_page(Some("tok")).await else {
            panic!("expected page to render");
        };

        assert_eq!(page.health["status"], "CONNECTING...");
    }

    #[tokio::test]
    async fn test_load_page_non_object_payload_falls_back() {
        let service = service_returning(|| Ok(BackendReply::new(200, json!("online"))));

        let PageOutcome::Render(page) = service.load_page(Some("tok")).await else {
            panic!("expected page to render");
        };

        assert_eq!(page.health["status"], "UNREACHABLE");
    }

    #[tokio::test]
    async fn test_proxy_without_token() {
        let mut mock = MockBackendApi::new();
        mock.expect_fetch_dashboard().never();
        let service = DashboardService::new(Arc::new(mock));

        assert_eq!(service.proxy(None).await, ProxyOutcome::Unauthorized);
    }

    #[tokio::test]
    async fn test_proxy_relays_non_ok_json_verbatim() {
        let service =
            service_returning(|| Ok(BackendReply::new(500, json!({ "status": "ERROR", "score": 0.0 }))));

        assert_eq!(
            service.proxy(Some("tok")).await,
            ProxyOutcome::Relay(json!({ "status": "ERROR", "score": 0.0 }))
        );
    }

    #[tokio::test]
    async fn test_proxy_expired_and_offline() {
        let service = service_returning(|| Err(BackendError::Unauthorized));
        assert_eq!(service.proxy(Some("tok")).await, ProxyOutcome::Expired);

        let service = service_returning(|| Err(BackendError::Decode("eof".into())));
        assert_eq!(service.proxy(Some("tok")).await, ProxyOutcome::Offline);

        let service = service_returning(|| {
            Err(BackendError::Status {
                status: 502,
                detail: None,
            })
        });
        assert_eq!(service.proxy(Some("tok")).await, ProxyOutcome::Offline);
    }

    #[tokio::test]
    async fn test_history_degrades_to_empty() {
        let mut mock = MockBackendApi::new();
        mock.expect_fetch_history()
            .times(1)
            .returning(|| Err(BackendError::Unreachable("refused".into())));
        let service = DashboardService::new(Arc::new(mock));

        assert_eq!(service.history().await, json!([]));
    }

    #[tokio::test]
    async fn test_history_relayed() {
        let mut mock = MockBackendApi::new();
        mock.expect_fetch_history()
            .times(1)
            .returning(|| Ok(json!([{ "timestamp": "10:00:00", "score": 0.2 }])));
        let service = DashboardService::new(Arc::new(mock));

        assert_eq!(service.history().await[0]["score"], 0.2);
    }
}
