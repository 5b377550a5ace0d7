//! Handler for the dashboard proxy endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::dashboard::ProxyStatus;
use crate::application::services::ProxyOutcome;
use crate::state::AppState;

/// Relays the backend dashboard payload for client-side polling.
///
/// # Endpoint
///
/// `GET /api/dashboard`
///
/// # Authentication
///
/// The credential is read through the configured session store: the
/// `auth_token` cookie or an `Authorization: Bearer` header.
///
/// # Response Codes
///
/// - **200 OK**: Backend JSON relayed verbatim
/// - **401 Unauthorized**: `{"status":"UNAUTHORIZED"}` without a credential,
///   `{"status":"EXPIRED"}` when the backend rejects it (cookie cleared)
/// - **500 Internal Server Error**: `{"status":"OFFLINE"}` when the backend
///   cannot be reached
pub async fn dashboard_proxy_handler(
    State(st): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let token = st.session.get(&headers);

    match st.dashboard_service.proxy(token.as_deref()).await {
        ProxyOutcome::Relay(body) => Json(body).into_response(),
        ProxyOutcome::Unauthorized => {
            (StatusCode::UNAUTHORIZED, Json(ProxyStatus::UNAUTHORIZED)).into_response()
        }
        ProxyOutcome::Expired => (
            StatusCode::UNAUTHORIZED,
            st.session.clear(jar),
            Json(ProxyStatus::EXPIRED),
        )
            .into_response(),
        ProxyOutcome::Offline => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ProxyStatus::OFFLINE)).into_response()
        }
    }
}
