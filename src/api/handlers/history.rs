//! Handler for the legacy history endpoint.

use axum::{Json, extract::State};

use crate::api::dto::history::HistoryResponse;
use crate::state::AppState;

/// Relays the backend score history.
///
/// # Endpoint
///
/// `GET /` with `Accept: application/json`
///
/// Always answers `200`; any backend failure yields `{"history": []}`.
pub async fn history_handler(State(st): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: st.dashboard_service.history().await,
    })
}
