//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header::ACCEPT},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::handlers::history_handler;
use crate::application::outcome::PageOutcome;
use crate::application::services::DashboardPage;
use crate::domain::payload::HealthSummary;
use crate::state::AppState;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with the health summary and embeds
/// the raw page data as JSON for the polling script.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user_name: String,
    pub session_expires: Option<String>,
    pub health: HealthSummary,
    pub page_data: String,
}

impl DashboardTemplate {
    pub fn from_page(page: &DashboardPage) -> Self {
        let page_data = serde_json::to_string(page)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c");

        Self {
            user_name: page.user.name.clone(),
            session_expires: page
                .identity
                .expires_at
                .map(|t| t.format("%H:%M UTC").to_string()),
            health: HealthSummary::from_payload(&page.health),
            page_data,
        }
    }
}

/// Serves `GET /`.
///
/// JSON clients (an `Accept` naming `application/json` but not `text/html`)
/// get the legacy history endpoint; everyone else gets the dashboard page.
///
/// # Page Outcomes
///
/// - no session credential: `302 /login`
/// - credential rejected by the backend: cookie cleared, `302 /login`
/// - otherwise: `200` with live or placeholder health data
pub async fn dashboard_handler(
    State(st): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    if wants_json(&headers) {
        return history_handler(State(st)).await.into_response();
    }

    let token = st.session.get(&headers);

    match st.dashboard_service.load_page(token.as_deref()).await {
        PageOutcome::Render(page) => DashboardTemplate::from_page(&page).into_response(),
        PageOutcome::Redirect(nav) => {
            let jar = if nav.clear_session {
                st.session.clear(jar)
            } else {
                jar
            };
            (jar, nav).into_response()
        }
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json") && !accept.contains("text/html"))
        .unwrap_or(false)
}
