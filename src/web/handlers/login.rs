//! Login page and form action handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::application::outcome::Navigation;
use crate::domain::session::SessionStrategy;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the login page.
///
/// Renders `templates/login.html` with an optional failure message and the
/// previously entered username.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub username: String,
}

/// Submitted login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login result for deployments that hand the token back to the caller.
#[derive(Debug, Serialize)]
pub struct TokenIssued {
    pub success: bool,
    pub access_token: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// A request that already carries a session credential is sent to `/`
/// with `303 See Other`. The credential is not checked against the backend.
pub async fn login_page_handler(State(st): State<AppState>, headers: HeaderMap) -> Response {
    if st.session.get(&headers).is_some() {
        return Navigation::see_other("/").into_response();
    }

    LoginTemplate {
        error: None,
        username: String::new(),
    }
    .into_response()
}

/// Handles the login form submission.
///
/// # Endpoint
///
/// `POST /login` with `username` and `password` form fields.
///
/// # Responses
///
/// - cookie strategy: `auth_token` cookie set and `303 /`
/// - header strategy: `200` with `{ "success": true, "access_token": ... }`
/// - rejected credentials: `400` "Invalid username or password", no cookie
/// - backend offline: `500` "Backend is offline or unreachable"
///
/// Failures render the login page (cookie strategy) or a JSON error (header
/// strategy).
pub async fn login_action_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let strategy = st.session.strategy();

    match st.auth_service.login(&form.username, &form.password).await {
        Ok(token) => match strategy {
            SessionStrategy::Cookie => {
                tracing::info!(username = %form.username, "Session cookie issued");
                (st.session.set(jar, token), Navigation::see_other("/")).into_response()
            }
            SessionStrategy::Header => Json(TokenIssued {
                success: true,
                access_token: token,
            })
            .into_response(),
        },
        Err(failure) => match strategy {
            SessionStrategy::Cookie => (
                failure.status(),
                LoginTemplate {
                    error: Some(failure.message().to_string()),
                    username: form.username,
                },
            )
                .into_response(),
            SessionStrategy::Header => AppError::from(failure).into_response(),
        },
    }
}
