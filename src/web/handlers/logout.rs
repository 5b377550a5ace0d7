//! Logout action handler.

use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::application::outcome::Navigation;
use crate::state::AppState;

/// Drops the session credential and returns to the login page.
///
/// # Endpoint
///
/// `POST /logout` (also `GET /logout` for plain links)
///
/// Always answers `302 /login`, whatever the prior session state. The cookie
/// store emits a removal cookie; the header store has nothing to clear. No
/// backend call is made.
pub async fn logout_handler(State(st): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (st.session.clear(jar), Navigation::found("/login"))
}
