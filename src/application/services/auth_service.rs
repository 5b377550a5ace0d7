//! Login service exchanging form credentials with the backend.

use axum::http::StatusCode;
use std::fmt;
use std::sync::Arc;

use crate::domain::backend::{BackendApi, BackendError};

/// Why a login attempt did not produce a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    /// The backend rejected the username/password pair.
    BadCredentials,
    /// No usable answer from the backend.
    BackendOffline,
}

impl LoginFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadCredentials => StatusCode::BAD_REQUEST,
            Self::BackendOffline => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadCredentials => "Invalid username or password",
            Self::BackendOffline => "Backend is offline or unreachable",
        }
    }
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Service proxying login attempts to the backend token endpoint.
///
/// The service never touches cookies: deciding where the credential goes is
/// the session store's job.
pub struct AuthService<B: BackendApi> {
    backend: Arc<B>,
}

impl<B: BackendApi> AuthService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Exchanges credentials for an access token.
    ///
    /// # Errors
    ///
    /// - [`LoginFailure::BadCredentials`] when the backend answers non-OK
    /// - [`LoginFailure::BackendOffline`] on connection failure or a reply
    ///   without `access_token`
    pub async fn login(&self, username: &str, password: &str) -> Result<String, LoginFailure> {
        tracing::info!(username, "Proxying login request to backend");

        match self.backend.exchange_token(username, password).await {
            Ok(token) => {
                tracing::info!(username, "Token received from backend");
                Ok(token)
            }
            Err(BackendError::Unauthorized) => {
                tracing::info!(username, status = 401, "Login rejected by backend");
                Err(LoginFailure::BadCredentials)
            }
            Err(BackendError::Status { status, detail }) => {
                tracing::info!(
                    username,
                    status,
                    detail = detail.as_deref().unwrap_or("Unknown error"),
                    "Login rejected by backend"
                );
                Err(LoginFailure::BadCredentials)
            }
            Err(e) => {
                tracing::error!(error = %e, "Login connection error");
                Err(LoginFailure::BackendOffline)
            }
        }
    }
}
