//! Contract for the external analytics backend.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures of a single backend call.
///
/// The variants map onto the handler-level taxonomy: `Unauthorized` is an
/// expired or rejected credential, `Status` is a non-OK answer from a live
/// backend, and `Unreachable`/`Decode` mean no usable answer arrived at all.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend rejected the credential")]
    Unauthorized,

    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("invalid backend response: {0}")]
    Decode(String),
}

/// A JSON answer from the backend together with its status code.
///
/// Non-OK answers are only surfaced this way when their body is valid JSON;
/// otherwise they become [`BackendError::Status`].
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
}

impl BackendReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound calls made against the analytics backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpBackend`] - reqwest-based client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Exchanges form credentials at `POST /token` for an access token.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Unauthorized`] or [`BackendError::Status`] when the
    ///   backend rejects the credentials
    /// - [`BackendError::Unreachable`] on connection failure
    /// - [`BackendError::Decode`] when the answer carries no `access_token`
    async fn exchange_token(&self, username: &str, password: &str) -> Result<String, BackendError>;

    /// Fetches the dashboard payload at `GET /dashboard` with a bearer credential.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Unauthorized`] on a 401 answer
    /// - [`BackendError::Status`] on a non-OK answer without a JSON body
    /// - [`BackendError::Unreachable`] on connection failure
    /// - [`BackendError::Decode`] on an OK answer without a JSON body
    async fn fetch_dashboard(&self, token: &str) -> Result<BackendReply, BackendError>;

    /// Fetches the score history at `GET /history`.
    async fn fetch_history(&self) -> Result<Value, BackendError>;

    /// Probes the backend root for reachability.
    async fn ping(&self) -> Result<(), BackendError>;
}
