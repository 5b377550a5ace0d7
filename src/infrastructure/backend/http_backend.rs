//! reqwest implementation of [`BackendApi`].

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::backend::{BackendApi, BackendError, BackendReply};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Backend client over HTTP.
///
/// `base_url` serves `/token`, `/dashboard` and `/`; `history_url` serves
/// `/history` and is resolved separately at startup.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    history_url: String,
}

impl HttpBackend {
    pub fn new(client: Client, base_url: impl Into<String>, history_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            history_url: history_url.into(),
        }
    }

    /// Builds the shared HTTP client. Without a timeout a hung backend call
    /// blocks only the request that issued it.
    pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
        let mut builder = Client::builder().user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn history_endpoint(&self) -> String {
        format!("{}/history", self.history_url.trim_end_matches('/'))
    }
}

fn unreachable(e: reqwest::Error) -> BackendError {
    BackendError::Unreachable(e.to_string())
}

async fn read_json(response: Response) -> Result<Value, BackendError> {
    let bytes = response.bytes().await.map_err(unreachable)?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Pulls FastAPI-style `detail` out of an error body for logging.
fn error_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn exchange_token(&self, username: &str, password: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(unreachable)?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                return Err(BackendError::Unauthorized);
            }
            let detail = read_json(response).await.ok().as_ref().and_then(error_detail);
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body = read_json(response).await?;
        let token: TokenResponse =
            serde_json::from_value(body).map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(token.access_token)
    }

    async fn fetch_dashboard(&self, token: &str) -> Result<BackendReply, BackendError> {
        let response = self
            .client
            .get(self.url("/dashboard"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(unreachable)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }

        match read_json(response).await {
            Ok(body) => Ok(BackendReply::new(status.as_u16(), body)),
            Err(BackendError::Decode(_)) if !status.is_success() => Err(BackendError::Status {
                status: status.as_u16(),
                detail: None,
            }),
            Err(e) => Err(e),
        }
    }

    async fn fetch_history(&self) -> Result<Value, BackendError> {
        let response = self
            .client
            .get(self.history_endpoint())
            .send()
            .await
            .map_err(unreachable)?;

        read_json(response).await
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .map_err(unreachable)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::Status {
                status: status.as_u16(),
                detail: None,
            })
        }
    }
}
