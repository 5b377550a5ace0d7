//! Origin header normalization for POST requests.

use axum::{
    extract::{Request, State},
    http::{
        self, HeaderValue, Method,
        header::{HOST, ORIGIN},
    },
    middleware::Next,
    response::Response,
};

use crate::config::Config;
use crate::state::AppState;

/// Origin rules shared by the origin guard and the CSRF check.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed_prefixes: Vec<String>,
    public_origin: Option<String>,
    csrf_check: bool,
}

impl OriginPolicy {
    pub fn new(allowed_prefixes: Vec<String>, public_origin: Option<String>, csrf_check: bool) -> Self {
        Self {
            allowed_prefixes,
            public_origin,
            csrf_check,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.allowed_origins.clone(),
            config.public_origin.clone(),
            config.csrf_check,
        )
    }

    pub fn csrf_check(&self) -> bool {
        self.csrf_check
    }

    /// The server's own origin as seen by this request.
    ///
    /// `PUBLIC_ORIGIN` when configured, otherwise `http://` plus the `Host`
    /// header (or the URI authority for HTTP/2).
    pub fn canonical_origin<B>(&self, req: &http::Request<B>) -> Option<String> {
        if let Some(ref origin) = self.public_origin {
            return Some(origin.clone());
        }

        let host = req
            .headers()
            .get(HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .or_else(|| req.uri().authority().map(|a| a.to_string()))?;

        Some(format!("http://{host}"))
    }

    /// Whether `origin` starts with one of the allowlisted prefixes.
    ///
    /// The match must end on an origin boundary: the origin is the prefix
    /// itself or continues with `/`. `http://localhost:8080.evil.example`
    /// does not match `http://localhost:8080`.
    pub fn is_allowlisted(&self, origin: &str) -> bool {
        self.allowed_prefixes.iter().any(|prefix| {
            origin
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    /// Rewrites an allowlisted `origin` header of a POST request in place.
    ///
    /// Returns `true` when the header was rewritten.
    pub fn normalize<B>(&self, req: &mut http::Request<B>) -> bool {
        if req.method() != Method::POST {
            return false;
        }

        let Some(origin) = req.headers().get(ORIGIN).and_then(|o| o.to_str().ok()) else {
            return false;
        };

        if !self.is_allowlisted(origin) {
            return false;
        }

        let Some(canonical) = self.canonical_origin(req) else {
            return false;
        };

        match HeaderValue::from_str(&canonical) {
            Ok(value) => {
                req.headers_mut().insert(ORIGIN, value);
                true
            }
            Err(_) => false,
        }
    }
}

/// Rewrites allowlisted development origins to the canonical origin before
/// any downstream origin check runs.
///
/// Non-POST requests and POST requests without an `origin` header pass
/// through untouched.
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    if st.origins.normalize(&mut req) {
        tracing::debug!("Rewrote allowlisted origin to canonical origin");
    }

    next.run(req).await
}
