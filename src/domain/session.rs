//! Session credential storage.
//!
//! A deployment picks exactly one [`SessionStrategy`]. Handlers only talk to
//! the [`SessionStore`] capability and never branch on where the credential
//! lives, except for the login success path which decides between setting a
//! cookie and handing the token back to the caller.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Name of the cookie carrying the session credential.
pub const SESSION_COOKIE: &str = "auth_token";

/// Where the session credential travels between browser and server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStrategy {
    /// HTTP-only `auth_token` cookie set by the login action.
    Cookie,
    /// `Authorization: Bearer` header; the login action returns the token.
    Header,
}

impl FromStr for SessionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cookie" => Ok(Self::Cookie),
            "header" => Ok(Self::Header),
            other => Err(format!("unknown session strategy '{other}'")),
        }
    }
}

impl fmt::Display for SessionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cookie => f.write_str("cookie"),
            Self::Header => f.write_str("header"),
        }
    }
}

/// Read/set/clear access to the session credential of one request.
pub trait SessionStore: Send + Sync {
    fn strategy(&self) -> SessionStrategy;

    /// Returns the credential carried by the request, if any.
    fn get(&self, headers: &HeaderMap) -> Option<String>;

    /// Records a freshly issued credential on the response.
    fn set(&self, jar: CookieJar, token: String) -> CookieJar;

    /// Drops the credential from the client.
    fn clear(&self, jar: CookieJar) -> CookieJar;
}

/// Cookie-backed sessions.
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    max_age: time::Duration,
}

impl CookieSessionStore {
    pub fn new(max_age_seconds: u64) -> Self {
        let seconds = i64::try_from(max_age_seconds).unwrap_or(i64::MAX);
        Self {
            max_age: time::Duration::seconds(seconds),
        }
    }
}

impl SessionStore for CookieSessionStore {
    fn strategy(&self) -> SessionStrategy {
        SessionStrategy::Cookie
    }

    fn get(&self, headers: &HeaderMap) -> Option<String> {
        CookieJar::from_headers(headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    fn set(&self, jar: CookieJar, token: String) -> CookieJar {
        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(false)
            .max_age(self.max_age);

        jar.add(cookie)
    }

    fn clear(&self, jar: CookieJar) -> CookieJar {
        expire_cookie(jar)
    }
}

/// Header-backed sessions. The client owns storage, so set and clear are no-ops.
#[derive(Debug, Clone, Default)]
pub struct HeaderSessionStore;

impl SessionStore for HeaderSessionStore {
    fn strategy(&self) -> SessionStrategy {
        SessionStrategy::Header
    }

    fn get(&self, headers: &HeaderMap) -> Option<String> {
        bearer_token(headers)
    }

    fn set(&self, jar: CookieJar, _token: String) -> CookieJar {
        jar
    }

    fn clear(&self, jar: CookieJar) -> CookieJar {
        jar
    }
}

/// Builds the store for a configured strategy.
pub fn store_for(strategy: SessionStrategy, max_age_seconds: u64) -> Arc<dyn SessionStore> {
    match strategy {
        SessionStrategy::Cookie => Arc::new(CookieSessionStore::new(max_age_seconds)),
        SessionStrategy::Header => Arc::new(HeaderSessionStore),
    }
}

/// Adds a removal cookie for `auth_token`, whether or not the request carried one.
pub fn expire_cookie(jar: CookieJar) -> CookieJar {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    cookie.make_removal();

    jar.add(cookie)
}

/// Extracts a bearer credential from a typed `Authorization` header.
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().trim().to_string())
        .filter(|token| !token.is_empty())
}
