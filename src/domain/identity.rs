//! Display identity read from a session credential.
//!
//! # Not authoritative
//!
//! Claims are base64-decoded from the credential's payload segment WITHOUT
//! verifying its signature. Anyone can mint a token that decodes to any name.
//! The result is for display only and must never feed an access decision;
//! the backend remains the only party that validates credentials.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Name shown when claims decode but carry no usable name.
pub const DEFAULT_NAME: &str = "User";

/// Name shown when the credential is not a decodable token.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Claims the dashboard cares about. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UnverifiedClaims {
    pub sub: Option<String>,
    pub name: Option<String>,
    pub exp: Option<i64>,
}

/// Identity derived from unverified claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl DisplayIdentity {
    /// Decodes a display identity, swallowing every decode failure.
    pub fn from_token(token: &str) -> Self {
        match decode_unverified(token) {
            Some(claims) => {
                let name = claims
                    .name
                    .or(claims.sub)
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_NAME.to_string());
                Self {
                    name,
                    expires_at: claims.exp.and_then(|exp| DateTime::from_timestamp(exp, 0)),
                }
            }
            None => {
                tracing::debug!("Session credential claims could not be decoded");
                Self {
                    name: UNKNOWN_NAME.to_string(),
                    expires_at: None,
                }
            }
        }
    }
}

/// Decodes the payload segment of a three-part token without any verification.
///
/// Returns `None` when the token is not `header.payload.signature`, the
/// payload is not base64url, or it is not a JSON object with the expected
/// claim types.
pub fn decode_unverified(token: &str) -> Option<UnverifiedClaims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
