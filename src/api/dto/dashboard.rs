//! DTOs for the dashboard proxy endpoint.

use serde::Serialize;

/// Status-only body returned when no backend payload can be relayed.
///
/// ```json
/// { "status": "EXPIRED" }
/// ```
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProxyStatus {
    pub status: &'static str,
}

impl ProxyStatus {
    pub const UNAUTHORIZED: Self = Self {
        status: "UNAUTHORIZED",
    };
    pub const EXPIRED: Self = Self { status: "EXPIRED" };
    pub const OFFLINE: Self = Self { status: "OFFLINE" };
}
