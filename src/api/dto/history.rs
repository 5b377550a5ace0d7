//! DTOs for the legacy history endpoint.

use serde::Serialize;
use serde_json::Value;

/// Backend history wrapped for the client.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Value,
}
