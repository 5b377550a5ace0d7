//! Dashboard payload helpers.
//!
//! The payload schema belongs to the backend. This module only knows how to
//! build a placeholder with the same top-level shape and how to read a few
//! fields leniently for display.

use serde::Serialize;
use serde_json::{Value, json};

/// Status reported in the placeholder payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStatus {
    /// No usable answer: connection failure or undecodable body.
    Unreachable,
    /// The backend answered with a non-OK status and may still be warming up.
    Connecting,
}

impl FallbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unreachable => "UNREACHABLE",
            Self::Connecting => "CONNECTING...",
        }
    }
}

/// Builds the placeholder payload substituted when the backend cannot deliver.
///
/// Structurally identical to a live payload so the rendering layer never
/// sees a malformed shape.
pub fn fallback(status: FallbackStatus) -> Value {
    json!({
        "status": status.as_str(),
        "score": 0,
        "interface": "---",
        "model": "---",
        "metrics": { "cpu": 0, "mbps": 0, "pps": 0 },
        "flow_data": { "top_ips": [], "protocols": [] },
        "history": []
    })
}

/// A labelled value from `flow_data.top_ips` or `flow_data.protocols`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowEntry {
    pub label: String,
    pub value: f64,
}

/// One point of `history`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub score: f64,
}

/// Display view over a dashboard payload.
///
/// Every field is read leniently: missing or mistyped values fall back to
/// the same defaults the placeholder payload uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub status: String,
    pub score: f64,
    pub alert: Option<String>,
    pub timestamp: Option<String>,
    pub interface: String,
    pub model: String,
    pub cpu: f64,
    pub mbps: f64,
    pub pps: f64,
    pub top_ips: Vec<FlowEntry>,
    pub protocols: Vec<FlowEntry>,
    pub history: Vec<HistoryPoint>,
}

impl HealthSummary {
    pub fn from_payload(payload: &Value) -> Self {
        let text = |key: &str, default: &str| {
            payload
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };
        let metric = |key: &str| {
            payload
                .pointer(&format!("/metrics/{key}"))
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
        };

        Self {
            status: text("status", FallbackStatus::Unreachable.as_str()),
            score: payload.get("score").and_then(Value::as_f64).unwrap_or(0.0),
            alert: payload.get("alert").and_then(Value::as_str).map(String::from),
            timestamp: payload
                .get("timestamp")
                .and_then(Value::as_str)
                .map(String::from),
            interface: text("interface", "---"),
            model: text("model", "---"),
            cpu: metric("cpu"),
            mbps: metric("mbps"),
            pps: metric("pps"),
            top_ips: flow_entries(payload.pointer("/flow_data/top_ips")),
            protocols: flow_entries(payload.pointer("/flow_data/protocols")),
            history: history_points(payload.get("history")),
        }
    }

    /// Score as a percentage rounded for display.
    pub fn score_percent(&self) -> String {
        format!("{:.1}", self.score * 100.0)
    }
}

fn flow_entries(value: Option<&Value>) -> Vec<FlowEntry> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    Some(FlowEntry {
                        label: item.get("label")?.as_str()?.to_string(),
                        value: item.get("value").and_then(Value::as_f64).unwrap_or(0.0),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn history_points(value: Option<&Value>) -> Vec<HistoryPoint> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    Some(HistoryPoint {
                        timestamp: item.get("timestamp")?.as_str()?.to_string(),
                        score: item.get("score").and_then(Value::as_f64).unwrap_or(0.0),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_live_shape() {
        let payload = fallback(FallbackStatus::Unreachable);

        assert_eq!(payload["status"], "UNREACHABLE");
        assert_eq!(payload["score"], 0);
        assert_eq!(payload["interface"], "---");
        assert_eq!(payload["model"], "---");
        assert_eq!(payload["metrics"]["cpu"], 0);
        assert_eq!(payload["metrics"]["mbps"], 0);
        assert_eq!(payload["metrics"]["pps"], 0);
        assert!(payload["flow_data"]["top_ips"].as_array().unwrap().is_empty());
        assert!(payload["flow_data"]["protocols"].as_array().unwrap().is_empty());
        assert!(payload["history"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_fallback_connecting_status() {
        let payload = fallback(FallbackStatus::Connecting);
        assert_eq!(payload["status"], "CONNECTING...");
    }

    #[test]
    fn test_summary_reads_live_payload() {
        let payload = json!({
            "status": "CRITICAL",
            "score": 0.8123,
            "alert": "Port Scanning Activity",
            "timestamp": "12:00:01",
            "interface": "enp1s0",
            "model": "COPOD",
            "metrics": { "cpu": 12.5, "mbps": 3.25, "pps": 900 },
            "flow_data": {
                "top_ips": [{ "label": "10.0.0.5", "value": 5120.0 }],
                "protocols": [{ "label": "TCP", "value": 4096.0 }, { "label": "UDP", "value": 12 }]
            },
            "history": [{ "timestamp": "12:00:00", "score": 0.4 }]
        });

        let summary = HealthSummary::from_payload(&payload);

        assert_eq!(summary.status, "CRITICAL");
        assert_eq!(summary.alert.as_deref(), Some("Port Scanning Activity"));
        assert_eq!(summary.interface, "enp1s0");
        assert_eq!(summary.pps, 900.0);
        assert_eq!(summary.top_ips.len(), 1);
        assert_eq!(summary.protocols[1].value, 12.0);
        assert_eq!(summary.history[0].timestamp, "12:00:00");
        assert_eq!(summary.score_percent(), "81.2");
    }

    #[test]
    fn test_summary_tolerates_partial_payload() {
        // The backend answers `{status, score}` while its inference loop errors.
        let summary = HealthSummary::from_payload(&json!({ "status": "ERROR", "score": 0.0 }));

        assert_eq!(summary.status, "ERROR");
        assert_eq!(summary.interface, "---");
        assert_eq!(summary.cpu, 0.0);
        assert!(summary.top_ips.is_empty());
        assert!(summary.history.is_empty());
    }

    #[test]
    fn test_summary_skips_malformed_entries() {
        let payload = json!({
            "flow_data": { "top_ips": [{ "value": 1 }, "10.0.0.1", { "label": "10.0.0.2" }] }
        });

        let summary = HealthSummary::from_payload(&payload);

        assert_eq!(summary.top_ips, vec![FlowEntry { label: "10.0.0.2".into(), value: 0.0 }]);
    }
}
