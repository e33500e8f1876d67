//! Captured request logs and aggregate traffic metrics.

use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::serde_helpers::null_as_default;

/// One request observed by an instrumented service. camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLog {
    pub id: u64,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub timestamp: i64,
    pub method: String,
    pub url: String,
    pub status_code: u16,
    /// Milliseconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub query: serde_json::Value,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub headers: serde_json::Value,
    #[serde(default)]
    pub body: serde_json::Value,
}

/// One page of request logs plus the engine's page metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestLogPage {
    pub logs: Vec<RequestLog>,
    pub pagination: Pagination,
}

/// Requests bucketed by hour for the last day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTraffic {
    pub successful: bool,
    pub time_interval: i64,
    pub count: u64,
}

/// Per-route totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRequest {
    pub service_name: String,
    pub method: String,
    pub url: String,
    pub total: u64,
    pub failed: u64,
    pub average_duration: f64,
}

/// Aggregate traffic statistics from `GET /requests/metrics`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestMetrics {
    #[serde(default)]
    pub total_requests: u64,
    /// Percentage of failed requests, 0-100.
    #[serde(default)]
    pub error_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_traffic: Vec<DailyTraffic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grouped_requests: Vec<GroupedRequest>,
}
