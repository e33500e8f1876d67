//! Monitor models: configurations, recent-history slots and check attempts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::IntegrationConfig;
use crate::serde_helpers::null_as_default;

/// A configured, recurring health check.
///
/// `enabled` and `healthy` are independent: a disabled monitor keeps its
/// last known health, and `updated_at` records when it was disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub method: String,
    /// Seconds between checks.
    pub interval: u32,
    /// Consecutive failures before an alert fires.
    pub threshold: u32,
    /// Request timeout in seconds.
    pub timeout: u32,
    pub healthy: bool,
    /// Unix seconds of the last check, 0 when never run.
    #[serde(default)]
    pub last_run: i64,
    #[serde(default)]
    pub running: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub failed_attempts: u32,
    /// Oldest first, as returned by the engine.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Vec<Slot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub integrations: Vec<IntegrationConfig>,
}

fn default_true() -> bool {
    true
}

/// One historical health sample in a monitor's strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub timestamp: i64,
    pub healthy: bool,
    pub is_monitoring_enabled: bool,
}

/// One executed health check. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: u64,
    #[serde(default)]
    pub monitor_config_id: u64,
    #[serde(default)]
    pub monitor_config: Option<MonitorConfig>,
    pub healthy: bool,
    /// 0 when the target never answered.
    #[serde(default)]
    pub status_code: u16,
    /// Whatever the target returned. Usually a string, sometimes JSON.
    #[serde(default)]
    pub response: serde_json::Value,
    #[serde(default)]
    pub created_at: i64,
}

impl Attempt {
    /// Response body as text; strings are unwrapped, other JSON is rendered compactly.
    pub fn response_text(&self) -> String {
        match &self.response {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// The target gave no answer at all.
    pub fn is_no_response(&self) -> bool {
        self.status_code == 0 && self.response_text().is_empty()
    }
}

/// HTTP methods a monitor can use for its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [Self::Get, Self::Post, Self::Put, Self::Patch];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }

    /// Next method in `ALL`, wrapping.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Get => Self::Post,
            Self::Post => Self::Put,
            Self::Put => Self::Patch,
            Self::Patch => Self::Get,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            other => Err(format!("unsupported method: {other}")),
        }
    }
}

/// Body for `POST /monitors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMonitorParams {
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    pub interval: u32,
    pub threshold: u32,
    pub timeout: u32,
    pub integration_id_list: Vec<u64>,
}

/// Body for `PUT /monitors/:id`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMonitorParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id_list: Option<Vec<u64>>,
}

impl UpdateMonitorParams {
    /// Only flip the enabled flag.
    pub fn set_enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }
}

impl From<CreateMonitorParams> for UpdateMonitorParams {
    fn from(params: CreateMonitorParams) -> Self {
        Self {
            name: Some(params.name),
            url: Some(params.url),
            method: Some(params.method),
            interval: Some(params.interval),
            threshold: Some(params.threshold),
            timeout: Some(params.timeout),
            enabled: None,
            integration_id_list: Some(params.integration_id_list),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monitor_with_null_collections() {
        let monitor: MonitorConfig = serde_json::from_value(json!({
            "id": 1,
            "name": "api",
            "url": "https://api.example.com/health",
            "method": "GET",
            "interval": 30,
            "threshold": 3,
            "timeout": 5,
            "healthy": true,
            "last_run": 1700000000,
            "running": false,
            "enabled": false,
            "created_at": 1690000000,
            "updated_at": 1700000100,
            "failed_attempts": 0,
            "slots": null,
            "integrations": null
        }))
        .unwrap();

        assert!(monitor.slots.is_empty());
        assert!(monitor.integrations.is_empty());
        assert!(!monitor.enabled);
        assert!(monitor.healthy);
    }

    #[test]
    fn test_attempt_response_forms() {
        let raw: Attempt = serde_json::from_value(json!({
            "id": 9, "healthy": false, "status_code": 502,
            "response": "Bad Gateway", "created_at": 1
        }))
        .unwrap();
        assert_eq!(raw.response_text(), "Bad Gateway");
        assert!(!raw.is_no_response());

        let silent: Attempt = serde_json::from_value(json!({
            "id": 10, "healthy": false, "status_code": 0, "response": "", "created_at": 1
        }))
        .unwrap();
        assert!(silent.is_no_response());

        let structured: Attempt = serde_json::from_value(json!({
            "id": 11, "healthy": false, "status_code": 500,
            "response": {"error": "boom"}, "created_at": 1
        }))
        .unwrap();
        assert_eq!(structured.response_text(), r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_update_params_skip_unset_fields() {
        let body = serde_json::to_value(UpdateMonitorParams::set_enabled(false)).unwrap();
        assert_eq!(body, json!({"enabled": false}));
    }

    #[test]
    fn test_http_method_parsing() {
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert!("DELETE".parse::<HttpMethod>().is_err());
        assert_eq!(
            serde_json::to_value(HttpMethod::Post).unwrap(),
            json!("POST")
        );
        assert_eq!(HttpMethod::Patch.cycle_next(), HttpMethod::Get);
    }
}
