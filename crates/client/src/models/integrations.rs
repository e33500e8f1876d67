//! Alert integration models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::serde_helpers::string_from_number_or_string;

/// Where alerts are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntegrationType {
    #[default]
    Slack,
    Discord,
}

impl IntegrationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slack => "SLACK",
            Self::Discord => "DISCORD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Slack => "Slack",
            Self::Discord => "Discord",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Slack => Self::Discord,
            Self::Discord => Self::Slack,
        }
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An outbound alert destination (Slack or Discord webhook).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Numeric on the wire, kept as text so it can key a selection directly.
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub id: String,
    pub name: String,
    /// Webhook URL. Sensitive.
    pub url: String,
    #[serde(rename = "type")]
    pub kind: IntegrationType,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Body for `POST /integrations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIntegrationParams {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: IntegrationType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integration_accepts_numeric_id() {
        let integration: IntegrationConfig = serde_json::from_value(json!({
            "id": 3,
            "name": "ops-channel",
            "url": "https://hooks.slack.com/services/T000/B000/XXX",
            "type": "SLACK",
            "created_at": 1,
            "updated_at": 2
        }))
        .unwrap();
        assert_eq!(integration.id, "3");
        assert_eq!(integration.kind, IntegrationType::Slack);
    }

    #[test]
    fn test_create_params_use_type_key() {
        let body = serde_json::to_value(CreateIntegrationParams {
            name: "alerts".into(),
            url: "https://discord.com/api/webhooks/1/abc".into(),
            kind: IntegrationType::Discord,
        })
        .unwrap();
        assert_eq!(body["type"], "DISCORD");
    }
}
