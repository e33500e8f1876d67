//! API key models.

use serde::{Deserialize, Serialize};

/// An API key used by instrumented services to push request logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyConfig {
    pub id: u64,
    pub name: String,
    /// Key material. Sensitive.
    pub value: String,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Body for `POST /keys`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateApiKeyParams {
    pub name: String,
}
