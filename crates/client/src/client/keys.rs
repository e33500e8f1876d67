//! API key methods for [`SentinelClient`].

use crate::client::SentinelClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiKeyConfig, CreateApiKeyParams};

impl SentinelClient {
    /// List API keys.
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKeyConfig>> {
        endpoints::list_api_keys(&self.http, &self.base_url, self.metrics.as_ref()).await
    }

    /// Create an API key with the given name.
    pub async fn create_api_key(&self, name: &str) -> Result<Option<String>> {
        let params = CreateApiKeyParams {
            name: name.to_string(),
        };
        endpoints::create_api_key(&self.http, &self.base_url, &params, self.metrics.as_ref()).await
    }
}
