//! Integration methods for [`SentinelClient`].

use crate::client::SentinelClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateIntegrationParams, IntegrationConfig};

impl SentinelClient {
    /// List integrations whose name matches `search` (all when `None` or empty).
    pub async fn list_integrations(&self, search: Option<&str>) -> Result<Vec<IntegrationConfig>> {
        endpoints::list_integrations(&self.http, &self.base_url, search, self.metrics.as_ref())
            .await
    }

    /// Create an integration.
    pub async fn create_integration(
        &self,
        params: &CreateIntegrationParams,
    ) -> Result<IntegrationConfig> {
        endpoints::create_integration(&self.http, &self.base_url, params, self.metrics.as_ref())
            .await
    }
}
