//! Monitor methods for [`SentinelClient`].

use crate::client::SentinelClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Attempt, CreateMonitorParams, MonitorConfig, UpdateMonitorParams};

impl SentinelClient {
    /// List all monitors.
    pub async fn list_monitors(&self) -> Result<Vec<MonitorConfig>> {
        endpoints::list_monitors(&self.http, &self.base_url, self.metrics.as_ref()).await
    }

    /// Get one monitor by id.
    pub async fn get_monitor(&self, id: u64) -> Result<MonitorConfig> {
        endpoints::get_monitor(&self.http, &self.base_url, id, self.metrics.as_ref()).await
    }

    /// Create a monitor.
    pub async fn create_monitor(&self, params: &CreateMonitorParams) -> Result<MonitorConfig> {
        endpoints::create_monitor(&self.http, &self.base_url, params, self.metrics.as_ref()).await
    }

    /// Update a monitor.
    pub async fn update_monitor(&self, id: u64, params: &UpdateMonitorParams) -> Result<()> {
        endpoints::update_monitor(
            &self.http,
            &self.base_url,
            id,
            params,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Enable or disable a monitor.
    pub async fn set_monitor_enabled(&self, id: u64, enabled: bool) -> Result<()> {
        self.update_monitor(id, &UpdateMonitorParams::set_enabled(enabled))
            .await
    }

    /// List recent check attempts.
    pub async fn list_attempts(&self) -> Result<Vec<Attempt>> {
        endpoints::list_attempts(&self.http, &self.base_url, self.metrics.as_ref()).await
    }
}
