//! Request log methods for [`SentinelClient`].

use crate::client::SentinelClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{RequestLogPage, RequestMetrics};

impl SentinelClient {
    /// Fetch one page of request logs. Pages are 1-based.
    pub async fn list_request_logs(&self, page: u32, per_page: u32) -> Result<RequestLogPage> {
        endpoints::list_request_logs(
            &self.http,
            &self.base_url,
            page.max(1),
            per_page,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Fetch aggregate traffic metrics.
    pub async fn get_request_metrics(&self) -> Result<RequestMetrics> {
        endpoints::get_request_metrics(&self.http, &self.base_url, self.metrics.as_ref()).await
    }
}
