//! Request log and traffic metrics endpoints.

use reqwest::Client;

use super::request::{read_data, read_envelope, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{RequestLog, RequestLogPage, RequestMetrics};

/// Fetch one page of captured request logs.
///
/// A missing `pagination` block is treated as a single empty page.
pub async fn list_request_logs(
    client: &Client,
    base_url: &str,
    page: u32,
    per_page: u32,
    metrics: Option<&MetricsCollector>,
) -> Result<RequestLogPage> {
    let url = format!("{}/requests", base_url);
    let builder = client.get(&url).query(&[
        ("page", page.to_string()),
        ("per_page", per_page.to_string()),
    ]);
    let response = send_request(builder, "/requests", "GET", metrics).await?;
    let envelope = read_envelope::<Vec<RequestLog>>(response).await?;

    Ok(RequestLogPage {
        logs: envelope.data.unwrap_or_default(),
        pagination: envelope.pagination.unwrap_or_default(),
    })
}

/// Fetch aggregate traffic metrics.
pub async fn get_request_metrics(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<RequestMetrics> {
    let url = format!("{}/requests/metrics", base_url);
    let response = send_request(client.get(&url), "/requests/metrics", "GET", metrics).await?;
    read_data(response).await
}
