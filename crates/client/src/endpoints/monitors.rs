//! Monitor and check-attempt endpoints.

use reqwest::Client;

use super::request::{read_data, read_list, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{Attempt, CreateMonitorParams, MonitorConfig, UpdateMonitorParams};

/// List every monitor with its recent slot history.
pub async fn list_monitors(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<MonitorConfig>> {
    let url = format!("{}/monitors", base_url);
    let response = send_request(client.get(&url), "/monitors", "GET", metrics).await?;
    read_list(response).await
}

/// Fetch one monitor, including its integrations.
pub async fn get_monitor(
    client: &Client,
    base_url: &str,
    id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<MonitorConfig> {
    let url = format!("{}/monitors/{}", base_url, id);
    let response = send_request(client.get(&url), "/monitors/:id", "GET", metrics).await?;
    read_data(response).await
}

/// Create a monitor.
pub async fn create_monitor(
    client: &Client,
    base_url: &str,
    params: &CreateMonitorParams,
    metrics: Option<&MetricsCollector>,
) -> Result<MonitorConfig> {
    let url = format!("{}/monitors", base_url);
    let builder = client.post(&url).json(params);
    let response = send_request(builder, "/monitors", "POST", metrics).await?;
    read_data(response).await
}

/// Update a monitor. Only the fields set in `params` are sent.
pub async fn update_monitor(
    client: &Client,
    base_url: &str,
    id: u64,
    params: &UpdateMonitorParams,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/monitors/{}", base_url, id);
    let builder = client.put(&url).json(params);
    send_request(builder, "/monitors/:id", "PUT", metrics).await?;
    Ok(())
}

/// List recent check attempts across all monitors, newest first.
pub async fn list_attempts(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Attempt>> {
    let url = format!("{}/events", base_url);
    let response = send_request(client.get(&url), "/events", "GET", metrics).await?;
    read_list(response).await
}
