//! Alert integration endpoints.

use reqwest::Client;

use super::request::{read_data, read_list, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{CreateIntegrationParams, IntegrationConfig};

/// List integrations, optionally filtered by name.
///
/// The `search` parameter is omitted entirely when the term is empty.
pub async fn list_integrations(
    client: &Client,
    base_url: &str,
    search: Option<&str>,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<IntegrationConfig>> {
    let url = format!("{}/integrations", base_url);
    let mut builder = client.get(&url);
    if let Some(term) = search.filter(|s| !s.is_empty()) {
        builder = builder.query(&[("search", term)]);
    }
    let response = send_request(builder, "/integrations", "GET", metrics).await?;
    read_list(response).await
}

/// Create an integration.
pub async fn create_integration(
    client: &Client,
    base_url: &str,
    params: &CreateIntegrationParams,
    metrics: Option<&MetricsCollector>,
) -> Result<IntegrationConfig> {
    let url = format!("{}/integrations", base_url);
    let builder = client.post(&url).json(params);
    let response = send_request(builder, "/integrations", "POST", metrics).await?;
    read_data(response).await
}
