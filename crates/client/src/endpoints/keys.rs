//! API key endpoints.

use reqwest::Client;

use super::request::{read_list, read_message, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ApiKeyConfig, CreateApiKeyParams};

/// List API keys.
pub async fn list_api_keys(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<ApiKeyConfig>> {
    let url = format!("{}/keys", base_url);
    let response = send_request(client.get(&url), "/keys", "GET", metrics).await?;
    read_list(response).await
}

/// Create an API key.
///
/// The engine answers with a confirmation message only; the new key shows
/// up on the next listing.
pub async fn create_api_key(
    client: &Client,
    base_url: &str,
    params: &CreateApiKeyParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Option<String>> {
    let url = format!("{}/keys", base_url);
    let builder = client.post(&url).json(params);
    let response = send_request(builder, "/keys", "POST", metrics).await?;
    read_message(response).await
}
