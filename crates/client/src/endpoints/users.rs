//! User profile endpoints.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use super::request::{read_message, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Change the signed-in user's password.
pub async fn update_password(
    client: &Client,
    base_url: &str,
    password: &SecretString,
    metrics: Option<&MetricsCollector>,
) -> Result<Option<String>> {
    let url = format!("{}/users", base_url);
    let builder = client
        .patch(&url)
        .json(&json!({ "password": password.expose_secret() }));
    let response = send_request(builder, "/users", "PATCH", metrics).await?;
    read_message(response).await
}
