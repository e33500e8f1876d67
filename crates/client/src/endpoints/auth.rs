//! Authentication endpoints.
//!
//! The engine issues an `auth_token` cookie on sign-in. The shared
//! `reqwest::Client` keeps it in its cookie store and replays it on every
//! later request, so these functions never handle the token directly.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use super::request::{read_message, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Sign in with username and password.
pub async fn sign_in(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &SecretString,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    debug!("Signing in to Sentinel as {}", username);

    let url = format!("{}/auth", base_url);
    let builder = client.post(&url).json(&json!({
        "username": username,
        "password": password.expose_secret(),
    }));
    send_request(builder, "/auth", "POST", metrics).await?;
    Ok(())
}

/// Verify that the current session cookie is still accepted.
///
/// Returns `ClientError::Unauthorized` when it is not.
pub async fn check_session(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/auth/me", base_url);
    send_request(client.get(&url), "/auth/me", "GET", metrics).await?;
    Ok(())
}

/// End the session. The engine expires the cookie.
pub async fn sign_out(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Option<String>> {
    let url = format!("{}/auth/sign-out", base_url);
    let builder = client.post(&url).json(&json!({}));
    let response = send_request(builder, "/auth/sign-out", "POST", metrics).await?;
    read_message(response).await
}
