//! The Sentinel engine client and its API methods.
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - `auth`: sign-in, session check, sign-out
//! - `monitors`: monitors and check attempts
//! - `integrations`, `keys`, `requests`, `users`: remaining resources
//!
//! # What this module does NOT handle:
//! - Building and sending requests (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Methods take `&self`; the session lives in the HTTP client's cookie
//!   store, so one client can be shared across tasks behind an `Arc`.

pub mod builder;

mod auth;
mod integrations;
mod keys;
mod monitors;
mod requests;
mod users;

use crate::metrics::MetricsCollector;

/// Sentinel engine REST client.
///
/// ```rust,ignore
/// use sentinel_client::SentinelClient;
///
/// let client = SentinelClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .build()?;
/// client.sign_in("admin", &password).await?;
/// let monitors = client.list_monitors().await?;
/// ```
#[derive(Debug, Clone)]
pub struct SentinelClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl SentinelClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SentinelClientBuilder {
        builder::SentinelClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_builder_requires_base_url() {
        let result = SentinelClient::builder().build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = SentinelClient::builder()
            .base_url("http://localhost:8080//".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
