//! Client builder for constructing [`SentinelClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (cookie store, timeout, TLS)
//!
//! # What this module does NOT handle:
//! - Actual API calls (see the resource submodules)
//!
//! # Invariants
//! - `base_url` is required
//! - The HTTP client always has a cookie store; the session depends on it
//! - No timeout is applied unless one is configured

use std::time::Duration;

use crate::client::SentinelClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use sentinel_config::Config;

const MAX_REDIRECTS: usize = 5;

/// Builder for creating a new [`SentinelClient`].
#[derive(Debug, Default)]
pub struct SentinelClientBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Option<Duration>,
    metrics: Option<MetricsCollector>,
}

impl SentinelClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine base URL, e.g. `http://localhost:8080`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// Only affects HTTPS URLs.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Record request metrics through this collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SentinelClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided
    /// or is empty, and `ClientError::HttpError` if the HTTP client fails
    /// to build.
    pub fn build(self) -> Result<SentinelClient> {
        let base_url = self
            .base_url
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SentinelClient {
            http,
            base_url,
            metrics: self.metrics,
        })
    }
}
