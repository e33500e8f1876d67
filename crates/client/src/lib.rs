//! Sentinel engine REST client.
//!
//! A typed client for the Sentinel uptime engine: monitors, check
//! attempts, alert integrations, captured request logs, API keys and the
//! signed-in user's profile. Authentication is a session cookie kept in
//! the underlying HTTP client.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod serde_helpers;

pub use client::SentinelClient;
pub use client::builder::SentinelClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    ApiKeyConfig, ApiResponse, Attempt, CreateApiKeyParams, CreateIntegrationParams,
    CreateMonitorParams, DailyTraffic, GroupedRequest, HttpMethod, IntegrationConfig,
    IntegrationType, MessageResponse, MonitorConfig, Pagination, RequestLog, RequestLogPage,
    RequestMetrics, Slot, UpdateMonitorParams,
};
