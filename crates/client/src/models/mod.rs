//! Data models for Sentinel engine API requests and responses.
//!
//! Submodules:
//! - `common`: response envelope, pagination, message-only replies.
//! - `monitors`: monitor configs, history slots, check attempts.
//! - `integrations`: Slack/Discord alert destinations.
//! - `requests`: captured request logs and traffic metrics.
//! - `keys`: API keys.

mod common;
mod integrations;
mod keys;
mod monitors;
mod requests;

pub(crate) use common::ErrorBody;
pub use common::{ApiResponse, MessageResponse, Pagination};
pub use integrations::{CreateIntegrationParams, IntegrationConfig, IntegrationType};
pub use keys::{ApiKeyConfig, CreateApiKeyParams};
pub use monitors::{
    Attempt, CreateMonitorParams, HttpMethod, MonitorConfig, Slot, UpdateMonitorParams,
};
pub use requests::{DailyTraffic, GroupedRequest, RequestLog, RequestLogPage, RequestMetrics};
