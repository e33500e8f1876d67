//! REST endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, the normalized base
//! URL, its own arguments, and an optional metrics collector. Session
//! state travels in the client's cookie store.

mod auth;
mod integrations;
mod keys;
mod monitors;
mod request;
mod requests;
mod users;

pub use auth::{check_session, sign_in, sign_out};
pub use integrations::{create_integration, list_integrations};
pub use keys::{create_api_key, list_api_keys};
pub use monitors::{create_monitor, get_monitor, list_attempts, list_monitors, update_monitor};
pub use request::send_request;
pub use requests::{get_request_metrics, list_request_logs};
pub use users::update_password;
