//! Connection configuration types for Sentinel TUI.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, optional timeout).
//! - Define sign-in credentials used to prefill or skip the sign-in screen.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never ends with a trailing slash.
//! - `timeout == None` means the client enforces no request timeout.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_BASE_URL;

/// Connection configuration for a Sentinel server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Sentinel engine (e.g., http://localhost:8080)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Optional per-request timeout. Unset means requests may wait indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Sign-in credentials supplied through the environment or CLI.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl Credentials {
    /// Both halves are present, so the TUI can sign in without prompting.
    pub fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub credentials: Credentials,
}

impl Config {
    /// Create a config for the given server with no credentials.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            credentials: Credentials::default(),
        }
    }
}
