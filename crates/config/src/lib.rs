//! Configuration management for Sentinel TUI.
//!
//! This crate provides the connection settings for a Sentinel server (loaded
//! from CLI overrides, environment variables and `.env` files) and the small
//! amount of durable UI state the dashboard keeps between runs.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigManager, PersistedState};
pub use types::{ColorTheme, Config, ConnectionConfig, Credentials, Theme};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
