//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SENTINEL_*` environment variables.
//! - Apply environment variable values to a `ConfigLoader` instance.
//!
//! Does NOT handle:
//! - Building the final `Config` (see builder.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Call before applying CLI overrides so flags win over the environment.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("SENTINEL_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("SENTINEL_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("SENTINEL_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = env_var_or_none("SENTINEL_SKIP_VERIFY") {
        let skip = skip.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SENTINEL_SKIP_VERIFY".to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.set_skip_verify(Some(skip));
    }
    if let Some(timeout) = env_var_or_none("SENTINEL_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SENTINEL_TIMEOUT".to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(path) = env_var_or_none("SENTINEL_CONFIG_PATH") {
        loader.set_state_path(Some(PathBuf::from(path)));
    }
    Ok(())
}
