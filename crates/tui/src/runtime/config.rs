//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//! - Open the preferences state file.
//! - Save persisted state on application exit.
//!
//! Does NOT handle:
//! - Creating the engine client (see `main.rs`).
//! - Terminal state management (see `runtime::terminal`).
//! - Async engine calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - `load_dotenv()` is called before loading configuration.
//! - ConfigManager is wrapped in Arc<Mutex<>> for thread-safe access.

use crate::app::App;
use anyhow::Result;
use sentinel_config::persistence::default_state_path;
use sentinel_config::{Config, ConfigLoader, ConfigManager};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::cli::Cli;

/// Loaded configuration plus the resolved state file location.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub state_path: PathBuf,
}

/// Build a ConfigLoader with environment and CLI options applied.
pub fn build_loader_with_cli(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().load_dotenv()?.from_env()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(username) = &cli.username {
        loader = loader.with_username(username.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(path) = cli
        .config_path
        .as_ref()
        .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
    {
        loader = loader.with_state_path(path.clone());
    }
    Ok(loader)
}

/// Load configuration for this run.
///
/// # Errors
///
/// Returns an error if `.env` or an environment variable cannot be parsed,
/// if the base URL is invalid, or if no default state path can be found.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let loader = build_loader_with_cli(cli)?;
    let state_path = match loader.state_path() {
        Some(path) => path.clone(),
        None => default_state_path()?,
    };
    let config = loader.build()?;
    Ok(LoadedConfig { config, state_path })
}

/// Open the preferences file at `path`.
pub fn open_config_manager(path: PathBuf) -> Result<Arc<Mutex<ConfigManager>>> {
    Ok(Arc::new(Mutex::new(ConfigManager::new_with_path(path)?)))
}

/// Save persisted state before quitting.
pub async fn save_and_quit(app: &App, config_manager: &Arc<Mutex<ConfigManager>>) -> Result<()> {
    let state = app.persisted_state();
    let mut cm = config_manager.lock().await;
    cm.save(&state)?;
    Ok(())
}
