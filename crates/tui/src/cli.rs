//! Command-line argument parsing for sentinel-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - `SENTINEL_*` connection variables (handled by `sentinel_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use sentinel_config::constants::{DEFAULT_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS};
use std::path::PathBuf;

/// Command-line arguments for sentinel-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url, --username)
/// 2. Environment variables (e.g., SENTINEL_BASE_URL, SENTINEL_USERNAME)
/// 3. `.env` file in the working directory
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "sentinel-tui",
    about = "Terminal dashboard for the Sentinel uptime engine",
    version,
    after_help = "Examples:\n  sentinel-tui\n  sentinel-tui --base-url https://sentinel.example.com --username admin\n  sentinel-tui --log-dir /var/log/sentinel-tui --no-mouse\n  sentinel-tui --refresh-interval-ms 5000\n"
)]
pub struct Cli {
    /// Base URL of the Sentinel engine
    #[arg(long)]
    pub base_url: Option<String>,

    /// Username to sign in with (prefills the sign-in form)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Path to the preferences state file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub skip_verify: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "localhost:9090")
    ///
    /// When enabled, exposes /metrics endpoint for Prometheus scraping.
    #[arg(long, env = "SENTINEL_METRICS_BIND")]
    pub metrics_bind: Option<String>,

    /// Milliseconds between live-view refreshes
    #[arg(
        long,
        env = "SENTINEL_REFRESH_INTERVAL_MS",
        default_value_t = DEFAULT_REFRESH_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(MIN_REFRESH_INTERVAL_MS..)
    )]
    pub refresh_interval_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sentinel-tui"]);
        assert!(cli.base_url.is_none());
        assert!(!cli.no_mouse);
        assert!(!cli.skip_verify);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_cli_base_url_and_username() {
        let cli = Cli::parse_from([
            "sentinel-tui",
            "--base-url",
            "https://sentinel.example.com",
            "-u",
            "admin",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("https://sentinel.example.com"));
        assert_eq!(cli.username.as_deref(), Some("admin"));
    }

    #[test]
    fn test_cli_no_mouse_flag() {
        let cli = Cli::parse_from(["sentinel-tui", "--no-mouse"]);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_refresh_interval_below_minimum_rejected() {
        let result = Cli::try_parse_from(["sentinel-tui", "--refresh-interval-ms", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_interval_accepted() {
        let cli = Cli::parse_from(["sentinel-tui", "--refresh-interval-ms", "5000"]);
        assert_eq!(cli.refresh_interval_ms, 5000);
    }
}
