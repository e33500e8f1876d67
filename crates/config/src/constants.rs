//! Centralized constants for the Sentinel TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Sentinel server URL (the engine's default listen address).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Live View Synchronization
// =============================================================================

/// Interval between background refreshes of a polled list, in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 3000;

/// Lower bound accepted for a user-provided refresh interval.
pub const MIN_REFRESH_INTERVAL_MS: u64 = 500;

/// How long the "refreshing" indicator stays visible after a background
/// fetch resolves, in milliseconds.
pub const MIN_REFRESH_VISIBLE_MS: u64 = 500;

/// Quiet period before a typed search query is sent, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Page size used by the request log view.
pub const DEFAULT_REQUESTS_PER_PAGE: u32 = 10;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations and toast expiry in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Number of characters in the placeholder shown for hidden sensitive values.
pub const SENSITIVE_MASK_LEN: usize = 28;

/// Number of history slots drawn in a monitor's health strip.
pub const MONITOR_SLOT_COUNT: usize = 25;

/// User agents longer than this are truncated in the request log table.
pub const USER_AGENT_DISPLAY_LEN: usize = 28;

/// Default toast time-to-live in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 5;

// =============================================================================
// Form Limits
// =============================================================================

/// Monitor name length bounds (characters).
pub const MONITOR_NAME_MIN_LEN: usize = 3;
pub const MONITOR_NAME_MAX_LEN: usize = 100;

/// Monitor check interval bounds (seconds).
pub const MONITOR_INTERVAL_MIN_SECS: u32 = 5;
pub const MONITOR_INTERVAL_MAX_SECS: u32 = 3600;

/// Monitor request timeout bounds (seconds).
pub const MONITOR_TIMEOUT_MIN_SECS: u32 = 1;
pub const MONITOR_TIMEOUT_MAX_SECS: u32 = 300;

/// Consecutive failures before a monitor alerts.
pub const MONITOR_THRESHOLD_MIN: u32 = 1;
pub const MONITOR_THRESHOLD_MAX: u32 = 10;

/// Minimum password length accepted by the profile screen.
pub const MIN_PASSWORD_LEN: usize = 8;
