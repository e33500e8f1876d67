//! Configuration type definitions for Sentinel TUI.
//!
//! Responsibilities:
//! - Define connection settings and optional sign-in credentials.
//! - Define the persisted and runtime theme representations.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Persisting UI preferences (see `persistence` module).
//! - Network connections or session cookies (see client crate).
//!
//! Invariants:
//! - Passwords are held as `secrecy::SecretString` and never serialized.
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.

mod connection;
mod theme;

pub use connection::{Config, ConnectionConfig, Credentials};
pub use theme::{ColorTheme, Theme};
