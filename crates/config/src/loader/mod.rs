//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load connection settings from `.env` files, environment variables and
//!   explicit overrides (CLI flags).
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate so tests can skip `.env` loading.
//!
//! Does NOT handle:
//! - Persisting UI preferences (see `persistence`).
//! - Signing in to the server (see client crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
