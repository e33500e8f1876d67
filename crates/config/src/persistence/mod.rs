//! Persistence for the dashboard's durable UI preferences.
//!
//! Responsibilities:
//! - Resolve the platform-standard state file location.
//! - Read and write `PersistedState` (sensitive-info visibility, theme).
//! - Back up corrupt state files before they are replaced.
//!
//! Does NOT handle:
//! - Loading connection settings (see `loader`).
//! - Anything fetched from the server; snapshots are never persisted.
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - A corrupt file never blocks startup; defaults are used instead.

use std::path::{Path, PathBuf};

mod manager;
mod path;
mod state;

pub use manager::ConfigManager;
pub use path::default_state_path;
pub use state::PersistedState;

/// Moves a corrupt state file aside as `<name>.corrupt.<unix-secs>`.
///
/// Returns the backup path.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
