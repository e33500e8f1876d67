//! Reading and writing the UI state file.
//!
//! Responsibilities:
//! - Load `PersistedState` once at startup (init-from-storage).
//! - Save the whole state on every preference change (write-through).
//!
//! Does NOT handle:
//! - Deciding when to save; the TUI issues a save after each toggle.
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - Corrupt files are backed up and replaced by defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::create_corrupt_backup;
use super::path::default_state_path;
use super::state::PersistedState;

/// Manages the on-disk UI state file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    state_path: PathBuf,
    state: PersistedState,
}

impl ConfigManager {
    /// Creates a manager for the default platform path.
    pub fn new() -> Result<Self> {
        Self::new_with_path(default_state_path()?)
    }

    /// Creates a manager for a specific state file.
    ///
    /// A missing file yields defaults. A file that exists but cannot be
    /// parsed is moved to `<name>.corrupt.<timestamp>` and defaults are used.
    pub fn new_with_path(state_path: PathBuf) -> Result<Self> {
        let state = match std::fs::read_to_string(&state_path) {
            Ok(content) => match serde_json::from_str::<PersistedState>(&content) {
                Ok(state) => state,
                Err(e) => {
                    match create_corrupt_backup(&state_path) {
                        Ok(backup_path) => tracing::warn!(
                            path = %state_path.display(),
                            backup_path = %backup_path.display(),
                            error = %e,
                            "State file is corrupt, backed up and using defaults"
                        ),
                        Err(backup_err) => tracing::error!(
                            path = %state_path.display(),
                            error = %e,
                            backup_error = %backup_err,
                            "State file is corrupt and backup failed, using defaults"
                        ),
                    }
                    PersistedState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedState::default(),
            Err(e) => {
                tracing::warn!(
                    path = %state_path.display(),
                    error = %e,
                    "State file unreadable, using defaults"
                );
                PersistedState::default()
            }
        };

        Ok(Self { state_path, state })
    }

    /// Returns the path to the state file.
    pub fn state_path(&self) -> &PathBuf {
        &self.state_path
    }

    /// Returns the state read at startup, or the last state saved.
    pub fn load(&self) -> PersistedState {
        self.state
    }

    /// Saves the state to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        self.state = *state;
        self.atomic_save()
    }

    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.state_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary state file")?;

        std::fs::rename(&temp_path, &self.state_path)
            .context("Failed to rename temporary state file")?;

        tracing::debug!(path = %self.state_path.display(), "State saved atomically");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorTheme;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::new_with_path(temp_dir.path().join("state.json")).unwrap();
        assert_eq!(manager.load(), PersistedState::default());
    }

    #[test]
    fn test_save_then_reload() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("state.json");

        let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
        let state = PersistedState {
            show_sensitive_info: true,
            theme: ColorTheme::Light,
        };
        manager.save(&state).unwrap();

        let reloaded = ConfigManager::new_with_path(path.clone()).unwrap();
        assert_eq!(reloaded.load(), state);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_save_updates_in_memory_state() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut manager = ConfigManager::new_with_path(temp_dir.path().join("state.json")).unwrap();

        let mut state = manager.load();
        state.show_sensitive_info = true;
        manager.save(&state).unwrap();

        assert!(manager.load().show_sensitive_info);
    }
}
