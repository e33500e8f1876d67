//! Path helpers for the UI state file.
//!
//! Uses the `directories` crate for platform-appropriate locations.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the state file.
///
/// - Linux/macOS: `~/.config/sentinel-tui/state.json`
/// - Windows: `%AppData%\sentinel-tui\state.json`
pub fn default_state_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "sentinel-tui")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("state.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_path_uses_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "sentinel-tui")
            .unwrap()
            .config_dir()
            .join("state.json");

        assert_eq!(default_state_path().unwrap(), expected);
    }
}
