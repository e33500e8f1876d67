//! Regression tests for corrupt state file handling.
//!
//! A damaged `state.json` must never block startup: it is moved aside and
//! the dashboard starts with default preferences.

use sentinel_config::{ColorTheme, ConfigManager, PersistedState};
use std::io::Write;

fn write_file(path: &std::path::Path, contents: &[u8]) {
    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(contents).unwrap();
}

#[test]
fn test_corrupt_state_is_backed_up() {
    let temp_dir = tempfile::tempdir().unwrap();
    let state_path = temp_dir.path().join("state.json");
    write_file(&state_path, b"{ invalid json }");

    let manager = ConfigManager::new_with_path(state_path.clone()).unwrap();
    assert_eq!(manager.load(), PersistedState::default());

    let backups: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("state.corrupt."))
        .collect();
    assert_eq!(backups.len(), 1, "Expected exactly one backup file");
    assert_eq!(
        std::fs::read_to_string(backups[0].path()).unwrap(),
        "{ invalid json }"
    );
    assert!(!state_path.exists());
}

#[test]
fn test_wrong_type_counts_as_corrupt() {
    let temp_dir = tempfile::tempdir().unwrap();
    let state_path = temp_dir.path().join("state.json");
    write_file(&state_path, br#"{"showSensitiveInfo": "yes please"}"#);

    let manager = ConfigManager::new_with_path(state_path).unwrap();
    assert!(!manager.load().show_sensitive_info);
}

#[test]
fn test_save_after_corruption_recovers() {
    let temp_dir = tempfile::tempdir().unwrap();
    let state_path = temp_dir.path().join("state.json");
    write_file(&state_path, b"not json at all");

    let mut manager = ConfigManager::new_with_path(state_path.clone()).unwrap();
    manager
        .save(&PersistedState {
            show_sensitive_info: true,
            theme: ColorTheme::Light,
        })
        .unwrap();

    let reloaded = ConfigManager::new_with_path(state_path).unwrap().load();
    assert!(reloaded.show_sensitive_info);
    assert_eq!(reloaded.theme, ColorTheme::Light);
}
