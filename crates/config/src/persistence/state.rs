//! Persisted UI state.
//!
//! Invariants:
//! - Keys are stable on disk: `showSensitiveInfo` and `theme`.
//! - Missing keys fall back to defaults (`#[serde(default)]`), so older or
//!   hand-edited files still load.

use serde::{Deserialize, Serialize};

use crate::types::ColorTheme;

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
    /// Render sensitive fields (URLs, webhook URLs, API keys) in clear text.
    pub show_sensitive_info: bool,
    /// Selected color theme.
    pub theme: ColorTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hides_sensitive_info() {
        let state = PersistedState::default();
        assert!(!state.show_sensitive_info);
        assert_eq!(state.theme, ColorTheme::Dark);
    }

    #[test]
    fn test_serialized_keys() {
        let state = PersistedState {
            show_sensitive_info: true,
            theme: ColorTheme::Light,
        };
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(value["showSensitiveInfo"], true);
        assert_eq!(value["theme"], "light");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let state: PersistedState = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert!(!state.show_sensitive_info);
        assert_eq!(state.theme, ColorTheme::Light);
    }
}
