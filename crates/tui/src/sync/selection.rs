//! Multi-select state keyed by option value.
//!
//! The chosen set is independent of whatever candidate list is currently
//! displayed: a search that drops a selected option does not unselect it,
//! and when the option shows up again it renders as checked.

use sentinel_client::IntegrationConfig;

/// One choice in a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableOption {
    pub label: String,
    /// Identity. Two options with the same value are the same option.
    pub value: String,
    /// Short tag shown before the label.
    pub badge: Option<String>,
}

impl SelectableOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

impl From<&IntegrationConfig> for SelectableOption {
    fn from(integration: &IntegrationConfig) -> Self {
        Self::new(integration.name.clone(), integration.id.clone())
            .with_badge(integration.kind.label())
    }
}

/// The chosen options, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<SelectableOption>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the selection, dropping repeated values.
    pub fn from_options(options: impl IntoIterator<Item = SelectableOption>) -> Self {
        let mut selection = Self::new();
        for option in options {
            if !selection.is_selected(&option.value) {
                selection.selected.push(option);
            }
        }
        selection
    }

    /// Adds the option if its value is absent, removes it otherwise.
    /// Returns whether the option is selected afterwards.
    pub fn toggle(&mut self, option: &SelectableOption) -> bool {
        if let Some(pos) = self.selected.iter().position(|o| o.value == option.value) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(option.clone());
            true
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|o| o.value == value)
    }

    pub fn selected(&self) -> &[SelectableOption] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected values parsed as numeric ids; non-numeric values are skipped.
    pub fn numeric_ids(&self) -> Vec<u64> {
        self.selected
            .iter()
            .filter_map(|o| o.value.parse().ok())
            .collect()
    }
}
