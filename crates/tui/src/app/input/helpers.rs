//! Input handling helper functions.
//!
//! Does NOT handle:
//! - App state or action dispatch

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

/// `Ctrl+<c>`.
pub fn is_ctrl(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Plain character without Ctrl or Alt.
pub fn plain_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Moves a table selection one row, clamped to `len`.
pub fn move_selection(state: &mut TableState, len: usize, down: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = match state.selected() {
        None => 0,
        Some(i) if down => (i + 1).min(len - 1),
        Some(i) => i.saturating_sub(1),
    };
    state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_clamps() {
        let mut state = TableState::default();
        move_selection(&mut state, 2, true);
        assert_eq!(state.selected(), Some(0));
        move_selection(&mut state, 2, true);
        move_selection(&mut state, 2, true);
        assert_eq!(state.selected(), Some(1));
        move_selection(&mut state, 2, false);
        move_selection(&mut state, 2, false);
        assert_eq!(state.selected(), Some(0));
        move_selection(&mut state, 0, true);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_plain_char_ignores_ctrl() {
        assert_eq!(plain_char(KeyEvent::from(KeyCode::Char('q'))), Some('q'));
        let ctrl = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(plain_char(ctrl), None);
        assert!(is_ctrl(ctrl, 'q'));
    }
}
