//! Labelled single-line text field built on `tui-input`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sentinel_config::Theme;
use tui_input::{Input, InputRequest};

use crate::ui::theme::ThemeExt;

/// A form field: label, value and optional masking for secrets.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    label: &'static str,
    input: Input,
    placeholder: Option<&'static str>,
    masked: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// A field whose value renders as `*`.
    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.input = Input::new(value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Applies an editing key. Returns true when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let request = if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
                KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
                KeyCode::Delete => Some(InputRequest::DeleteNextChar),
                KeyCode::Left => Some(InputRequest::GoToPrevChar),
                KeyCode::Right => Some(InputRequest::GoToNextChar),
                KeyCode::Home => Some(InputRequest::GoToStart),
                KeyCode::End => Some(InputRequest::GoToEnd),
                _ => None,
            }
        };

        let Some(request) = request else {
            return false;
        };
        self.input.handle(request).is_some_and(|change| change.value)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// What the field shows: the value, or asterisks for masked fields.
    pub fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.input.value().chars().count())
        } else {
            self.input.value().to_string()
        }
    }
}

/// Draws a field in a bordered box. The focused field gets the terminal
/// cursor; a validation error replaces the title suffix.
pub fn render_text_field(
    f: &mut Frame,
    area: Rect,
    field: &TextField,
    focused: bool,
    error: Option<&str>,
    theme: &Theme,
) {
    let border_style = if error.is_some() {
        theme.error()
    } else if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let mut title = vec![Span::raw(format!(" {} ", field.label))];
    if let Some(error) = error {
        title.push(Span::styled(format!("{error} "), theme.error()));
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = field.input.visual_scroll(inner_width);

    let content = if field.is_empty() && !focused {
        Line::styled(field.placeholder.unwrap_or_default(), theme.text_dim())
    } else {
        let shown: String = field.display_value().chars().skip(scroll).collect();
        Line::styled(shown, theme.text())
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title)),
    );
    f.render_widget(paragraph, area);

    if focused {
        let cursor = field.input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position(Position::new(
            area.x + 1 + cursor.min(area.width.saturating_sub(3)),
            area.y + 1,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_reports_changes() {
        let mut field = TextField::new("Name");
        assert!(field.handle_key(key(KeyCode::Char('o'))));
        assert!(field.handle_key(key(KeyCode::Char('k'))));
        assert!(!field.handle_key(key(KeyCode::Left)));
        assert!(!field.handle_key(key(KeyCode::Tab)));
        assert_eq!(field.value(), "ok");
    }

    #[test]
    fn test_backspace_at_start_is_not_a_change() {
        let mut field = TextField::new("Name").with_value("a");
        field.handle_key(key(KeyCode::Home));
        assert!(!field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut field = TextField::new("Name").with_value("hello");
        assert!(field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(field.is_empty());
    }

    #[test]
    fn test_masked_display() {
        let field = TextField::masked("Password").with_value("s3cret");
        assert_eq!(field.display_value(), "******");
        assert_eq!(field.value(), "s3cret");
    }

    #[test]
    fn test_render_masked_field_hides_value() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let field = TextField::masked("Password").with_value("hunter22");

        terminal
            .draw(|f| render_text_field(f, f.area(), &field, true, None, &Theme::default()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Password"));
        assert!(content.contains("********"));
        assert!(!content.contains("hunter22"));
    }
}
