//! Application state types and enums.
//!
//! Responsibilities:
//! - Define the screen enum (`Screen`) and its navigation order.
//! - Define the polled views (`LiveView`) and which screen owns each.
//! - Define layout constants shared with the toast renderer.
//!
//! Does NOT handle:
//! - State mutations (see `App::update`).

/// Layout constants for UI chrome.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Current active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    SignIn,
    Monitors,
    MonitorForm,
    Events,
    Integrations,
    IntegrationForm,
    Requests,
    Tokens,
    TokenForm,
    Profile,
}

impl Screen {
    /// Screens reachable from the tab bar, in order.
    pub const TABS: [Screen; 6] = [
        Screen::Monitors,
        Screen::Events,
        Screen::Integrations,
        Screen::Requests,
        Screen::Tokens,
        Screen::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::SignIn => "Sign In",
            Screen::Monitors => "Monitors",
            Screen::MonitorForm => "Monitor",
            Screen::Events => "Events",
            Screen::Integrations => "Integrations",
            Screen::IntegrationForm => "New Integration",
            Screen::Requests => "Requests",
            Screen::Tokens => "Tokens",
            Screen::TokenForm => "New Token",
            Screen::Profile => "Profile",
        }
    }

    /// The tab a screen belongs to. Forms belong to their list's tab; the
    /// sign-in screen has none.
    pub fn tab(self) -> Option<Screen> {
        match self {
            Screen::SignIn => None,
            Screen::MonitorForm => Some(Screen::Monitors),
            Screen::IntegrationForm => Some(Screen::Integrations),
            Screen::TokenForm => Some(Screen::Tokens),
            other => Some(other),
        }
    }

    fn tab_index(self) -> Option<usize> {
        let tab = self.tab()?;
        Self::TABS.iter().position(|t| *t == tab)
    }

    /// Next tab, wrapping. The sign-in screen stays put.
    pub fn next(self) -> Self {
        match self.tab_index() {
            Some(i) => Self::TABS[(i + 1) % Self::TABS.len()],
            None => self,
        }
    }

    /// Previous tab, wrapping. The sign-in screen stays put.
    pub fn previous(self) -> Self {
        match self.tab_index() {
            Some(i) => Self::TABS[(i + Self::TABS.len() - 1) % Self::TABS.len()],
            None => self,
        }
    }

    /// Tab bar labels, prefixed with their number key.
    pub fn tab_labels() -> Vec<String> {
        Self::TABS
            .iter()
            .enumerate()
            .map(|(i, screen)| format!("{} {}", i + 1, screen.title()))
            .collect()
    }

    /// Tab for a number key, `'1'` being the first tab.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::TABS.get(i).copied())
    }

    /// The view polled while this screen is shown. Requests always open on
    /// the first page.
    pub fn live_view(self) -> Option<LiveView> {
        match self {
            Screen::Monitors => Some(LiveView::Monitors),
            Screen::Events => Some(LiveView::Events),
            Screen::Requests => Some(LiveView::Requests { page: 1 }),
            _ => None,
        }
    }

    /// Forms take over the keyboard; global single-key shortcuts are off.
    pub fn is_form(self) -> bool {
        matches!(
            self,
            Screen::SignIn
                | Screen::MonitorForm
                | Screen::IntegrationForm
                | Screen::TokenForm
                | Screen::Profile
        )
    }
}

/// A view kept fresh by a poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveView {
    Monitors,
    Events,
    Requests { page: u32 },
}

impl LiveView {
    pub fn screen(self) -> Screen {
        match self {
            LiveView::Monitors => Screen::Monitors,
            LiveView::Events => Screen::Events,
            LiveView::Requests { .. } => Screen::Requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Screen::Monitors.next(), Screen::Events);
        assert_eq!(Screen::Profile.next(), Screen::Monitors);
        assert_eq!(Screen::Monitors.previous(), Screen::Profile);
        for tab in Screen::TABS {
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn test_forms_cycle_from_their_tab() {
        assert_eq!(Screen::MonitorForm.next(), Screen::Events);
        assert_eq!(Screen::TokenForm.previous(), Screen::Requests);
    }

    #[test]
    fn test_sign_in_does_not_cycle() {
        assert_eq!(Screen::SignIn.next(), Screen::SignIn);
        assert_eq!(Screen::SignIn.previous(), Screen::SignIn);
    }

    #[test]
    fn test_digits() {
        assert_eq!(Screen::from_digit('1'), Some(Screen::Monitors));
        assert_eq!(Screen::from_digit('6'), Some(Screen::Profile));
        assert_eq!(Screen::from_digit('0'), None);
        assert_eq!(Screen::from_digit('7'), None);
    }

    #[test]
    fn test_live_views() {
        assert_eq!(Screen::Requests.live_view(), Some(LiveView::Requests { page: 1 }));
        assert_eq!(Screen::Tokens.live_view(), None);
        assert_eq!(LiveView::Requests { page: 4 }.screen(), Screen::Requests);
    }
}
