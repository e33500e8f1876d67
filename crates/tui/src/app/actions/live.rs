//! Live-view action handlers: poller acceptance and poll events.

use ratatui::widgets::TableState;

use crate::action::Action;
use crate::app::state::{LiveView, Screen};
use crate::app::{ActivePoll, App};
use crate::sync::{PollEvent, PollHandle, PollId};

impl App {
    pub fn handle_live_action(&mut self, action: Action) {
        match action {
            Action::PollStarted(view, handle) => self.accept_poller(view, handle),
            Action::MonitorsPoll(id, event) => {
                if self.accepts(id) && !self.session_lost(&event) {
                    self.monitors.apply(event);
                    clamp_selection(&mut self.monitors_state, self.monitors.data().len());
                }
            }
            Action::EventsPoll(id, event) => {
                if self.accepts(id) && !self.session_lost(&event) {
                    self.events.apply(event);
                    clamp_selection(&mut self.events_state, self.events.data().len());
                }
            }
            Action::RequestsPoll(id, event) => {
                if self.accepts(id) && !self.session_lost(&event) {
                    self.requests.apply(event);
                    clamp_selection(&mut self.requests_state, self.requests.data().page.logs.len());
                }
            }
            Action::ChangeRequestsPage(page) => {
                if self.current_screen == Screen::Requests && page >= 1 {
                    self.stop_polling();
                    self.requests_page = page;
                    self.requests_state.select(None);
                }
            }
            _ => {}
        }
    }

    /// Keeps `handle` only when it polls what is on screen right now and
    /// nothing else is polling. Anything else is stopped straight away.
    fn accept_poller(&mut self, view: LiveView, handle: PollHandle) {
        let wanted = match self.current_screen {
            Screen::Requests => Some(LiveView::Requests {
                page: self.requests_page,
            }),
            screen => screen.live_view(),
        };

        if wanted == Some(view) && self.poll.is_none() {
            tracing::debug!(poll_id = handle.id().get(), ?view, "Poller accepted");
            self.poll = Some(ActivePoll { view, handle });
        } else {
            tracing::debug!(poll_id = handle.id().get(), ?view, "Discarding stale poller");
            handle.stop();
        }
    }

    fn accepts(&self, id: PollId) -> bool {
        let accepted = self.active_poll() == Some(id);
        if !accepted {
            tracing::trace!(poll_id = id.get(), "Dropping event from inactive poller");
        }
        accepted
    }

    fn session_lost<T>(
        &mut self,
        event: &PollEvent<T, std::sync::Arc<sentinel_client::ClientError>>,
    ) -> bool {
        match event {
            PollEvent::Fetched(_, Err(e)) => self.expire_session_on(e),
            _ => false,
        }
    }
}

/// Keeps a table selection inside `len` rows, selecting the first row of a
/// non-empty table.
pub(crate) fn clamp_selection(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        None => state.select(Some(0)),
        Some(i) if i >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}
