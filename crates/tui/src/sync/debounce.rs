//! Debounced search for the integration picker.
//!
//! Responsibilities:
//! - Hold back a typed query until the user has been quiet for the debounce
//!   window, then ask the event loop to run it.
//! - Track which fired searches are still outstanding (the loading flag).
//!
//! Does NOT handle:
//! - Running the search itself. The timer task only sends a "due" action
//!   carrying a ticket; the `App` redeems the ticket with [`SearchDebouncer::fire`].
//!
//! Invariants:
//! - At most one quiet-period timer exists; a newer query aborts the older one.
//! - A ticket is redeemable once, and only while it is the newest ticket.
//! - Tickets are unique across debouncers, so a reply to a search fired by
//!   a discarded debouncer is never counted against a newer one.
//! - Searches already fired are never cancelled; whichever response is
//!   applied last wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use sentinel_config::constants::SEARCH_DEBOUNCE_MS;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Observable phase of the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePhase {
    Idle,
    Pending,
    Executing,
}

#[derive(Debug)]
enum State {
    Idle,
    Pending {
        ticket: u64,
        query: String,
        timer: JoinHandle<()>,
    },
    Executing,
}

#[derive(Debug)]
pub struct SearchDebouncer {
    state: State,
    /// Tickets of fired searches whose reply has not been applied.
    in_flight: Vec<u64>,
    delay: Duration,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: State::Idle,
            in_flight: Vec::new(),
            delay,
        }
    }

    /// Records a new query and restarts the quiet period.
    ///
    /// When the period elapses without another call, `make(ticket)` is sent on
    /// `tx`. Must be called from within a Tokio runtime.
    pub fn on_query_change<A, F>(&mut self, query: impl Into<String>, tx: &Sender<A>, make: F)
    where
        A: Send + 'static,
        F: FnOnce(u64) -> A + Send + 'static,
    {
        self.abort_pending();

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        let delay = self.delay;
        let tx = tx.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(make(ticket)).await;
        });

        self.state = State::Pending {
            ticket,
            query: query.into(),
            timer,
        };
    }

    /// Redeems a due ticket.
    ///
    /// Returns the query to search for, or `None` when the ticket was
    /// superseded by a later keystroke.
    pub fn fire(&mut self, ticket: u64) -> Option<String> {
        match &self.state {
            State::Pending { ticket: pending, .. } if *pending == ticket => {}
            _ => {
                tracing::trace!(ticket, "Dropping stale search ticket");
                return None;
            }
        }

        match std::mem::replace(&mut self.state, State::Executing) {
            State::Pending { query, .. } => {
                self.in_flight.push(ticket);
                Some(query)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Marks the search fired for `ticket` as finished, successfully or not.
    ///
    /// Returns `false` when the ticket was not fired by this debouncer or
    /// was already completed; its reply should then be ignored.
    pub fn complete(&mut self, ticket: u64) -> bool {
        let Some(pos) = self.in_flight.iter().position(|t| *t == ticket) else {
            tracing::trace!(ticket, "Ignoring reply to a foreign search");
            return false;
        };
        self.in_flight.swap_remove(pos);
        if self.in_flight.is_empty() && matches!(self.state, State::Executing) {
            self.state = State::Idle;
        }
        true
    }

    /// True while at least one fired search has not completed.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn phase(&self) -> DebouncePhase {
        match self.state {
            State::Idle => DebouncePhase::Idle,
            State::Pending { .. } => DebouncePhase::Pending,
            State::Executing => DebouncePhase::Executing,
        }
    }

    #[cfg(test)]
    fn pending_query(&self) -> Option<&str> {
        match &self.state {
            State::Pending { query, .. } => Some(query),
            _ => None,
        }
    }

    fn abort_pending(&mut self) {
        if let State::Pending { timer, .. } = &self.state {
            timer.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
