//! Snapshot state for one polled view.

use std::fmt::Display;

use super::poller::{FetchKind, PollEvent};

/// Last successful snapshot plus the view's loading flags.
///
/// `loading` is only ever set by the initial fetch; background fetches set
/// `refreshing` instead so the list stays on screen.
#[derive(Debug, Clone, Default)]
pub struct LiveState<T> {
    data: T,
    loaded: bool,
    loading: bool,
    refreshing: bool,
}

impl<T: Default> LiveState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a poller event.
    ///
    /// A failed fetch keeps the previous snapshot and is logged at debug.
    pub fn apply<E: Display>(&mut self, event: PollEvent<T, E>) {
        match event {
            PollEvent::Started(FetchKind::Initial) => self.loading = true,
            PollEvent::Started(FetchKind::Background) => self.refreshing = true,
            PollEvent::Fetched(_, Ok(data)) => {
                self.data = data;
                self.loaded = true;
            }
            PollEvent::Fetched(kind, Err(e)) => {
                tracing::debug!(?kind, error = %e, "Poll fetch failed, keeping previous snapshot");
            }
            PollEvent::Settled(FetchKind::Initial) => self.loading = false,
            PollEvent::Settled(FetchKind::Background) => self.refreshing = false,
        }
    }

    /// Clears both flags. Called when the view's poller is stopped so an
    /// interrupted cycle cannot leave a spinner behind.
    pub fn reset_flags(&mut self) {
        self.loading = false;
        self.refreshing = false;
    }

    /// Forgets the snapshot, e.g. after signing out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Local edits to the snapshot, e.g. an optimistic flag flip. The next
    /// successful fetch overwrites them.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }
}
