//! Recurring fetch loop behind every live view.
//!
//! Responsibilities:
//! - Run an initial fetch immediately, then background fetches on a fixed
//!   interval measured from the end of the previous fetch.
//! - Report progress to the event loop as [`PollEvent`]s tagged with the
//!   poller's [`PollId`].
//! - Hold the background "refreshing" phase open for a minimum visible
//!   duration after each background fetch resolves.
//!
//! Does NOT handle:
//! - Applying results to state (see [`super::live::LiveState`]).
//! - Deciding which view is active; the `App` owns the handle and discards
//!   events from pollers it no longer tracks.
//!
//! Invariants:
//! - Fetches never overlap: the next interval starts after the previous
//!   fetch resolves.
//! - Every `Started` is followed by `Fetched` and `Settled` unless the poller
//!   is stopped first.
//! - After `stop()` the task sends nothing further.
//! - A handle exists before its task does, so the owner can register the
//!   id ahead of the first event (see [`run_poller`]).

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use sentinel_config::constants::{DEFAULT_REFRESH_INTERVAL_MS, MIN_REFRESH_VISIBLE_MS};
use tokio::sync::mpsc::Sender;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

static NEXT_POLL_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one poller for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollId(u64);

impl PollId {
    fn next() -> Self {
        Self(NEXT_POLL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Whether a fetch is the first one for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Background,
}

/// Progress of one fetch cycle.
#[derive(Debug, Clone)]
pub enum PollEvent<T, E> {
    Started(FetchKind),
    Fetched(FetchKind, Result<T, E>),
    /// The loading or refreshing indicator may be cleared.
    Settled(FetchKind),
}

/// Timing for a poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub min_refresh_visible: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            min_refresh_visible: Duration::from_millis(MIN_REFRESH_VISIBLE_MS),
        }
    }
}

impl PollConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

/// Handle to a running poller.
///
/// Clones share the same cancellation token, so the handle can travel
/// through an action and still stop the task it came from.
#[derive(Debug, Clone)]
pub struct PollHandle {
    id: PollId,
    token: CancellationToken,
}

impl PollHandle {
    /// A fresh id and token with no task behind them yet.
    pub fn new() -> Self {
        Self {
            id: PollId::next(),
            token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> PollId {
        self.id
    }

    /// Cancels the poller. Safe to call any number of times.
    pub fn stop(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(poll_id = self.id.0, "Stopping poller");
            self.token.cancel();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns a poller on `tracker` under a new handle.
///
/// `fetch` is called once per cycle; `wrap` turns each event into the
/// channel's message type.
pub fn spawn_poller<T, E, F, Fut, A, W>(
    tracker: &TaskTracker,
    config: PollConfig,
    fetch: F,
    tx: Sender<A>,
    wrap: W,
) -> PollHandle
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    A: Send + 'static,
    W: Fn(PollId, PollEvent<T, E>) -> A + Send + 'static,
{
    let handle = PollHandle::new();
    run_poller(tracker, &handle, config, fetch, tx, wrap);
    handle
}

/// Spawns the task behind an existing `handle`.
///
/// Anything sent on `tx` before this call is received ahead of the
/// poller's first event. A handle stopped before this call yields a task
/// that exits without sending.
pub fn run_poller<T, E, F, Fut, A, W>(
    tracker: &TaskTracker,
    handle: &PollHandle,
    config: PollConfig,
    mut fetch: F,
    tx: Sender<A>,
    wrap: W,
)
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    A: Send + 'static,
    W: Fn(PollId, PollEvent<T, E>) -> A + Send + 'static,
{
    let id = handle.id;
    let cancel = handle.token.clone();

    tracker.spawn(async move {
        let mut kind = FetchKind::Initial;
        loop {
            if cancel.is_cancelled() {
                break;
            }
            if tx.send(wrap(id, PollEvent::Started(kind))).await.is_err() {
                break;
            }

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                result = fetch() => result,
            };
            let next_tick = Instant::now() + config.interval;

            if tx.send(wrap(id, PollEvent::Fetched(kind, result))).await.is_err() {
                break;
            }

            if kind == FetchKind::Background {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(config.min_refresh_visible) => {}
                }
            }

            if tx.send(wrap(id, PollEvent::Settled(kind))).await.is_err() {
                break;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep_until(next_tick) => {}
            }
            kind = FetchKind::Background;
        }
        tracing::debug!(poll_id = id.0, "Poller exited");
    });
}
