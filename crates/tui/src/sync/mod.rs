//! Live-view synchronization primitives.
//!
//! Responsibilities:
//! - Keep rendered lists consistent with server state by periodic polling
//!   (`poller`, `live`).
//! - Coalesce keystroke-driven searches into one delayed fetch (`debounce`).
//! - Track a multi-select set independent of the visible candidates
//!   (`selection`).
//! - Compute pagination windows (`pagination`).
//! - Mask sensitive fields for display (`sensitive`).
//!
//! Does NOT handle:
//! - Issuing HTTP requests (fetchers are supplied by the runtime).
//! - Rendering (see `ui`).
//!
//! Invariants:
//! - Everything here is owned by the `App` or by a task it can cancel; no
//!   global mutable state.

pub mod debounce;
pub mod live;
pub mod pagination;
pub mod poller;
pub mod selection;
pub mod sensitive;

pub use debounce::{DebouncePhase, SearchDebouncer};
pub use live::LiveState;
pub use pagination::{PageWindow, page_window};
pub use poller::{FetchKind, PollConfig, PollEvent, PollHandle, PollId, run_poller, spawn_poller};
pub use selection::{SelectableOption, Selection};
pub use sensitive::{SENSITIVE_MASK, redact};
