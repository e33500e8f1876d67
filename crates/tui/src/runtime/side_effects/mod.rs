//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run the engine calls that actions ask for.
//! - Start live-view pollers and hand their handles to the app.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//! - Deciding whether a poller is still wanted (the app rejects stale ones).
//!
//! Invariants:
//! - All engine calls run on tasks spawned through the shared `TaskTracker`,
//!   so shutdown can wait for them.
//! - Every call that can fail reports back with an `Arc<ClientError>`.
//! - Navigation verifies the session before any data loads.

mod types;

mod dispatcher;

mod auth;
mod integrations;
mod monitors;
mod navigation;
mod polling;
mod preferences;
mod profile;
mod tokens;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;
pub use types::SharedClient;
