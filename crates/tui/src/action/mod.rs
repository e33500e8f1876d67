//! Action protocol for async TUI event handling.
//!
//! Actions represent both user input and the results of async operations.
//! Everything that changes `App` state arrives as an `Action` over the
//! event loop's channel.
//!
//! # Module Structure
//!
//! - `variants`: the `Action` enum and the payload types it carries
//! - `redaction`: `RedactedAction`, the only way actions should be logged
//!
//! # What This Module Does NOT Handle
//!
//! - Applying actions to state (see `App::update`)
//! - Running async work (see `runtime::side_effects`)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, EventsEvent, MonitorEvent, RequestsEvent, RequestsSnapshot};
