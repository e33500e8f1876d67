//! Shared types for side effect handlers.

use sentinel_client::SentinelClient;
use std::sync::Arc;

/// Shared client for spawned tasks.
///
/// The session lives in the client's cookie store, so every call takes
/// `&self` and no lock is needed.
pub type SharedClient = Arc<SentinelClient>;
