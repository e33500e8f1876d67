//! Common types shared across Sentinel API models.
//!
//! The engine wraps every successful response in an envelope with an
//! optional `data` payload, an optional human `message`, and (for paged
//! listings) a `pagination` block.

use serde::{Deserialize, Serialize};

/// Response envelope returned by every engine route.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Reply for routes that only confirm an action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body. The engine uses `message` on some routes and `error` on others.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_text(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// Server-computed page metadata.
///
/// Invariant (server side): `page` is within `[1, total_pages]` whenever
/// `total_pages > 0`. The client treats this as read-only input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total_items: u64,
    pub total_pages: u32,
    pub page: u32,
    pub per_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
}
