//! Shared UI widgets for common rendering patterns.
//!
//! This module provides reusable widgets for loading states, empty states,
//! text fields, the integration picker and the request log's page bar.

pub mod empty;
pub mod input;
pub mod loading;
pub mod pagination_bar;
pub mod picker;

pub use empty::render_empty_state;
pub use input::{TextField, render_text_field};
pub use loading::render_loading_state;
pub use pagination_bar::render_pagination_bar;
pub use picker::render_picker;
