//! UI screen rendering modules.
//!
//! This module contains screen-specific rendering logic.

pub mod events;
pub mod integration_form;
pub mod integrations;
pub mod monitor_form;
pub mod monitors;
pub mod profile;
pub mod requests;
pub mod sign_in;
pub mod token_form;
pub mod tokens;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
