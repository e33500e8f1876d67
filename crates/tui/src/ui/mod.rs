//! UI rendering modules for the TUI.
//!
//! This module contains screen-specific rendering logic that is separated
//! from the main app state management.

pub mod format;
pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use toast::{Toast, ToastLevel};
