//! Sentinel TUI Library
//!
//! This library provides the application state, the live-data sync layer
//! and the UI components for the Sentinel terminal dashboard.
//!
//! # Example
//!
//! ```rust
//! use sentinel_tui::{App, Action};
//! use sentinel_config::PersistedState;
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//!
//! let mut app = App::new(PersistedState::default(), Some("admin".to_string()));
//! let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
//! assert!(matches!(app.handle_input(key), Some(Action::Quit)));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod sync;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, LiveView, Screen};
pub use ui::toast::{Toast, ToastLevel};
