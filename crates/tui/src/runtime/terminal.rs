//! Terminal setup and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally with mouse capture.
//! - Restore the terminal on exit, including after a panic.
//!
//! Does NOT handle:
//! - Drawing (see `App::render`).
//!
//! Invariants:
//! - Restoring is idempotent; an explicit `restore()` followed by drop is safe.
//! - Drop never panics.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Owns the terminal's raw/alternate-screen state for one TUI session.
pub struct TerminalGuard {
    mouse: bool,
    active: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// Mouse capture is enabled unless `no_mouse` is set.
    pub fn enter(no_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = if no_mouse {
            execute!(stdout, EnterAlternateScreen)
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        };
        if let Err(e) = entered {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self {
            mouse: !no_mouse,
            active: true,
        })
    }

    /// Leave TUI mode, reporting the first failure.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.mouse {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(stdout, LeaveAlternateScreen)
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored here; main() restores explicitly on a clean exit.
        let _ = self.restore();
    }
}
