//! Terminal lifecycle with RAII cleanup.
//!
//! `TerminalManager` switches the terminal into raw mode on the alternate
//! screen and puts it back when dropped. `setup_panic_hook` covers the
//! unwinding path where the drop may never run.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use std::io::{self, Stdout};

use crossterm::terminal::{enable_raw_mode, window_size};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::console::viewport_width;
use crate::error::{FolioResult, UiError};

/// Restores the terminal on drop. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// A ratatui terminal on stdout in TUI mode.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> FolioResult<Self> {
        let init_failed = |e: io::Error| UiError::TerminalInitFailed {
            message: e.to_string(),
        };

        enable_raw_mode().map_err(init_failed)?;

        // From here on the guard undoes whatever succeeded.
        let guard = TerminalGuard::new();
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) -> FolioResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalInitFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// Size of the terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetrics {
    pub columns: u16,
    pub rows: u16,
    /// Zero when the terminal does not report pixel sizes.
    pub pixel_width: u16,
}

impl WindowMetrics {
    /// Width in pixels, estimated from the column count when unknown.
    pub fn viewport_width(&self) -> u32 {
        viewport_width(self.columns, self.pixel_width)
    }
}

pub fn window_metrics() -> FolioResult<WindowMetrics> {
    let size = window_size().map_err(|e| UiError::TerminalSizeFailed {
        message: e.to_string(),
    })?;
    Ok(WindowMetrics {
        columns: size.columns,
        rows: size.rows,
        pixel_width: size.width,
    })
}
