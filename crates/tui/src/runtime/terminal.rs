//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally with mouse capture.
//! - Ensure terminal state is restored on application exit, even during panics.
//!
//! Does NOT handle:
//! - Drawing (see `App::render`).
//!
//! Invariants / Assumptions:
//! - The guard is created only after setup succeeded.
//! - Drop implementation must not panic.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Guard that ensures terminal state is restored on drop.
///
/// This struct captures the terminal state configuration and restores
/// it when dropped, ensuring cleanup happens even during panics.
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// Create a new terminal guard.
    ///
    /// # Arguments
    /// * `mouse_captured` - Whether mouse capture was enabled during setup
    pub fn new(mouse_captured: bool) -> Self {
        Self { mouse_captured }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; there is nowhere left to report them.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}

/// Put the terminal into TUI mode and return it with its restore guard.
pub fn setup_terminal(
    mouse_enabled: bool,
) -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    }
    .context("Failed to enter alternate screen")?;

    // From here on the guard restores the terminal on every exit path.
    let guard = TerminalGuard::new(mouse_enabled);
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok((terminal, guard))
}
