//! Navigation helpers for the TUI app.
//!
//! Responsibilities:
//! - Switch the active screen and keep the overlay in step with it
//! - Move the selection on the active screen
//!
//! Non-responsibilities:
//! - Does NOT decide which keys navigate (handled by the keymap)
//! - Does NOT handle input events
//!
//! Invariants:
//! - Switching screens closes any open dialog and leaves search mode.
//! - A visible walkthrough restarts at step 1 of the new screen's sequence.

use crate::app::App;
use crate::app::state::CurrentScreen;

impl App {
    /// Make `screen` the active view. Re-selecting the active view is a no-op.
    pub(crate) fn set_screen(&mut self, screen: CurrentScreen) {
        if screen == self.current_screen {
            return;
        }
        tracing::debug!(from = self.current_screen.id(), to = screen.id(), "Switching screen");

        self.current_screen = screen;
        self.popup = None;
        self.tasks.searching = false;
        self.properties.searching = false;

        if let Some(walkthrough) = self.walkthrough.as_mut() {
            walkthrough.select_view(screen);
        }
    }

    pub(crate) fn next_item(&mut self) {
        match self.current_screen {
            CurrentScreen::Dashboard => {}
            CurrentScreen::Tasks => self.tasks.select_next(),
            CurrentScreen::Inspections => self.inspections.select_next(),
            CurrentScreen::Properties => self.properties.select_next(),
        }
    }

    pub(crate) fn previous_item(&mut self) {
        match self.current_screen {
            CurrentScreen::Dashboard => {}
            CurrentScreen::Tasks => self.tasks.select_previous(),
            CurrentScreen::Inspections => self.inspections.select_previous(),
            CurrentScreen::Properties => self.properties.select_previous(),
        }
    }
}
