//! Per-screen input handlers for the TUI app.
//!
//! Responsibilities:
//! - Dispatch keyboard input to the appropriate screen handler
//! - Own the text entry component shared by search boxes and dialogs
//!
//! Non-responsibilities:
//! - Does NOT handle global keybindings (handled by keymap module)
//! - Does NOT handle popup input (handled by popups module)

pub mod components;
pub mod properties;
pub mod tasks;

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crossterm::event::{KeyCode, KeyEvent};

use self::components::TextField;

/// What a search-mode key did to the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchKey {
    /// Search mode ended; the query stays applied.
    Leave,
    MoveDown,
    MoveUp,
    /// The query text changed; the visible rows need a fresh selection.
    Edited,
    Ignored,
}

/// Apply a key to a focused search box.
pub(crate) fn search_key(field: &mut TextField, key: KeyEvent) -> SearchKey {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => SearchKey::Leave,
        KeyCode::Down => SearchKey::MoveDown,
        KeyCode::Up => SearchKey::MoveUp,
        _ if field.handle_key(key) => SearchKey::Edited,
        _ => SearchKey::Ignored,
    }
}

impl App {
    /// Dispatch input to the appropriate screen handler.
    pub fn dispatch_screen_input(&mut self, key: KeyEvent) -> Option<Action> {
        match self.current_screen {
            CurrentScreen::Tasks => self.handle_tasks_input(key),
            CurrentScreen::Properties => self.handle_properties_input(key),
            CurrentScreen::Dashboard | CurrentScreen::Inspections => None,
        }
    }
}
