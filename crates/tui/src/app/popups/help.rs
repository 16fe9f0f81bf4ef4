//! Help popup handler.

use crate::action::Action;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    /// Handle Help popup.
    pub(super) fn handle_help_popup(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.popup = None;
                self.help_scroll_offset = 0;
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.help_scroll_offset = self.help_scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.help_scroll_offset = self.help_scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.help_scroll_offset = self.help_scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        }
    }
}
