//! Tasks screen input handler.
//!
//! Only search mode needs screen-level handling; every other key on this
//! screen is resolved by the keymap.

use crate::action::Action;
use crate::app::App;
use crate::app::input::{SearchKey, search_key};
use crossterm::event::KeyEvent;

impl App {
    pub fn handle_tasks_input(&mut self, key: KeyEvent) -> Option<Action> {
        if !self.tasks.searching {
            return None;
        }
        match search_key(&mut self.tasks.search, key) {
            SearchKey::Leave => self.tasks.searching = false,
            SearchKey::MoveDown => self.tasks.select_next(),
            SearchKey::MoveUp => self.tasks.select_previous(),
            SearchKey::Edited => {
                self.tasks.reset_selection();
                tracing::trace!(query = self.tasks.search.value(), "Task search changed");
            }
            SearchKey::Ignored => {}
        }
        None
    }
}
