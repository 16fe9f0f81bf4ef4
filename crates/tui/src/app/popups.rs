//! Popup input handling for the TUI app.
//!
//! Responsibilities:
//! - Handle keyboard input when popups are active
//! - Dispatch to the handler for the open popup's kind
//!
//! Non-responsibilities:
//! - Does NOT render popups (handled by ui::popup module)
//! - Does NOT define popup types (handled by ui::popup module)
//!
//! Invariants:
//! - Closing a practice dialog drops its draft; nothing is written back.

use crate::action::Action;
use crate::app::App;
use crate::ui::popup::PopupType;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

mod checklist;
mod help;
mod task_details;

impl App {
    /// Handle keyboard input when a popup is active.
    pub fn handle_popup_input(&mut self, key: KeyEvent) -> Option<Action> {
        // Ctrl+C quits from any popup, including while typing.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match self.popup.as_ref().map(|p| &p.kind) {
            Some(PopupType::Help) => self.handle_help_popup(key),
            Some(PopupType::TaskDetails(_)) => self.handle_task_details_popup(key),
            Some(PopupType::InspectionChecklist(_)) => self.handle_checklist_popup(key),
            None => None,
        }
    }
}
