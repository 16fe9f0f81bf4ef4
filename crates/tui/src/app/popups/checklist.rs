//! Inspection checklist dialog handler.

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::ui::ToastLevel;
use crate::ui::popup::{ChecklistState, Popup, PopupType};

pub(crate) const CHECKLIST_NOT_SAVED_MESSAGE: &str =
    "Practice mode: checklist progress is not saved";
pub(crate) const INSPECTION_COMPLETE_MESSAGE: &str =
    "Inspection marked complete (practice mode, nothing was saved)";

impl App {
    pub(super) fn handle_checklist_popup(&mut self, key: KeyEvent) -> Option<Action> {
        let Some(Popup {
            kind: PopupType::InspectionChecklist(state),
            ..
        }) = self.popup.as_mut()
        else {
            return None;
        };

        if state.editing_notes {
            notes_key(state, key);
            return None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => state.select_previous(),
            KeyCode::Char(' ') => {
                state.toggle_selected();
            }
            KeyCode::Char('n') => state.editing_notes = true,
            KeyCode::Char('s') => {
                self.popup = None;
                return Some(Action::Notify(
                    ToastLevel::Info,
                    CHECKLIST_NOT_SAVED_MESSAGE.to_string(),
                ));
            }
            KeyCode::Enter => {
                tracing::info!(
                    inspection_id = state.session.inspection_id,
                    completed = state.session.completed(),
                    total = state.session.total(),
                    "Practice inspection completed"
                );
                self.popup = None;
                return Some(Action::Notify(
                    ToastLevel::Success,
                    INSPECTION_COMPLETE_MESSAGE.to_string(),
                ));
            }
            KeyCode::Esc | KeyCode::Char('q') => self.popup = None,
            _ => {}
        }
        None
    }
}

fn notes_key(state: &mut ChecklistState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.editing_notes = false,
        _ => {
            if state.notes.handle_key(key) {
                state.session.notes = state.notes.value().to_string();
            }
        }
    }
}
