//! Task details dialog handler.
//!
//! Two modes: the status selector and footer buttons, or the comment
//! composer while `composing` is set.

use breezeway_catalog::TaskStatus;
use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::ui::ToastLevel;
use crate::ui::popup::{Popup, PopupType, TaskDetailsState};

pub(crate) const TASK_NOT_SAVED_MESSAGE: &str =
    "Practice mode: task changes are not saved";

impl App {
    pub(super) fn handle_task_details_popup(&mut self, key: KeyEvent) -> Option<Action> {
        let Some(Popup {
            kind: PopupType::TaskDetails(state),
            ..
        }) = self.popup.as_mut()
        else {
            return None;
        };

        if state.composing {
            compose_key(state, key);
            return None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => state.draft.previous_status(),
            KeyCode::Right | KeyCode::Char('l') => state.draft.next_status(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(&status) = TaskStatus::ALL.get(index) {
                    state.draft.set_status(status);
                }
            }
            KeyCode::Char('c') | KeyCode::Enter => state.composing = true,
            KeyCode::Char('s') => {
                tracing::debug!(task_id = state.draft.task_id, "Discarding task draft on save");
                self.popup = None;
                return Some(Action::Notify(
                    ToastLevel::Info,
                    TASK_NOT_SAVED_MESSAGE.to_string(),
                ));
            }
            KeyCode::Esc | KeyCode::Char('q') => self.popup = None,
            _ => {}
        }
        None
    }
}

fn compose_key(state: &mut TaskDetailsState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if state.draft.add_comment(state.comment.value()) {
                state.comment.clear();
            }
            state.composing = false;
        }
        KeyCode::Esc => state.composing = false,
        _ => {
            state.comment.handle_key(key);
        }
    }
}
