//! Popup type definitions for the dialog variants.
//!
//! The practice dialogs carry their own draft state so that closing the
//! popup is all it takes to discard an edit.

use breezeway_catalog::{ChecklistSession, TaskDraft};

use crate::app::input::components::TextField;

/// The type/kind of popup dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    /// Help dialog with keyboard shortcuts
    Help,
    /// Task details with a status selector and comment thread
    TaskDetails(TaskDetailsState),
    /// Inspection checklist with toggles and notes
    InspectionChecklist(ChecklistState),
}

/// Draft state of the task details dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailsState {
    pub draft: TaskDraft,
    pub comment: TextField,
    /// Keys go to the comment box while set.
    pub composing: bool,
}

impl TaskDetailsState {
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            draft,
            comment: TextField::with_placeholder("Add a comment..."),
            composing: false,
        }
    }
}

/// Session state of the inspection checklist dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistState {
    pub session: ChecklistSession,
    /// Cursor position in [`ChecklistSession::display_order`].
    pub selected: usize,
    pub notes: TextField,
    /// Keys go to the notes box while set.
    pub editing_notes: bool,
}

impl ChecklistState {
    pub fn new(session: ChecklistSession) -> Self {
        Self {
            session,
            selected: 0,
            notes: TextField::with_placeholder("Add any additional notes..."),
            editing_notes: false,
        }
    }

    /// Id of the item under the cursor.
    pub fn selected_item_id(&self) -> Option<u32> {
        self.session.display_order().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.session.total();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle the item under the cursor.
    pub fn toggle_selected(&mut self) -> bool {
        match self.selected_item_id() {
            Some(id) => self.session.toggle(id),
            None => false,
        }
    }
}
