//! List view and practice dialog action handlers.

use breezeway_catalog::{ChecklistSession, TaskDraft, catalog};

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::ui::popup::{ChecklistState, Popup, PopupType, TaskDetailsState};

impl App {
    pub(super) fn handle_view_action(&mut self, action: Action) {
        match action {
            Action::FocusSearch => match self.current_screen {
                CurrentScreen::Tasks => self.tasks.searching = true,
                CurrentScreen::Properties => self.properties.searching = true,
                CurrentScreen::Dashboard | CurrentScreen::Inspections => {}
            },
            Action::CycleStatusFilter => {
                if self.current_screen == CurrentScreen::Tasks {
                    self.tasks.filter = self.tasks.filter.cycle_next();
                    self.tasks.reset_selection();
                    tracing::debug!(filter = %self.tasks.filter, "Status filter changed");
                }
            }
            Action::OpenSelected => self.open_selected(),
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        let catalog = catalog();
        match self.current_screen {
            CurrentScreen::Tasks => {
                let Some(task) = self.tasks.selected_task() else {
                    return;
                };
                tracing::debug!(task_id = task.id, "Opening task details");
                let draft = TaskDraft::open(task, &catalog.seed_comments);
                self.popup = Some(
                    Popup::builder(PopupType::TaskDetails(TaskDetailsState::new(draft))).build(),
                );
            }
            CurrentScreen::Inspections => {
                let Some(inspection) = self.inspections.selected_inspection() else {
                    return;
                };
                tracing::debug!(inspection_id = inspection.id, "Opening inspection checklist");
                let session = ChecklistSession::open(inspection.id, &catalog.checklist_template);
                self.popup = Some(
                    Popup::builder(PopupType::InspectionChecklist(ChecklistState::new(session)))
                        .build(),
                );
            }
            CurrentScreen::Dashboard | CurrentScreen::Properties => {}
        }
    }
}
