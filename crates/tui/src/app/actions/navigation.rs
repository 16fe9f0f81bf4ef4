//! Navigation action handlers.

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::input::help::contextual_help_text;
use crate::ui::popup::{Popup, PopupType};

impl App {
    /// Handle screen switching, list movement and the help popup.
    pub(super) fn handle_navigation_action(&mut self, action: Action) {
        match action {
            Action::NextScreen => self.set_screen(self.current_screen.next()),
            Action::PreviousScreen => self.set_screen(self.current_screen.previous()),
            Action::SwitchToScreen(screen) => self.set_screen(screen),
            Action::NavigateDown => self.next_item(),
            Action::NavigateUp => self.previous_item(),
            Action::OpenHelpPopup => {
                self.help_scroll_offset = 0;
                self.popup = Some(
                    Popup::builder(PopupType::Help)
                        .content(contextual_help_text(self.current_screen))
                        .build(),
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_popup_uses_current_screen() {
        let mut app = App::default();
        app.update(Action::SwitchToScreen(CurrentScreen::Inspections));
        app.help_scroll_offset = 4;
        app.update(Action::OpenHelpPopup);
        let popup = app.popup.as_ref().unwrap();
        assert_eq!(popup.kind, PopupType::Help);
        assert!(popup.content.starts_with("Inspections:"));
        assert_eq!(app.help_scroll_offset, 0);
    }

    #[test]
    fn test_navigation_moves_current_screen_selection_only() {
        let mut app = App::default();
        app.update(Action::SwitchToScreen(CurrentScreen::Inspections));
        app.update(Action::NavigateDown);
        app.update(Action::NavigateDown);
        assert_eq!(app.inspections.list.selected(), Some(2));
        assert_eq!(app.tasks.table.selected(), Some(0));

        app.update(Action::NavigateUp);
        assert_eq!(app.inspections.list.selected(), Some(1));
    }

    #[test]
    fn test_navigation_on_dashboard_is_noop() {
        let mut app = App::default();
        app.update(Action::NavigateDown);
        assert_eq!(app.current_screen, CurrentScreen::Dashboard);
        assert_eq!(app.tasks.table.selected(), Some(0));
    }
}
