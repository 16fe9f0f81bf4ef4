//! Walkthrough action handlers.
//!
//! Invariants:
//! - Opening always starts a fresh engine at step 0 of the current screen.
//! - Closing discards the engine; nothing about a finished run is kept.

use crate::action::Action;
use crate::app::App;
use crate::walkthrough::WalkthroughState;

impl App {
    pub(super) fn handle_walkthrough_action(&mut self, action: Action) {
        match action {
            Action::OpenWalkthrough => {
                tracing::info!(view = self.current_screen.id(), "Opening walkthrough");
                self.popup = None;
                self.walkthrough = Some(WalkthroughState::new(self.current_screen));
            }
            Action::CloseWalkthrough => {
                if let Some(state) = self.walkthrough.take() {
                    tracing::info!(
                        view = state.view().id(),
                        step = state.step_number(),
                        finished = state.is_complete(),
                        "Closing walkthrough"
                    );
                }
            }
            Action::WalkthroughNext => {
                if let Some(state) = self.walkthrough.as_mut()
                    && state.advance()
                {
                    tracing::debug!(step = state.step_number(), "Walkthrough advanced");
                }
            }
            Action::WalkthroughPrevious => {
                if let Some(state) = self.walkthrough.as_mut()
                    && state.retreat()
                {
                    tracing::debug!(step = state.step_number(), "Walkthrough went back");
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CurrentScreen;

    #[test]
    fn test_step_actions_without_overlay_are_noops() {
        let mut app = App::default();
        app.update(Action::CloseWalkthrough);
        app.update(Action::WalkthroughNext);
        app.update(Action::WalkthroughPrevious);
        assert!(app.walkthrough.is_none());
    }

    #[test]
    fn test_reopen_restarts_on_current_screen() {
        let mut app = App::default();
        app.update(Action::WalkthroughNext);
        app.update(Action::WalkthroughNext);
        app.update(Action::CloseWalkthrough);
        app.update(Action::SwitchToScreen(CurrentScreen::Properties));
        assert!(app.walkthrough.is_none());

        app.update(Action::OpenWalkthrough);
        let state = app.walkthrough.as_ref().unwrap();
        assert_eq!(state.view(), CurrentScreen::Properties);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_next_stops_on_last_step() {
        let mut app = App::default();
        for _ in 0..10 {
            app.update(Action::WalkthroughNext);
        }
        let state = app.walkthrough.as_ref().unwrap();
        assert_eq!(state.current_index(), 3);
        assert!(state.is_complete());
    }
}
