//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Route raw input actions through the input handlers
//!
//! Non-responsibilities:
//! - Does NOT create Actions from keys (handled by input handlers)
//! - Does NOT perform I/O
//!
//! This module delegates to domain-specific submodules:
//! - `navigation`: Screen switching, list navigation, help
//! - `walkthrough`: Opening, stepping and closing the overlay
//! - `views`: Search focus, status filter, practice dialogs
//! - `system`: Quit, ticks, resize, theme, notifications

use crate::action::Action;
use crate::app::App;

mod navigation;
mod system;
mod views;
mod walkthrough;

impl App {
    /// Pure state mutation based on Action.
    ///
    /// This method delegates to domain-specific handlers based on action type.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::NextScreen
            | Action::PreviousScreen
            | Action::SwitchToScreen(_)
            | Action::NavigateUp
            | Action::NavigateDown
            | Action::OpenHelpPopup => self.handle_navigation_action(action),

            Action::OpenWalkthrough
            | Action::CloseWalkthrough
            | Action::WalkthroughNext
            | Action::WalkthroughPrevious => self.handle_walkthrough_action(action),

            Action::FocusSearch | Action::CycleStatusFilter | Action::OpenSelected => {
                self.handle_view_action(action)
            }

            Action::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.update(next);
                }
            }
            Action::Mouse(mouse) => {
                if let Some(next) = self.handle_mouse(mouse) {
                    self.update(next);
                }
            }

            Action::Quit
            | Action::Tick
            | Action::Resize(..)
            | Action::CycleTheme
            | Action::Notify(..) => self.handle_system_action(action),
        }
    }
}
