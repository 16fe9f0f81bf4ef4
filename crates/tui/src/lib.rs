//! Breezeway Training TUI Library
//!
//! This library provides the application logic, state management, and UI
//! components for the Breezeway training simulator: four practice views over
//! a fixed sample data set, with a scripted walkthrough drawn on top.
//!
//! # Example
//!
//! ```rust
//! use breezeway_tui::{Action, App, CurrentScreen};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::default();
//! // The walkthrough is open on start; Enter moves to step 2.
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Enter)) {
//!     app.update(action);
//! }
//! assert_eq!(app.walkthrough.as_ref().map(|w| w.step_number()), Some(2));
//!
//! app.update(Action::SwitchToScreen(CurrentScreen::Tasks));
//! assert_eq!(app.walkthrough.as_ref().map(|w| w.step_number()), Some(1));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod doc_markers;
pub mod input;
pub mod runtime;
pub mod ui;
pub mod walkthrough;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::popup::{Popup, PopupType};
pub use ui::toast::{Toast, ToastLevel};
pub use walkthrough::{ContentTable, TutorialStep, WalkthroughState};

/// Markdown for the README: every walkthrough sequence, then the keybinding catalog.
pub fn render_walkthrough_docs() -> String {
    format!(
        "### Walkthrough Steps\n\n{}\n\n{}",
        walkthrough::render_markdown(),
        input::docs::render_markdown()
    )
}
