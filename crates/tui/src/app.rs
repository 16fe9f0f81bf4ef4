//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (CurrentScreen, per-view state)
//! - `header_layout`: Header geometry shared by rendering and mouse hit-testing
//! - `navigation`: Screen switching and list movement helpers
//! - `mouse`: Mouse event handling
//! - `popups`: Popup input handling
//! - `input`: Per-screen input handlers
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod header_layout;
pub mod input;
pub mod state;

mod actions;
mod mouse;
mod navigation;
mod popups;
mod render;

pub use state::{
    CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT, InspectionsView, PropertiesView, TasksView,
};

use breezeway_config::{ColorTheme, Theme, TrainerConfig};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::input::keymap::{resolve_action, resolve_global_action};
use crate::ui::Toast;
use crate::ui::popup::Popup;
use crate::walkthrough::WalkthroughState;

/// Main application state.
pub struct App {
    pub current_screen: CurrentScreen,
    /// Present only while the overlay is visible.
    pub walkthrough: Option<WalkthroughState>,
    pub popup: Option<Popup>,
    pub toasts: Vec<Toast>,

    /// Currently selected color theme.
    pub color_theme: ColorTheme,
    /// Expanded runtime theme derived from `color_theme`.
    pub theme: Theme,
    pub mouse_enabled: bool,

    // Per-view state
    pub tasks: TasksView,
    pub inspections: InspectionsView,
    pub properties: PropertiesView,

    // Help popup scroll offset
    pub help_scroll_offset: usize,

    // Layout tracking
    pub last_area: Rect,

    /// Set once `Action::Quit` has been applied.
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&TrainerConfig::default())
    }
}

/// Resolve the configured start view, falling back to the dashboard.
fn start_screen(view: Option<&str>) -> CurrentScreen {
    let Some(raw) = view else {
        return CurrentScreen::default();
    };
    CurrentScreen::parse(raw).unwrap_or_else(|| {
        tracing::warn!(view = %raw, "Unknown start view, falling back to dashboard");
        CurrentScreen::default()
    })
}

impl App {
    /// Create a new App from the resolved run configuration.
    pub fn new(config: &TrainerConfig) -> Self {
        let current_screen = start_screen(config.start_view.as_deref());
        let walkthrough = config
            .show_walkthrough
            .then(|| WalkthroughState::new(current_screen));

        Self {
            current_screen,
            walkthrough,
            popup: None,
            toasts: Vec::new(),
            color_theme: config.theme,
            theme: Theme::from_color_theme(config.theme),
            mouse_enabled: config.mouse_enabled,
            tasks: TasksView::new(),
            inspections: InspectionsView::new(),
            properties: PropertiesView::new(),
            help_scroll_offset: 0,
            last_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Whether the walkthrough overlay is showing.
    pub fn walkthrough_visible(&self) -> bool {
        self.walkthrough.is_some()
    }

    /// Whether the current screen's search box owns the keyboard.
    pub fn is_searching(&self) -> bool {
        match self.current_screen {
            CurrentScreen::Tasks => self.tasks.searching,
            CurrentScreen::Properties => self.properties.searching,
            CurrentScreen::Dashboard | CurrentScreen::Inspections => false,
        }
    }

    /// Translate a key press into an Action.
    ///
    /// Precedence: walkthrough overlay, open popup, active search box,
    /// keymap, then the screen handler.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.walkthrough_visible() {
            return self.handle_walkthrough_input(key);
        }

        if self.popup.is_some() {
            return self.handle_popup_input(key);
        }

        // Search boxes take printable keys, including digits and `q`.
        // Tab, BackTab and Ctrl+C still reach the keymap.
        let search_passthrough = matches!(key.code, KeyCode::Tab | KeyCode::BackTab)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if self.is_searching() && !search_passthrough {
            return self.dispatch_screen_input(key);
        }

        if let Some(action) = resolve_action(self.current_screen, key) {
            return Some(action);
        }

        self.dispatch_screen_input(key)
    }

    /// Keys while the overlay is open. Step keys drive the overlay, screen
    /// switching and quit pass through, everything else is swallowed.
    fn handle_walkthrough_input(&mut self, key: KeyEvent) -> Option<Action> {
        let state = self.walkthrough.as_ref()?;
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => Some(Action::WalkthroughNext),
            KeyCode::Enter if state.is_complete() => Some(Action::CloseWalkthrough),
            KeyCode::Enter => Some(Action::WalkthroughNext),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::WalkthroughPrevious),
            KeyCode::Esc | KeyCode::Char('x') => Some(Action::CloseWalkthrough),
            _ => resolve_global_action(key).filter(|action| {
                matches!(
                    action,
                    Action::Quit
                        | Action::NextScreen
                        | Action::PreviousScreen
                        | Action::SwitchToScreen(_)
                )
            }),
        }
    }

    /// Drop expired toasts.
    pub fn handle_tick(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }
}
