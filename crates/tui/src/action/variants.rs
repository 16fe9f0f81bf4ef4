//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: Application lifecycle, ticks, terminal resize
//! - **Input**: Raw keyboard and mouse events
//! - **Navigation**: Screen switching and list movement
//! - **Walkthrough**: Opening, stepping through, and closing the training overlay
//! - **Views**: Search, filter, and detail dialogs on the list screens
//! - **Notifications**: Toast messages

use crossterm::event::{KeyEvent, MouseEvent};

use crate::app::CurrentScreen;
use crate::ui::ToastLevel;

/// Unified action type for the TUI event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick (toast expiry)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Switch to the next color theme
    CycleTheme,

    // Input
    /// Raw key press
    Input(KeyEvent),
    /// Raw mouse event
    Mouse(MouseEvent),

    // Navigation
    /// Cycle to the next screen
    NextScreen,
    /// Cycle to the previous screen
    PreviousScreen,
    /// Jump straight to a screen
    SwitchToScreen(CurrentScreen),
    /// Move the list selection up
    NavigateUp,
    /// Move the list selection down
    NavigateDown,
    /// Show the keybinding help popup
    OpenHelpPopup,

    // Walkthrough
    /// Show the walkthrough for the current screen from its first step
    OpenWalkthrough,
    /// Hide the walkthrough and discard its position
    CloseWalkthrough,
    /// Next walkthrough step; a no-op on the last step
    WalkthroughNext,
    /// Previous walkthrough step
    WalkthroughPrevious,

    // Views
    /// Focus the search box on the current screen
    FocusSearch,
    /// Cycle the task status filter
    CycleStatusFilter,
    /// Open the details dialog for the selected row
    OpenSelected,

    // Notifications
    /// Show a toast
    Notify(ToastLevel, String),
}
