//! Header layout calculation for rendering and hit-testing.
//!
//! Responsibilities:
//! - Calculate the column ranges of the brand, view tabs and training button
//! - Provide consistent layout information for both rendering and mouse hit-testing
//!
//! Does NOT handle:
//! - Does NOT render the header (see render.rs)
//! - Does NOT handle mouse events (see mouse.rs)
//!
//! Invariants:
//! - Column positions are 0-indexed from the start of the content area (inside the border).
//! - The header text is built from the same constants measured here.

use crate::app::state::CurrentScreen;

/// Brand mark at the left of the header.
pub const BRAND: &str = " B  Breezeway Training ";
/// Separator between the brand and the tabs.
pub const SEPARATOR: &str = "│";
/// Persistent control that reopens the walkthrough.
pub const TRAINING_BUTTON: &str = " [t] Training Mode ";

/// Label drawn for a view tab.
pub fn tab_label(screen: CurrentScreen) -> String {
    format!(" {} {} ", screen.shortcut(), screen.title())
}

fn width_of(text: &str) -> u16 {
    text.chars().count() as u16
}

/// Represents the layout of the header for both rendering and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// `(start, end)` of each tab in tab order, end exclusive.
    pub tabs: [(u16, u16); 4],
    /// Start column of the training button (inclusive)
    pub training_start: u16,
    /// End column of the training button (exclusive)
    pub training_end: u16,
    /// Whether the training button fits after the tabs
    pub training_visible: bool,
    /// Width available inside the border
    pub content_width: u16,
}

impl HeaderLayout {
    /// Calculate header layout for a terminal `terminal_width` columns wide.
    pub fn calculate(terminal_width: u16) -> Self {
        let content_width = terminal_width.saturating_sub(2);

        let mut tabs = [(0, 0); 4];
        let mut col = width_of(BRAND) + width_of(SEPARATOR);
        for (slot, screen) in tabs.iter_mut().zip(CurrentScreen::ALL) {
            let end = col + width_of(&tab_label(screen));
            *slot = (col, end);
            col = end;
        }

        let button_width = width_of(TRAINING_BUTTON);
        let training_start = content_width.saturating_sub(button_width);
        let training_visible = training_start >= col;

        Self {
            tabs,
            training_start,
            training_end: training_start + button_width,
            training_visible,
            content_width,
        }
    }

    /// End column of the last tab.
    pub fn tabs_end(&self) -> u16 {
        self.tabs[3].1
    }

    /// Tab under column `col` (0-indexed from the frame edge).
    pub fn tab_at(&self, col: u16) -> Option<CurrentScreen> {
        let inner = col.checked_sub(1)?;
        if inner >= self.content_width {
            return None;
        }
        self.tabs
            .iter()
            .position(|&(start, end)| inner >= start && inner < end)
            .map(|i| CurrentScreen::ALL[i])
    }

    /// Whether column `col` (0-indexed from the frame edge) hits the training button.
    pub fn is_training_clicked(&self, col: u16) -> bool {
        if !self.training_visible {
            return false;
        }
        let Some(inner) = col.checked_sub(1) else {
            return false;
        };
        inner >= self.training_start && inner < self.training_end
    }
}
