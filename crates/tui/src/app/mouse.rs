//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Handle walkthrough control clicks (Previous, Next/finish, close)
//! - Handle header tab and training button clicks
//! - Handle mouse scroll events
//! - Handle content area clicks for selection
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI
//!
//! Invariants:
//! - Hit-testing uses the same layout helpers as rendering
//!   (`HeaderLayout`, `OverlayLayout` and the screen layout constants).

use crate::action::Action;
use crate::app::App;
use crate::app::header_layout::HeaderLayout;
use crate::app::state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::popup::PopupType;
use crate::ui::screens::{inspections, properties, tasks};
use crate::ui::walkthrough::OverlayLayout;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if !self.mouse_enabled {
            return None;
        }
        if self.walkthrough_visible() {
            return self.handle_walkthrough_mouse(mouse);
        }
        if self.popup.is_some() {
            return self.handle_popup_mouse(mouse);
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::NavigateUp),
            MouseEventKind::ScrollDown => Some(Action::NavigateDown),
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row < HEADER_HEIGHT {
                    return self.handle_header_click(mouse.row, mouse.column);
                }
                let footer_start = self.last_area.height.saturating_sub(FOOTER_HEIGHT);
                if mouse.row < footer_start {
                    return self.handle_content_click(mouse.row, mouse.column);
                }
                None
            }
            _ => None,
        }
    }

    /// The overlay is modal: only its own controls respond.
    fn handle_walkthrough_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let state = self.walkthrough.as_ref()?;
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return None;
        };
        let layout = OverlayLayout::new(self.last_area, state);
        let pos = Position::new(mouse.column, mouse.row);

        if layout.close.contains(pos) {
            Some(Action::CloseWalkthrough)
        } else if layout.previous.contains(pos) {
            (!state.is_at_start()).then_some(Action::WalkthroughPrevious)
        } else if layout.next.contains(pos) {
            if state.is_complete() {
                Some(Action::CloseWalkthrough)
            } else {
                Some(Action::WalkthroughNext)
            }
        } else {
            None
        }
    }

    fn handle_popup_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let popup = self.popup.as_mut()?;
        let down = match mouse.kind {
            MouseEventKind::ScrollDown => true,
            MouseEventKind::ScrollUp => false,
            _ => return None,
        };
        match &mut popup.kind {
            PopupType::Help => {
                self.help_scroll_offset = if down {
                    self.help_scroll_offset.saturating_add(1)
                } else {
                    self.help_scroll_offset.saturating_sub(1)
                };
            }
            PopupType::InspectionChecklist(state) if !state.editing_notes => {
                if down {
                    state.select_next();
                } else {
                    state.select_previous();
                }
            }
            PopupType::InspectionChecklist(_) | PopupType::TaskDetails(_) => {}
        }
        None
    }

    fn handle_header_click(&mut self, row: u16, col: u16) -> Option<Action> {
        // Only the text row inside the border is clickable.
        if row != 1 {
            return None;
        }
        let layout = HeaderLayout::calculate(self.last_area.width);
        if layout.is_training_clicked(col) {
            return Some(Action::OpenWalkthrough);
        }
        layout.tab_at(col).map(Action::SwitchToScreen)
    }

    /// Handle clicks in the main content area.
    fn handle_content_click(&mut self, row: u16, col: u16) -> Option<Action> {
        let content = self.content_area();
        match self.current_screen {
            CurrentScreen::Dashboard => None,
            CurrentScreen::Tasks => {
                let toolbar_end = content.y + tasks::TOOLBAR_HEIGHT;
                if row < toolbar_end {
                    let filter_start = content.right().saturating_sub(tasks::FILTER_WIDTH);
                    return if col >= filter_start {
                        Some(Action::CycleStatusFilter)
                    } else {
                        Some(Action::FocusSearch)
                    };
                }
                self.tasks.searching = false;
                let index = calculate_card_click_index(
                    row,
                    toolbar_end + tasks::TABLE_HEADER_ROWS,
                    1,
                    self.tasks.table.offset(),
                    self.tasks.visible().len(),
                )?;
                self.tasks.table.select(Some(index));
                Some(Action::OpenSelected)
            }
            CurrentScreen::Inspections => {
                let index = calculate_card_click_index(
                    row,
                    content.y + 1,
                    inspections::CARD_HEIGHT,
                    self.inspections.list.offset(),
                    breezeway_catalog::catalog().inspections.len(),
                )?;
                self.inspections.list.select(Some(index));
                Some(Action::OpenSelected)
            }
            CurrentScreen::Properties => {
                let search_end = content.y + properties::SEARCH_HEIGHT;
                if row < search_end {
                    return Some(Action::FocusSearch);
                }
                self.properties.searching = false;
                let index = calculate_card_click_index(
                    row,
                    search_end + 1,
                    properties::CARD_HEIGHT,
                    self.properties.list.offset(),
                    self.properties.visible().len(),
                )?;
                self.properties.list.select(Some(index));
                None
            }
        }
    }

    /// Area between the header and footer for the last drawn frame.
    pub(crate) fn content_area(&self) -> Rect {
        let height = self
            .last_area
            .height
            .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        Rect::new(0, HEADER_HEIGHT, self.last_area.width, height)
    }
}

/// Calculate the item index from a click row for a list of fixed-height items.
fn calculate_card_click_index(
    click_row: u16,
    data_start_row: u16,
    item_height: u16,
    offset: usize,
    total_items: usize,
) -> Option<usize> {
    if click_row < data_start_row || item_height == 0 {
        return None;
    }
    let relative = ((click_row - data_start_row) / item_height) as usize;
    let index = offset + relative;
    (index < total_items).then_some(index)
}
