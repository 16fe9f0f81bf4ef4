//! Popup rendering implementation.
//!
//! This module provides the `render_popup` function for rendering modal popup
//! dialogs. The help popup is a scrolling paragraph; the practice dialogs
//! delegate to their own layouts.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};
use breezeway_config::Theme;

use crate::app::App;
use crate::ui::popup::{POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT, Popup, PopupType};
use crate::ui::theme::ThemeExt;

use super::checklist::{ChecklistRenderConfig, render_checklist};
use super::task_details::{TaskDetailsRenderConfig, render_task_details};

/// Render a modal popup dialog.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `popup` - The popup to render
/// * `theme` - The color theme to use
/// * `app` - The app state (for accessing scroll offsets)
pub fn render_popup(f: &mut Frame, popup: &Popup, theme: &Theme, app: &App) {
    let size = f.area();
    let (width, height) = match &popup.kind {
        PopupType::Help => (POPUP_WIDTH_PERCENT, 70),
        PopupType::TaskDetails(_) => (70, 80),
        PopupType::InspectionChecklist(_) => (70, 85),
    };
    let popup_area = centered_rect(width, height.max(POPUP_HEIGHT_PERCENT), size);

    f.render_widget(Clear, popup_area);

    match &popup.kind {
        PopupType::Help => render_help(f, popup_area, popup, theme, app.help_scroll_offset),
        PopupType::TaskDetails(state) => render_task_details(
            f,
            popup_area,
            TaskDetailsRenderConfig {
                title: &popup.title,
                description: &popup.content,
                state,
                theme,
            },
        ),
        PopupType::InspectionChecklist(state) => render_checklist(
            f,
            popup_area,
            ChecklistRenderConfig {
                title: &popup.title,
                state,
                theme,
            },
        ),
    }
}

fn render_help(f: &mut Frame, area: Rect, popup: &Popup, theme: &Theme, scroll_offset: usize) {
    let p = Paragraph::new(popup.content.as_str())
        .block(
            Block::default()
                .title(format!(" {} ", popup.title))
                .borders(Borders::ALL)
                .border_style(theme.border_focused()),
        )
        .style(theme.text())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset as u16, 0));
    f.render_widget(p, area);

    let content_height = popup.content.lines().count();
    let visible_lines = area.height.saturating_sub(2) as usize;

    if content_height > visible_lines {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(content_height.saturating_sub(1)).position(scroll_offset);
        f.render_stateful_widget(scrollbar, area.inner(Margin::new(0, 1)), &mut scrollbar_state);
    }
}

/// Create a centered rectangle with the given percentage of the screen size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
