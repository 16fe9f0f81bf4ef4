//! Inspections screen rendering.
//!
//! One card per inspection; pending inspections omit the completion bar.

use breezeway_catalog::Inspection;
use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::ui::theme::ThemeExt;

/// Rows occupied by one inspection card, separator included.
pub const CARD_HEIGHT: u16 = 4;
const BAR_WIDTH: usize = 20;

/// Configuration for rendering the inspections screen.
pub struct InspectionsRenderConfig<'a> {
    pub inspections: &'a [Inspection],
    pub state: &'a mut ListState,
    pub theme: &'a Theme,
}

/// Text bar for a completion percentage, e.g. `█████░░░░░ 50%`.
pub fn completion_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH).div_ceil(100);
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

pub fn render_inspections(f: &mut Frame, area: Rect, config: InspectionsRenderConfig) {
    let InspectionsRenderConfig {
        inspections,
        state,
        theme,
    } = config;

    let items: Vec<ListItem> = inspections
        .iter()
        .map(|inspection| {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(inspection.kind.clone(), theme.title()),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", inspection.status),
                        theme.inspection_status(inspection.status),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{} · {} · Inspector: {}",
                        inspection.property, inspection.date, inspection.inspector
                    ),
                    theme.text_dim(),
                )),
            ];
            if inspection.status.shows_progress() {
                lines.push(Line::from(Span::styled(
                    completion_bar(inspection.completion_percent),
                    theme.success(),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "Press Enter to start inspection",
                    theme.text_dim(),
                )));
            }
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Inspections ({}) ", inspections.len()))
                .borders(Borders::ALL)
                .border_style(theme.border_focused()),
        )
        .highlight_style(theme.highlight())
        .highlight_symbol("▌ ");

    f.render_stateful_widget(list, area, state);
}
