//! Inspection checklist dialog layout.

use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

use crate::ui::popup::ChecklistState;
use crate::ui::theme::{ThemeExt, helpers};

/// Configuration for rendering the inspection checklist dialog.
pub struct ChecklistRenderConfig<'a> {
    pub title: &'a str,
    pub state: &'a ChecklistState,
    pub theme: &'a Theme,
}

pub fn render_checklist(f: &mut Frame, area: Rect, config: ChecklistRenderConfig) {
    let ChecklistRenderConfig {
        title,
        state,
        theme,
    } = config;

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [summary_area, gauge_area, list_area, notes_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let session = &state.session;
    let percent = session.completion_percent();
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Checklist Progress  ", theme.title()),
            Span::styled(
                format!(
                    "{} of {} items ({}%)",
                    session.completed(),
                    session.total(),
                    percent
                ),
                theme.text(),
            ),
        ])),
        summary_area,
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.progress_filled)
                    .bg(theme.progress_empty),
            )
            .percent(u16::from(percent))
            .label(""),
        gauge_area,
    );

    let mut items = Vec::new();
    let mut selected_row = None;
    let mut position = 0usize;
    for (category, entries) in session.grouped() {
        items.push(ListItem::new(Line::from(Span::styled(
            category.to_string(),
            theme.title(),
        ))));
        for entry in entries {
            if position == state.selected {
                selected_row = Some(items.len());
            }
            position += 1;

            let marker = if entry.checked { "[x] " } else { "[ ] " };
            let text_style = if entry.checked {
                theme.text_dim()
            } else {
                theme.text()
            };
            let mut spans = vec![
                Span::styled(format!("  {marker}"), theme.success()),
                Span::styled(entry.item.clone(), text_style),
            ];
            if entry.requires_photo() {
                spans.push(Span::styled("  [photo required]", theme.info()));
            }
            if entry.has_issue() {
                spans.push(Span::styled("  [issue reported]", theme.error()));
            }
            items.push(ListItem::new(Line::from(spans)));
        }
    }

    let list = List::new(items)
        .highlight_style(helpers::selected_style(theme))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(selected_row);
    f.render_stateful_widget(list, list_area, &mut list_state);

    let notes_box = Block::default()
        .title(" Additional Notes ")
        .borders(Borders::ALL)
        .border_style(if state.editing_notes {
            theme.border_focused()
        } else {
            theme.border()
        });
    let notes_inner = notes_box.inner(notes_area);
    let notes_style = if state.notes.is_empty() {
        theme.text_dim()
    } else {
        theme.text()
    };
    f.render_widget(
        Paragraph::new(Span::styled(state.notes.display_text().to_string(), notes_style))
            .block(notes_box),
        notes_area,
    );
    if state.editing_notes {
        let x = notes_inner.x + state.notes.cursor() as u16;
        f.set_cursor_position(Position::new(
            x.min(notes_inner.right().saturating_sub(1)),
            notes_inner.y,
        ));
    }

    let footer = Line::from(vec![
        Span::styled(" Space ", helpers::secondary_button_style(theme)),
        Span::styled(" Toggle  ", theme.text_dim()),
        Span::styled(" n ", helpers::secondary_button_style(theme)),
        Span::styled(" Notes  ", theme.text_dim()),
        Span::styled(" s ", helpers::secondary_button_style(theme)),
        Span::styled(" Save & Continue  ", theme.text_dim()),
        Span::styled(" Enter ", helpers::finish_button_style(theme)),
        Span::styled(" Complete Inspection  ", theme.text_dim()),
        Span::styled(" Esc ", helpers::secondary_button_style(theme)),
        Span::styled(" Close", theme.text_dim()),
    ]);
    f.render_widget(Paragraph::new(footer), footer_area);
}
