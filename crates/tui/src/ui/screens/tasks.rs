//! Tasks & Work Orders screen rendering.
//!
//! Search box and status filter above a task table.

use breezeway_catalog::{StatusFilter, Task};
use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::input::components::TextField;
use crate::ui::screens::render_search_box;
use crate::ui::theme::ThemeExt;

/// Rows below the toolbar before the first task row: table border and header.
pub const TABLE_HEADER_ROWS: u16 = 2;
/// Height of the search/filter toolbar.
pub const TOOLBAR_HEIGHT: u16 = 3;
/// Width of the status filter box at the right of the toolbar.
pub const FILTER_WIDTH: u16 = 22;

/// Configuration for rendering the tasks screen.
pub struct TasksRenderConfig<'a> {
    /// Rows left after search and filter
    pub tasks: &'a [&'static Task],
    pub search: &'a TextField,
    pub searching: bool,
    pub filter: StatusFilter,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
}

pub fn render_tasks(f: &mut Frame, area: Rect, config: TasksRenderConfig) {
    let TasksRenderConfig {
        tasks,
        search,
        searching,
        filter,
        state,
        theme,
    } = config;

    let [toolbar, table_area] =
        Layout::vertical([Constraint::Length(TOOLBAR_HEIGHT), Constraint::Min(0)]).areas(area);
    let [search_area, filter_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(FILTER_WIDTH)]).areas(toolbar);

    render_search_box(f, search_area, search, searching, theme);
    f.render_widget(
        Paragraph::new(Span::styled(filter.label(), theme.text()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Status [f] ")
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            ),
        filter_area,
    );

    let block = Block::default()
        .title(format!(" Tasks & Work Orders ({}) ", tasks.len()))
        .borders(Borders::ALL)
        .border_style(if searching {
            theme.border()
        } else {
            theme.border_focused()
        });

    if tasks.is_empty() {
        f.render_widget(
            Paragraph::new("No tasks match your search.")
                .style(theme.text_dim())
                .alignment(Alignment::Center)
                .block(block),
            table_area,
        );
        return;
    }

    let header_cells = ["Task", "Property", "Assignee", "Status", "Priority", "Due Date"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header()));
    let header = Row::new(header_cells).height(1);

    let rows = tasks.iter().map(|task| {
        Row::new(vec![
            Cell::from(task.title.as_str()),
            Cell::from(task.property.as_str()),
            Cell::from(task.assignee.as_str()),
            Cell::from(task.status.label()).style(theme.task_status(task.status)),
            Cell::from(task.priority.to_string()).style(theme.priority(task.priority)),
            Cell::from(task.due.as_str()),
        ])
        .style(theme.text())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme.highlight())
    .column_spacing(1);

    f.render_stateful_widget(table, table_area, state);
}
