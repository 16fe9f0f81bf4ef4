//! Task details dialog layout.

use breezeway_catalog::{TaskStatus, catalog};
use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::popup::TaskDetailsState;
use crate::ui::theme::{ThemeExt, helpers};

/// Configuration for rendering the task details dialog.
pub struct TaskDetailsRenderConfig<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub state: &'a TaskDetailsState,
    pub theme: &'a Theme,
}

pub fn render_task_details(f: &mut Frame, area: Rect, config: TaskDetailsRenderConfig) {
    let TaskDetailsRenderConfig {
        title,
        description,
        state,
        theme,
    } = config;

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [body_area, comment_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let Some(task) = catalog().task(state.draft.task_id) else {
        f.render_widget(Paragraph::new("Task not found").style(theme.error()), body_area);
        return;
    };

    let label = |name: &'static str| Span::styled(format!("{name}: "), theme.text_dim());

    let mut lines = vec![
        Line::from(Span::styled(task.title.clone(), theme.title())),
        Line::from(Span::styled(description.to_string(), theme.text())),
        Line::default(),
        Line::from(vec![
            label("Property"),
            Span::styled(task.property.clone(), theme.text()),
            Span::raw("    "),
            label("Assignee"),
            Span::styled(task.assignee.clone(), theme.text()),
        ]),
        Line::from(vec![
            label("Due Date"),
            Span::styled(task.due.clone(), theme.text()),
            Span::raw("    "),
            label("Category"),
            Span::styled(task.category.clone(), theme.text()),
        ]),
        Line::default(),
        Line::from(Span::styled("Update Status", theme.title())),
        status_selector(state.draft.status, theme),
        Line::default(),
        Line::from(Span::styled(
            format!("Comments ({})", state.draft.comments.len()),
            theme.title(),
        )),
    ];

    for comment in &state.draft.comments {
        lines.push(Line::from(vec![
            Span::styled(comment.author.clone(), theme.info()),
            Span::styled(format!(" · {}", comment.time), theme.text_dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", comment.text),
            theme.text(),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        body_area,
    );

    let comment_style = if state.composing {
        theme.border_focused()
    } else {
        theme.border()
    };
    let comment_text = if state.comment.is_empty() {
        Span::styled(state.comment.display_text().to_string(), theme.text_dim())
    } else {
        Span::styled(state.comment.value().to_string(), theme.text())
    };
    let comment_box = Block::default()
        .title(" Add ")
        .borders(Borders::ALL)
        .border_style(comment_style);
    let comment_inner = comment_box.inner(comment_area);
    f.render_widget(Paragraph::new(Line::from(comment_text)).block(comment_box), comment_area);
    if state.composing {
        let x = comment_inner.x + state.comment.cursor() as u16;
        f.set_cursor_position(Position::new(
            x.min(comment_inner.right().saturating_sub(1)),
            comment_inner.y,
        ));
    }

    let footer = if state.composing {
        Line::from(vec![
            Span::styled(" Enter ", helpers::primary_button_style(theme)),
            Span::styled(" Add comment  ", theme.text_dim()),
            Span::styled(" Esc ", helpers::secondary_button_style(theme)),
            Span::styled(" Stop typing", theme.text_dim()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" c ", helpers::secondary_button_style(theme)),
            Span::styled(" Comment  ", theme.text_dim()),
            Span::styled(" s ", helpers::primary_button_style(theme)),
            Span::styled(" Save Changes  ", theme.text_dim()),
            Span::styled(" Esc ", helpers::secondary_button_style(theme)),
            Span::styled(" Close", theme.text_dim()),
        ])
    };
    f.render_widget(Paragraph::new(footer), footer_area);
}

fn status_selector(current: TaskStatus, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(TaskStatus::ALL.len() * 2 + 1);
    for (i, status) in TaskStatus::ALL.into_iter().enumerate() {
        let style = if status == current {
            helpers::selected_style(theme)
        } else {
            theme.task_status(status)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, status.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(←/→)", theme.text_dim()));
    Line::from(spans)
}
