//! Dashboard screen rendering.
//!
//! Stat cards across the top, recent activity and upcoming tasks below.

use breezeway_catalog::DashboardSummary;
use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Configuration for rendering the dashboard.
pub struct DashboardRenderConfig<'a> {
    pub summary: &'a DashboardSummary,
    pub theme: &'a Theme,
}

pub fn render_dashboard(f: &mut Frame, area: Rect, config: DashboardRenderConfig) {
    let DashboardRenderConfig { summary, theme } = config;

    let [heading_area, cards_area, lists_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Dashboard", theme.title())),
            Line::from(Span::styled(
                "Welcome back! Here's your overview for today.",
                theme.text_dim(),
            )),
        ]),
        heading_area,
    );

    let card_areas = Layout::horizontal(
        summary
            .stats
            .iter()
            .map(|_| Constraint::Ratio(1, summary.stats.len().max(1) as u32)),
    )
    .split(cards_area);
    for (card, card_area) in summary.stats.iter().zip(card_areas.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(card.label.clone(), theme.text_dim())),
            Line::from(Span::styled(
                card.value.to_string(),
                theme.stat_tone(card.tone).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
        f.render_widget(widget, *card_area);
    }

    let [activity_area, upcoming_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(lists_area);

    let activity: Vec<ListItem> = summary
        .recent_activity
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(entry.kind.clone(), theme.text()),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", entry.status), theme.activity_status(entry.status)),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", entry.property, entry.time),
                    theme.text_dim(),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(activity).block(
            Block::default()
                .title(" Recent Activity ")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        ),
        activity_area,
    );

    let upcoming: Vec<ListItem> = summary
        .upcoming_tasks
        .iter()
        .map(|task| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(task.title.clone(), theme.text()),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", task.priority), theme.priority(task.priority)),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", task.property, task.due),
                    theme.text_dim(),
                )),
            ])
        })
        .collect();
    f.render_widget(
        List::new(upcoming).block(
            Block::default()
                .title(" Upcoming Tasks ")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        ),
        upcoming_area,
    );
}
