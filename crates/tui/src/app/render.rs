//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer)
//! - Dispatch to screen-specific renderers
//! - Stack toasts, popups and the walkthrough overlay in that order
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for ListState/TableState scroll offsets
//!   and the recorded frame area)

use breezeway_catalog::catalog;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::header_layout::{BRAND, HeaderLayout, SEPARATOR, TRAINING_BUTTON, tab_label};
use crate::app::state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::popup::render_popup;
use crate::ui::screens::{dashboard, inspections, properties, tasks};
use crate::ui::theme::ThemeExt;
use crate::ui::toast::render_toasts;
use crate::ui::walkthrough::{WalkthroughRenderConfig, key_hint, render_walkthrough};

/// Key hints shown in the footer when no overlay or search box has focus.
fn footer_hints(screen: CurrentScreen) -> &'static [(&'static str, &'static str)] {
    match screen {
        CurrentScreen::Dashboard => &[],
        CurrentScreen::Tasks => &[
            ("/", "Search"),
            ("f", "Filter"),
            ("j/k", "Move"),
            ("Enter", "Open"),
        ],
        CurrentScreen::Inspections => &[("j/k", "Move"), ("Enter", "Start")],
        CurrentScreen::Properties => &[("/", "Search"), ("j/k", "Move")],
    }
}

const SEARCH_HINT: &str = " Type to search | Enter/Esc:Done | Up/Down:Move ";

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();

        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        self.render_header(f, header_area);
        self.render_content(f, content_area);
        self.render_footer(f, footer_area);

        render_toasts(f, &self.toasts, &self.theme);

        if let Some(popup) = &self.popup {
            render_popup(f, popup, &self.theme, self);
        }

        // The overlay is drawn last so it sits above dialogs and toasts.
        if let Some(state) = &self.walkthrough {
            render_walkthrough(
                f,
                WalkthroughRenderConfig {
                    state,
                    theme: &self.theme,
                },
            );
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let layout = HeaderLayout::calculate(area.width);

        let mut spans = vec![
            Span::styled(BRAND, theme.title()),
            Span::styled(SEPARATOR, theme.border()),
        ];
        for screen in CurrentScreen::ALL {
            let style = if screen == self.current_screen {
                theme.highlight()
            } else {
                theme.text_dim()
            };
            spans.push(Span::styled(tab_label(screen), style));
        }
        if layout.training_visible {
            let gap = layout.training_start.saturating_sub(layout.tabs_end());
            spans.push(Span::raw(" ".repeat(gap as usize)));
            let style = if self.walkthrough_visible() {
                theme.disabled()
            } else {
                theme.call_to_action()
            };
            spans.push(Span::styled(TRAINING_BUTTON, style));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(header, area);
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        match self.current_screen {
            CurrentScreen::Dashboard => dashboard::render_dashboard(
                f,
                area,
                dashboard::DashboardRenderConfig {
                    summary: &catalog().dashboard,
                    theme,
                },
            ),
            CurrentScreen::Tasks => {
                let visible = self.tasks.visible();
                tasks::render_tasks(
                    f,
                    area,
                    tasks::TasksRenderConfig {
                        tasks: &visible,
                        search: &self.tasks.search,
                        searching: self.tasks.searching,
                        filter: self.tasks.filter,
                        state: &mut self.tasks.table,
                        theme,
                    },
                );
            }
            CurrentScreen::Inspections => inspections::render_inspections(
                f,
                area,
                inspections::InspectionsRenderConfig {
                    inspections: &catalog().inspections,
                    state: &mut self.inspections.list,
                    theme,
                },
            ),
            CurrentScreen::Properties => {
                let visible = self.properties.visible();
                properties::render_properties(
                    f,
                    area,
                    properties::PropertiesRenderConfig {
                        properties: &visible,
                        search: &self.properties.search,
                        searching: self.properties.searching,
                        state: &mut self.properties.list,
                        theme,
                    },
                );
            }
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let line = if let Some(state) = &self.walkthrough {
            Line::from(Span::styled(
                format!(" {} ", key_hint(state)),
                theme.text_dim(),
            ))
        } else if self.is_searching() {
            Line::from(Span::styled(SEARCH_HINT, theme.text_dim()))
        } else {
            let mut spans = vec![Span::raw(" Tab:Next Screen | 1-4:Jump ")];
            for (key, desc) in footer_hints(self.current_screen) {
                spans.push(Span::raw("|"));
                spans.push(Span::raw(format!(" {key}:{desc} ")));
            }
            spans.push(Span::raw("|"));
            spans.push(Span::styled(" t:Training ", theme.call_to_action()));
            spans.push(Span::raw("|"));
            spans.push(Span::raw(" ?:Help "));
            spans.push(Span::raw("|"));
            spans.push(Span::styled(" q:Quit ", theme.error()));
            Line::from(spans)
        };

        let footer = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(footer, area);
    }
}
