//! Walkthrough overlay rendering.
//!
//! Responsibilities:
//! - Draw the current step over the active view: step counter, progress
//!   bar, badge, body, optional "Try it:" box, controls and key hint.
//! - Expose the overlay geometry so mouse clicks hit the drawn controls.
//!
//! Does NOT handle:
//! - Does NOT change walkthrough state (see app/actions/walkthrough.rs)
//! - Does NOT decide whether the overlay is visible
//!
//! Invariants:
//! - `OverlayLayout::new` is the only source of geometry for both drawing
//!   and hit-testing.
//! - The last step shows a check mark instead of a number and a finish
//!   control instead of "Next".

use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use crate::ui::theme::{ThemeExt, helpers};
use crate::walkthrough::WalkthroughState;

const OVERLAY_WIDTH_PERCENT: u16 = 64;
const OVERLAY_MIN_WIDTH: u16 = 50;
const OVERLAY_HEIGHT: u16 = 18;
const PREVIOUS_LABEL: &str = "◀ Previous";
const NEXT_LABEL: &str = "Next ▶";
const FINISH_LABEL: &str = "Start Practicing ✓";
const CONTROL_WIDTH: u16 = 20;

/// Key hint shown under the overlay controls for the current position.
pub fn key_hint(state: &WalkthroughState) -> &'static str {
    if state.len() <= 1 {
        "Enter to start practicing | Esc to close"
    } else if state.is_at_start() {
        "→/Enter for next step | Esc to close"
    } else if state.is_complete() {
        "Enter to start practicing | ← to go back | Esc to close"
    } else {
        "→/Enter for next step | ← to go back | Esc to close"
    }
}

/// Geometry of the overlay for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Outer bordered box.
    pub area: Rect,
    /// Close marker in the top border.
    pub close: Rect,
    pub counter: Rect,
    pub progress: Rect,
    pub body: Rect,
    /// Zero height when the step has no call-to-action.
    pub call_to_action: Rect,
    pub previous: Rect,
    pub dots: Rect,
    pub next: Rect,
    pub hint: Rect,
}

impl OverlayLayout {
    pub fn new(frame: Rect, state: &WalkthroughState) -> Self {
        let scaled = u32::from(frame.width) * u32::from(OVERLAY_WIDTH_PERCENT) / 100;
        let width = u16::try_from(scaled)
            .unwrap_or(frame.width)
            .max(OVERLAY_MIN_WIDTH)
            .min(frame.width);
        let height = OVERLAY_HEIGHT.min(frame.height);
        let area = Rect::new(
            frame.x + (frame.width - width) / 2,
            frame.y + (frame.height - height) / 2,
            width,
            height,
        );
        // " x " sits just left of the top-right corner.
        let close = Rect::new(
            area.right().saturating_sub(4),
            area.y,
            3.min(area.width),
            1.min(area.height),
        );

        let inner = Block::default().borders(Borders::ALL).inner(area);
        let cta_height = if state.current_step().action.is_some() { 3 } else { 0 };
        let [counter, progress, _, body, call_to_action, controls, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(cta_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [previous, dots, next] = Layout::horizontal([
            Constraint::Length(CONTROL_WIDTH),
            Constraint::Min(0),
            Constraint::Length(CONTROL_WIDTH),
        ])
        .areas(controls);

        Self {
            area,
            close,
            counter,
            progress,
            body,
            call_to_action,
            previous,
            dots,
            next,
            hint,
        }
    }
}

/// Configuration for rendering the walkthrough overlay.
pub struct WalkthroughRenderConfig<'a> {
    pub state: &'a WalkthroughState,
    pub theme: &'a Theme,
}

pub fn render_walkthrough(f: &mut Frame, config: WalkthroughRenderConfig) {
    let WalkthroughRenderConfig { state, theme } = config;
    let layout = OverlayLayout::new(f.area(), state);
    let step = state.current_step();

    f.render_widget(Clear, layout.area);
    let block = Block::default()
        .title(Line::from(Span::styled(" Training Mode ", theme.title())))
        .title(Line::from(Span::styled(" x ", theme.text_dim())).right_aligned())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    f.render_widget(block, layout.area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Step {} of {}", state.step_number(), state.len()),
                theme.text_dim(),
            ),
            Span::styled(
                format!("  ·  {}", state.view().title()),
                theme.text_dim(),
            ),
        ])),
        layout.counter,
    );

    f.render_widget(
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.progress_filled)
                    .bg(theme.progress_empty),
            )
            .ratio(state.progress())
            .label(format!("{}%", state.progress_percent())),
        layout.progress,
    );

    let badge = if state.is_complete() {
        Span::styled(" ✓ ", helpers::finish_button_style(theme))
    } else {
        Span::styled(
            format!(" {} ", state.step_number()),
            helpers::primary_button_style(theme),
        )
    };
    let body = vec![
        Line::from(vec![badge, Span::raw(" "), Span::styled(step.title, theme.title())]),
        Line::default(),
        Line::from(Span::styled(step.description, theme.text())),
    ];
    f.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), layout.body);

    if let Some(action) = step.action {
        let cta = Paragraph::new(Line::from(vec![
            Span::styled("Try it: ", theme.call_to_action().add_modifier(Modifier::BOLD)),
            Span::styled(action, theme.text()),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.call_to_action()),
        );
        f.render_widget(cta, layout.call_to_action);
    }

    let previous_style = if state.is_at_start() {
        theme.disabled()
    } else {
        helpers::secondary_button_style(theme)
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {PREVIOUS_LABEL} "), previous_style)),
        layout.previous,
    );

    let dots: Vec<Span> = (0..state.len())
        .map(|i| {
            if i == state.current_index() {
                Span::styled("● ", Style::default().fg(theme.step_active))
            } else {
                Span::styled("○ ", Style::default().fg(theme.step_inactive))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        layout.dots,
    );

    let (next_label, next_style) = if state.is_complete() {
        (FINISH_LABEL, helpers::finish_button_style(theme))
    } else {
        (NEXT_LABEL, helpers::primary_button_style(theme))
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {next_label} "), next_style))
            .alignment(Alignment::Right),
        layout.next,
    );

    f.render_widget(
        Paragraph::new(Span::styled(key_hint(state), theme.text_dim()))
            .alignment(Alignment::Center),
        layout.hint,
    );
}
