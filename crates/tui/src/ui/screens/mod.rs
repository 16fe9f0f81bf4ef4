//! UI screen rendering modules.
//!
//! One module per top-level view. Each takes a `*RenderConfig` borrow struct
//! so rendering never owns state.

pub mod dashboard;
pub mod inspections;
pub mod properties;
pub mod tasks;

use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::input::components::TextField;
use crate::ui::theme::ThemeExt;

/// Draw a one-line search box. Places the cursor when `focused`.
pub(crate) fn render_search_box(
    f: &mut Frame,
    area: Rect,
    field: &TextField,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .title(if focused { " Search (Esc to finish) " } else { " Search [/] " })
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        });
    let inner = block.inner(area);
    let style = if field.is_empty() {
        theme.text_dim()
    } else {
        theme.text()
    };
    f.render_widget(
        Paragraph::new(Span::styled(field.display_text().to_string(), style)).block(block),
        area,
    );
    if focused && inner.width > 0 {
        let x = inner.x + (field.cursor() as u16).min(inner.width - 1);
        f.set_cursor_position(Position::new(x, inner.y));
    }
}
