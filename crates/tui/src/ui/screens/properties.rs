//! Properties screen rendering.
//!
//! Property cards under a search box. Photos are never fetched; every card
//! shows the image placeholder.

use breezeway_catalog::Property;
use breezeway_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::input::components::TextField;
use crate::ui::screens::render_search_box;
use crate::ui::theme::ThemeExt;

/// Rows occupied by one property card, separator included.
pub const CARD_HEIGHT: u16 = 5;
/// Shown in place of a property photo.
pub const IMAGE_PLACEHOLDER: &str = "[ image unavailable ]";
/// Height of the search box.
pub const SEARCH_HEIGHT: u16 = 3;

/// Configuration for rendering the properties screen.
pub struct PropertiesRenderConfig<'a> {
    /// Cards left after search
    pub properties: &'a [&'static Property],
    pub search: &'a TextField,
    pub searching: bool,
    pub state: &'a mut ListState,
    pub theme: &'a Theme,
}

pub fn render_properties(f: &mut Frame, area: Rect, config: PropertiesRenderConfig) {
    let PropertiesRenderConfig {
        properties,
        search,
        searching,
        state,
        theme,
    } = config;

    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)]).areas(area);
    render_search_box(f, search_area, search, searching, theme);

    let block = Block::default()
        .title(format!(" Properties ({}) ", properties.len()))
        .borders(Borders::ALL)
        .border_style(if searching {
            theme.border()
        } else {
            theme.border_focused()
        });

    if properties.is_empty() {
        f.render_widget(
            Paragraph::new("No properties match your search.")
                .style(theme.text_dim())
                .alignment(Alignment::Center)
                .block(block),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = properties
        .iter()
        .map(|property| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(property.name.clone(), theme.title()),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", property.status),
                        theme.property_status(property.status),
                    ),
                ]),
                Line::from(Span::styled(property.address.clone(), theme.text_dim())),
                Line::from(Span::styled(
                    format!(
                        "{} · {} bd · {} guests",
                        property.kind, property.bedrooms, property.capacity
                    ),
                    theme.text(),
                )),
                Line::from(Span::styled(IMAGE_PLACEHOLDER, theme.disabled())),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight())
        .highlight_symbol("▌ ");
    f.render_stateful_widget(list, list_area, state);
}
