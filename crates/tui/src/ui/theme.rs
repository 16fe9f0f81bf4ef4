//! TUI-specific theme helpers and style builders.
//!
//! Extends `breezeway_config::Theme` with helpers for building ratatui
//! `Style` values, and maps catalog statuses onto badge styles.

use breezeway_catalog::{
    ActivityStatus, InspectionStatus, Priority, PropertyStatus, StatTone, TaskStatus,
};
use breezeway_config::Theme;
use ratatui::style::{Modifier, Style};

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    /// Title style (accent + bold).
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    /// Highlight/selection style.
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    fn table_header(&self) -> Style;
    /// "Try it:" call-to-action box.
    fn call_to_action(&self) -> Style;
    /// Badge style for a task status.
    fn task_status(&self, status: TaskStatus) -> Style;
    /// Badge style for a priority. High is red, medium yellow, low gray.
    fn priority(&self, priority: Priority) -> Style;
    fn inspection_status(&self, status: InspectionStatus) -> Style;
    /// Green for available, blue for occupied, yellow for maintenance.
    fn property_status(&self, status: PropertyStatus) -> Style;
    fn activity_status(&self, status: ActivityStatus) -> Style;
    fn stat_tone(&self, tone: StatTone) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn call_to_action(&self) -> Style {
        Style::default().fg(self.call_to_action)
    }

    fn task_status(&self, status: TaskStatus) -> Style {
        match status {
            TaskStatus::Pending => self.warning(),
            TaskStatus::InProgress => self.info(),
            TaskStatus::Completed => self.success(),
            TaskStatus::Overdue => self.error(),
        }
    }

    fn priority(&self, priority: Priority) -> Style {
        match priority {
            Priority::High => self.error(),
            Priority::Medium => self.warning(),
            Priority::Low => self.disabled(),
        }
    }

    fn inspection_status(&self, status: InspectionStatus) -> Style {
        match status {
            InspectionStatus::Pending => self.disabled(),
            InspectionStatus::InProgress => self.info(),
            InspectionStatus::Completed => self.success(),
        }
    }

    fn property_status(&self, status: PropertyStatus) -> Style {
        match status {
            PropertyStatus::Available => self.success(),
            PropertyStatus::Occupied => self.info(),
            PropertyStatus::Maintenance => self.warning(),
        }
    }

    fn activity_status(&self, status: ActivityStatus) -> Style {
        match status {
            ActivityStatus::Completed => self.success(),
            ActivityStatus::InProgress => self.info(),
            ActivityStatus::Pending => self.warning(),
            ActivityStatus::Assigned => self.text_dim(),
        }
    }

    fn stat_tone(&self, tone: StatTone) -> Style {
        let style = match tone {
            StatTone::Info => self.info(),
            StatTone::Success => self.success(),
            StatTone::Danger => self.error(),
            StatTone::Accent => Style::default().fg(self.accent),
        };
        style.add_modifier(Modifier::BOLD)
    }
}

/// Helper functions for common style patterns.
pub mod helpers {
    use super::*;

    /// Create a style for selected items in a list.
    pub fn selected_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Create a primary action button style.
    pub fn primary_button_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Create the finishing button style ("Start Practicing").
    pub fn finish_button_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.background)
            .bg(theme.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Create a secondary button style.
    pub fn secondary_button_style(theme: &Theme) -> Style {
        Style::default().fg(theme.text).bg(theme.highlight_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breezeway_config::ColorTheme;

    #[test]
    fn test_theme_ext_title() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let style = theme.title();
        assert_eq!(style.fg, Some(theme.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_theme_ext_table_header() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let style = theme.table_header();
        assert_eq!(style.fg, Some(theme.table_header_fg));
        assert_eq!(style.bg, Some(theme.table_header_bg));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_priority_colors() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        assert_eq!(theme.priority(Priority::High).fg, Some(theme.error));
        assert_eq!(theme.priority(Priority::Medium).fg, Some(theme.warning));
        assert_eq!(theme.priority(Priority::Low).fg, Some(theme.disabled));
    }

    #[test]
    fn test_property_status_colors() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        assert_eq!(
            theme.property_status(PropertyStatus::Available).fg,
            Some(theme.success)
        );
        assert_eq!(
            theme.property_status(PropertyStatus::Occupied).fg,
            Some(theme.info)
        );
        assert_eq!(
            theme.property_status(PropertyStatus::Maintenance).fg,
            Some(theme.warning)
        );
    }

    #[test]
    fn test_overdue_tasks_use_error_color() {
        let theme = Theme::from_color_theme(ColorTheme::Dark);
        assert_eq!(theme.task_status(TaskStatus::Overdue).fg, Some(theme.error));
    }

    #[test]
    fn test_button_styles() {
        let theme = Theme::from_color_theme(ColorTheme::Default);

        let primary = helpers::primary_button_style(&theme);
        assert_eq!(primary.fg, Some(theme.background));
        assert_eq!(primary.bg, Some(theme.accent));

        let finish = helpers::finish_button_style(&theme);
        assert_eq!(finish.bg, Some(theme.success));

        let secondary = helpers::secondary_button_style(&theme);
        assert_eq!(secondary.bg, Some(theme.highlight_bg));
    }

    #[test]
    fn test_theme_ext_all_themes() {
        for color_theme in ColorTheme::ALL {
            let theme = Theme::from_color_theme(color_theme);
            let _ = theme.text();
            let _ = theme.text_dim();
            let _ = theme.border();
            let _ = theme.border_focused();
            let _ = theme.highlight();
            let _ = theme.call_to_action();
            let _ = helpers::selected_style(&theme);
        }
    }
}
