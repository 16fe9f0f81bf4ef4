//! Theme types for the training simulator.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Parse theme names from CLI flags and environment variables.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the selectable representation; `Theme` is the runtime representation.
//! - Colors are semantically named (error/warn/success/info) so views never hardcode status colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Every selectable theme, in cycle order.
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Identifier accepted by `parse` and used in serialized form.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }

    /// Next theme in the cycle.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }

    /// Parse a theme name, case-insensitively. Accepts `-` or `_` as separators.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|theme| theme.id() == normalized)
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Tables
    pub table_header_fg: Color,
    pub table_header_bg: Color,

    // Walkthrough overlay
    pub progress_filled: Color,
    pub progress_empty: Color,
    pub step_active: Color,
    pub step_inactive: Color,
    pub call_to_action: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,
                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::DarkGray,
                table_header_fg: Color::Cyan,
                table_header_bg: Color::DarkGray,
                progress_filled: Color::Blue,
                progress_empty: Color::DarkGray,
                step_active: Color::Blue,
                step_inactive: Color::DarkGray,
                call_to_action: Color::LightBlue,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,
                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,
                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,
                progress_filled: Color::Blue,
                progress_empty: Color::Gray,
                step_active: Color::Blue,
                step_inactive: Color::Gray,
                call_to_action: Color::Blue,
            },
            ColorTheme::Dark => Self {
                background: Color::Rgb(18, 18, 18),
                text: Color::Rgb(220, 220, 220),
                text_dim: Color::Rgb(140, 140, 140),
                border: Color::Rgb(80, 120, 200),
                title: Color::Rgb(120, 170, 255),
                accent: Color::Rgb(255, 200, 90),
                highlight_fg: Color::Rgb(255, 255, 255),
                highlight_bg: Color::Rgb(50, 60, 80),
                success: Color::Rgb(90, 200, 120),
                warning: Color::Rgb(240, 190, 80),
                error: Color::Rgb(240, 90, 90),
                info: Color::Rgb(120, 170, 255),
                disabled: Color::Rgb(80, 80, 80),
                table_header_fg: Color::Rgb(120, 170, 255),
                table_header_bg: Color::Rgb(35, 35, 45),
                progress_filled: Color::Rgb(37, 99, 235),
                progress_empty: Color::Rgb(60, 60, 60),
                step_active: Color::Rgb(37, 99, 235),
                step_inactive: Color::Rgb(90, 90, 90),
                call_to_action: Color::Rgb(147, 197, 253),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                disabled: Color::Gray,
                table_header_fg: Color::Black,
                table_header_bg: Color::White,
                progress_filled: Color::Yellow,
                progress_empty: Color::Gray,
                step_active: Color::Yellow,
                step_inactive: Color::Gray,
                call_to_action: Color::LightCyan,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Indexed(245),
                border: Color::Indexed(250),
                title: Color::White,
                accent: Color::Indexed(255),
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                success: Color::Indexed(250),
                warning: Color::Indexed(245),
                error: Color::Indexed(255),
                info: Color::Indexed(245),
                disabled: Color::Indexed(238),
                table_header_fg: Color::Black,
                table_header_bg: Color::White,
                progress_filled: Color::White,
                progress_empty: Color::Indexed(238),
                step_active: Color::White,
                step_inactive: Color::Indexed(238),
                call_to_action: Color::Indexed(250),
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Default.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_theme_cycle_visits_every_theme() {
        let mut theme = ColorTheme::Default;
        let mut seen = Vec::new();
        for _ in 0..ColorTheme::ALL.len() {
            seen.push(theme);
            theme = theme.cycle_next();
        }
        assert_eq!(theme, ColorTheme::Default);
        assert_eq!(seen, ColorTheme::ALL.to_vec());
    }

    #[test]
    fn test_parse_accepts_ids_case_and_separator_insensitively() {
        assert_eq!(ColorTheme::parse("dark"), Some(ColorTheme::Dark));
        assert_eq!(ColorTheme::parse(" LIGHT "), Some(ColorTheme::Light));
        assert_eq!(
            ColorTheme::parse("high-contrast"),
            Some(ColorTheme::HighContrast)
        );
        assert_eq!(
            ColorTheme::parse("High_Contrast"),
            Some(ColorTheme::HighContrast)
        );
        assert_eq!(ColorTheme::parse("neon"), None);
        assert_eq!(ColorTheme::parse(""), None);
    }

    #[test]
    fn test_parse_matches_serde_representation() {
        for theme in ColorTheme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.id()));
            assert_eq!(ColorTheme::parse(theme.id()), Some(theme));
        }
    }

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_all_themes_distinguish_progress_and_semantics() {
        for color_theme in ColorTheme::ALL {
            let theme = Theme::from_color_theme(color_theme);
            assert_ne!(theme.background, theme.text, "{color_theme:?}");
            assert_ne!(theme.success, theme.error, "{color_theme:?}");
            assert_ne!(
                theme.progress_filled, theme.progress_empty,
                "{color_theme:?}"
            );
            assert_ne!(theme.step_active, theme.step_inactive, "{color_theme:?}");
        }
    }
}
