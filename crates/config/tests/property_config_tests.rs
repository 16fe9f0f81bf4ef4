//! Property-based tests for configuration parsing and validation.
//!
//! Test coverage:
//! - ColorTheme: parsing is case- and separator-insensitive for every theme
//! - ColorTheme: arbitrary unknown names never parse
//! - ConfigLoader: tick interval validation accepts exactly the documented range
//! - TrainerConfig: JSON serialization keeps every field

use proptest::prelude::*;
use std::time::Duration;

use breezeway_config::constants::{MAX_UI_TICK_MS, MIN_UI_TICK_MS};
use breezeway_config::{ColorTheme, ConfigLoader, TrainerConfig};

fn color_theme_strategy() -> impl Strategy<Value = ColorTheme> {
    prop::sample::select(ColorTheme::ALL.to_vec())
}

/// Randomly re-case a theme id and swap `_` for `-`.
fn spelled_theme_strategy() -> impl Strategy<Value = (ColorTheme, String)> {
    (color_theme_strategy(), any::<u64>(), any::<bool>()).prop_map(|(theme, mask, dashes)| {
        let spelled: String = theme
            .id()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let c = if dashes && c == '_' { '-' } else { c };
                if mask & (1 << (i % 64)) != 0 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        (theme, spelled)
    })
}

fn start_view_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("dashboard".to_string())),
        Just(Some("tasks".to_string())),
        Just(Some("inspections".to_string())),
        Just(Some("properties".to_string())),
        "[a-z]{1,12}".prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_theme_parse_ignores_case_and_separator((theme, spelled) in spelled_theme_strategy()) {
        prop_assert_eq!(ColorTheme::parse(&spelled), Some(theme));
    }

    #[test]
    fn test_unknown_theme_names_never_parse(name in "[a-z]{3,10}") {
        let known = ColorTheme::ALL.iter().any(|theme| theme.id() == name);
        prop_assume!(!known);
        prop_assert_eq!(ColorTheme::parse(&name), None);
    }

    #[test]
    fn test_tick_validation_matches_bounds(millis in 0u64..10_000) {
        let result = ConfigLoader::new().with_tick_ms(millis).build();
        let in_range = (MIN_UI_TICK_MS..=MAX_UI_TICK_MS).contains(&millis);
        prop_assert_eq!(result.is_ok(), in_range);
        if let Ok(config) = result {
            prop_assert_eq!(config.tick_interval, Duration::from_millis(millis));
        }
    }

    #[test]
    fn test_trainer_config_json_keeps_fields(
        theme in color_theme_strategy(),
        start_view in start_view_strategy(),
        show_walkthrough in any::<bool>(),
        mouse_enabled in any::<bool>(),
        millis in MIN_UI_TICK_MS..=MAX_UI_TICK_MS,
    ) {
        let config = TrainerConfig {
            theme,
            start_view,
            show_walkthrough,
            mouse_enabled,
            tick_interval: Duration::from_millis(millis),
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: TrainerConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, config);
    }
}
