//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test `BREEZEWAY_*` variables and their error reporting.
//! - Test handling of empty and whitespace-only environment variables.
//! - Test that builder overrides win over the environment.

use serial_test::serial;
use std::time::Duration;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::ColorTheme;

#[test]
#[serial]
fn test_env_sets_every_field() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("BREEZEWAY_START_VIEW", Some("tasks")),
            ("BREEZEWAY_THEME", Some("high-contrast")),
            ("BREEZEWAY_SKIP_WALKTHROUGH", Some("true")),
            ("BREEZEWAY_TICK_MS", Some("500")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.start_view.as_deref(), Some("tasks"));
            assert_eq!(config.theme, ColorTheme::HighContrast);
            assert!(!config.show_walkthrough);
            assert_eq!(config.tick_interval, Duration::from_millis(500));
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("BREEZEWAY_START_VIEW", Some("")),
            ("BREEZEWAY_THEME", Some("   ")),
            ("BREEZEWAY_SKIP_WALKTHROUGH", Some("")),
            ("BREEZEWAY_TICK_MS", Some("  ")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert!(config.start_view.is_none());
            assert_eq!(config.theme, ColorTheme::Default);
            assert!(config.show_walkthrough);
            assert_eq!(config.tick_interval, Duration::from_millis(250));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_win_over_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("BREEZEWAY_START_VIEW", Some("tasks")),
            ("BREEZEWAY_THEME", Some("light")),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_start_view("properties".to_string())
                .with_theme(ColorTheme::Monochrome)
                .build()
                .unwrap();

            assert_eq!(config.start_view.as_deref(), Some("properties"));
            assert_eq!(config.theme, ColorTheme::Monochrome);
        },
    );
}

#[test]
#[serial]
fn test_invalid_skip_walkthrough_names_variable() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("BREEZEWAY_SKIP_WALKTHROUGH", Some("sometimes"), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, .. } => {
                assert_eq!(var, "BREEZEWAY_SKIP_WALKTHROUGH");
            }
            other => panic!("expected InvalidValue, got {other}"),
        }
    });
}

#[test]
#[serial]
fn test_non_numeric_tick_is_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("BREEZEWAY_TICK_MS", Some("fast"), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(err.to_string().contains("BREEZEWAY_TICK_MS"));
    });
}

#[test]
#[serial]
fn test_unknown_theme_in_env_is_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("BREEZEWAY_THEME", Some("neon"), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme { .. }));
    });
}
