//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `BREEZEWAY_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final `TrainerConfig` (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return a `ConfigError` naming the variable.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_SKIP_WALKTHROUGH, ENV_START_VIEW, ENV_THEME, ENV_TICK_MS};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag the way the shell usually spells it.
pub(crate) fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Parse a theme name, listing valid names on failure.
pub(crate) fn parse_theme(raw: &str) -> Result<ColorTheme, ConfigError> {
    ColorTheme::parse(raw).ok_or_else(|| ConfigError::UnknownTheme {
        name: raw.to_string(),
        expected: ColorTheme::ALL
            .iter()
            .map(|theme| theme.id())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(view) = env_var_or_none(ENV_START_VIEW) {
        loader.set_start_view(Some(view));
    }
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        loader.set_theme(Some(parse_theme(&theme)?));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_WALKTHROUGH) {
        loader.set_skip_walkthrough(Some(parse_bool(ENV_SKIP_WALKTHROUGH, &skip)?));
    }
    if let Some(tick) = env_var_or_none(ENV_TICK_MS) {
        let millis: u64 = tick.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TICK_MS.to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.set_tick_ms(Some(millis));
    }
    Ok(())
}
