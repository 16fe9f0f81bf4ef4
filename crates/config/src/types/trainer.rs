//! Resolved runtime settings for a training session.
//!
//! Responsibilities:
//! - Define `TrainerConfig`, the fully merged result of defaults, env and CLI overrides.
//! - Provide duration serialization so the config can be logged as JSON.
//!
//! Does NOT handle:
//! - Loading or precedence rules (see `loader` module).
//! - Mapping `start_view` to a concrete screen (the TUI owns view identifiers).
//!
//! Invariants:
//! - `tick_interval` is always within `MIN_UI_TICK_MS..=MAX_UI_TICK_MS`.
//! - `start_view` is kept as the raw identifier; unknown values fall back to dashboard downstream.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::DEFAULT_UI_TICK_MS;
use crate::types::ColorTheme;

/// Module for serializing Duration as milliseconds (integer).
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Settings for one run of the training simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Selected color theme.
    pub theme: ColorTheme,
    /// View identifier to open first (e.g. "tasks"). `None` means dashboard.
    pub start_view: Option<String>,
    /// Whether the walkthrough overlay is visible when the app starts.
    pub show_walkthrough: bool,
    /// Whether mouse capture is enabled.
    pub mouse_enabled: bool,
    /// UI tick interval (serialized as milliseconds).
    #[serde(with = "duration_millis")]
    pub tick_interval: Duration,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::Default,
            start_view: None,
            show_walkthrough: true,
            mouse_enabled: true,
            tick_interval: Duration::from_millis(DEFAULT_UI_TICK_MS),
        }
    }
}
