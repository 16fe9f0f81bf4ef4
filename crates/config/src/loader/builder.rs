//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build the final `TrainerConfig` from loaded values and defaults.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, so callers apply
//!   `from_env()` first and CLI overrides afterwards.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_UI_TICK_MS, ENV_DOTENV_DISABLED, MAX_UI_TICK_MS, MIN_UI_TICK_MS};
use crate::types::{ColorTheme, TrainerConfig};

/// Configuration loader that builds a `TrainerConfig` from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    start_view: Option<String>,
    skip_walkthrough: Option<bool>,
    mouse_enabled: Option<bool>,
    tick_ms: Option<u64>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("Skipping .env loading (DOTENV_DISABLED set)");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `BREEZEWAY_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the color theme from a user-supplied name.
    pub fn with_theme_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.theme = Some(super::env::parse_theme(name)?);
        Ok(self)
    }

    /// Set the initial view identifier.
    pub fn with_start_view(mut self, view: String) -> Self {
        self.start_view = Some(view);
        self
    }

    /// Hide (or show) the walkthrough overlay on startup.
    pub fn with_skip_walkthrough(mut self, skip: bool) -> Self {
        self.skip_walkthrough = Some(skip);
        self
    }

    /// Enable or disable mouse capture.
    pub fn with_mouse_enabled(mut self, enabled: bool) -> Self {
        self.mouse_enabled = Some(enabled);
        self
    }

    /// Set the UI tick interval in milliseconds.
    pub fn with_tick_ms(mut self, millis: u64) -> Self {
        self.tick_ms = Some(millis);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<TrainerConfig, ConfigError> {
        let tick_ms = self.tick_ms.unwrap_or(DEFAULT_UI_TICK_MS);
        if !(MIN_UI_TICK_MS..=MAX_UI_TICK_MS).contains(&tick_ms) {
            return Err(ConfigError::InvalidTickInterval {
                message: format!(
                    "must be between {MIN_UI_TICK_MS} and {MAX_UI_TICK_MS} ms (got {tick_ms})"
                ),
            });
        }

        Ok(TrainerConfig {
            theme: self.theme.unwrap_or_default(),
            start_view: self.start_view,
            show_walkthrough: !self.skip_walkthrough.unwrap_or(false),
            mouse_enabled: self.mouse_enabled.unwrap_or(true),
            tick_interval: Duration::from_millis(tick_ms),
        })
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_start_view(&mut self, view: Option<String>) {
        self.start_view = view;
    }

    pub(crate) fn set_skip_walkthrough(&mut self, skip: Option<bool>) {
        self.skip_walkthrough = skip;
    }

    pub(crate) fn set_tick_ms(&mut self, millis: Option<u64>) {
        self.tick_ms = millis;
    }
}
