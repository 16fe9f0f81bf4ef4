//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with `.env`, environment variable and CLI overrides.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//! - Saving anything. The simulator keeps no state between runs.
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - `load_dotenv()` is called before reading environment variables.

use anyhow::{Context, Result};
use breezeway_config::{ConfigLoader, TrainerConfig};

use crate::cli::Cli;

/// Resolve the run configuration for `cli`.
pub fn load_trainer_config(cli: &Cli) -> Result<TrainerConfig> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid environment configuration")?;

    if let Some(theme) = cli.theme.as_deref() {
        loader = loader
            .with_theme_name(theme)
            .context("Invalid --theme value")?;
    }
    if let Some(view) = &cli.view {
        loader = loader.with_start_view(view.clone());
    }
    // Flags only ever switch features off; leaving them unset keeps the env value.
    if cli.skip_walkthrough {
        loader = loader.with_skip_walkthrough(true);
    }
    if cli.no_mouse {
        loader = loader.with_mouse_enabled(false);
    }

    let config = loader.build().context("Invalid configuration")?;
    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
}
