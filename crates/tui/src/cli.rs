//! Command-line argument parsing for breezeway-training.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration merging or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `breezeway_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Flags only switch features off; an absent flag defers to the environment.

use breezeway_config::constants::DEFAULT_LOG_DIR;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for breezeway-training.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --view, --theme)
/// 2. Environment variables (e.g., BREEZEWAY_START_VIEW, BREEZEWAY_THEME)
/// 3. `.env` file in the working directory
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "breezeway-training",
    about = "Terminal training simulator for the Breezeway property operations app",
    version,
    after_help = "Examples:\n  breezeway-training\n  breezeway-training --view inspections\n  breezeway-training --theme high_contrast --no-mouse\n  breezeway-training --skip-walkthrough --log-dir var/log/breezeway\n"
)]
pub struct Cli {
    /// View to open first: dashboard, tasks, inspections or properties
    #[arg(long)]
    pub view: Option<String>,

    /// Color theme: default, light, dark, high_contrast or monochrome
    #[arg(long)]
    pub theme: Option<String>,

    /// Start without the training walkthrough (press `t` to open it later)
    #[arg(long)]
    pub skip_walkthrough: bool,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Directory for log files
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}
