//! Centralized constants for the Breezeway training workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Environment Variables
// =============================================================================

/// Initial view to open (`dashboard`, `tasks`, `inspections`, `properties`).
pub const ENV_START_VIEW: &str = "BREEZEWAY_START_VIEW";

/// Color theme name (see `ColorTheme::parse`).
pub const ENV_THEME: &str = "BREEZEWAY_THEME";

/// When `true`, the walkthrough overlay is hidden on startup.
pub const ENV_SKIP_WALKTHROUGH: &str = "BREEZEWAY_SKIP_WALKTHROUGH";

/// UI tick interval override in milliseconds.
pub const ENV_TICK_MS: &str = "BREEZEWAY_TICK_MS";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Smallest accepted UI tick interval in milliseconds.
pub const MIN_UI_TICK_MS: u64 = 16;

/// Largest accepted UI tick interval in milliseconds.
pub const MAX_UI_TICK_MS: u64 = 5000;

/// Default time-to-live for toast notifications in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 4;

/// Maximum number of toasts kept on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default directory for rolling log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// File name prefix for rolling log files.
pub const LOG_FILE_PREFIX: &str = "breezeway-training.log";
