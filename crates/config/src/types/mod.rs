//! Configuration type definitions for the training simulator.
//!
//! Responsibilities:
//! - Define the selectable and runtime theme types.
//! - Define the merged `TrainerConfig` consumed by the TUI.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables or `.env` (see `loader` module).

mod theme;
mod trainer;

pub use theme::{ColorTheme, Theme};
pub use trainer::TrainerConfig;
