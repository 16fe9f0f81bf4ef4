//! Configuration management for the Breezeway training simulator.
//!
//! This crate provides the theme palette, workspace constants, and a
//! builder-style loader that merges defaults, `.env`, environment variables
//! and command-line overrides into a `TrainerConfig`. Nothing is persisted.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Theme, TrainerConfig};
