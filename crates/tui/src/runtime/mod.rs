//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading from CLI, environment and `.env`
//! - The terminal event reader task
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `breezeway_tui::app` and `breezeway_tui::ui`).
//! - Walkthrough content or catalog data.
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Every state transition happens on the main loop; spawned tasks only send Actions.

pub mod config;
pub mod events;
pub mod terminal;
