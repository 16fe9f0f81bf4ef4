//! Action protocol for the TUI event loop.
//!
//! Actions represent user input, ticks, and state transitions. Input tasks
//! send them through a channel and `App::update` applies them.
//!
//! # Module Structure
//!
//! - `redaction`: Logging wrapper that hides typed text (`RedactedAction`)
//! - `variants`: Action enum definition (`Action`)
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine in `App`)
//! - Terminal event collection (handled by `main`)
//! - UI rendering (handled by the ui module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;

#[cfg(test)]
mod tests;
