//! Modal popup rendering for help and the practice dialogs.
//!
//! This module provides a Builder pattern for constructing popups with
//! customizable titles and content. Popups are rendered as centered modal
//! dialogs overlaid on the main UI.

mod builder;
mod checklist;
mod render;
mod task_details;
mod types;

/// Default popup dimensions as percentages of screen size.
pub const POPUP_WIDTH_PERCENT: u16 = 60;
pub const POPUP_HEIGHT_PERCENT: u16 = 50;

pub use builder::{Popup, PopupBuilder};
pub use render::{centered_rect, render_popup};
pub use types::{ChecklistState, PopupType, TaskDetailsState};
