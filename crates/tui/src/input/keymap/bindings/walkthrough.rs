//! Walkthrough overlay keys.
//!
//! Documentation-only: the overlay consumes keys before the resolver runs.

use super::doc;
use crate::input::keymap::{BindingScope, Keybinding, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    let entry = |keys, description| doc(Section::Walkthrough, keys, description, BindingScope::Global);

    vec![
        entry("→/l/Enter", "Next step"),
        entry("←/h", "Previous step"),
        entry("Enter (last step)", "Start practicing"),
        entry("Esc/x", "Close walkthrough"),
        entry("Tab/Shift+Tab/1-4", "Switch screen (walkthrough restarts)"),
    ]
}
