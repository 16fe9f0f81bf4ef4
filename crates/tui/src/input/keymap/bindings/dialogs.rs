//! Keys inside the practice dialogs.
//!
//! Documentation-only: open dialogs consume keys before the resolver runs.

use super::doc;
use crate::app::CurrentScreen;
use crate::input::keymap::{BindingScope, Keybinding, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    let task = |keys, description| {
        doc(
            Section::TaskDetails,
            keys,
            description,
            BindingScope::Screen(CurrentScreen::Tasks),
        )
    };
    let checklist = |keys, description| {
        doc(
            Section::Checklist,
            keys,
            description,
            BindingScope::Screen(CurrentScreen::Inspections),
        )
    };

    vec![
        task("←/→ or h/l", "Change status"),
        task("1-4", "Set status directly"),
        task("c", "Write a comment"),
        task("Enter", "Add comment"),
        task("s", "Save changes (practice only, not saved)"),
        task("Esc", "Close"),
        checklist("j/k or Up/Down", "Move between items"),
        checklist("Space", "Toggle item"),
        checklist("n", "Edit notes"),
        checklist("s", "Save & continue (practice only)"),
        checklist("Enter", "Complete inspection (practice only)"),
        checklist("Esc", "Close"),
    ]
}
