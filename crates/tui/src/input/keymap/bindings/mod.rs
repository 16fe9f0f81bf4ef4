//! Keybinding definitions grouped by area.
//!
//! Responsibilities:
//! - Provide ordered keybinding groups for the keymap resolver.
//!
//! Does NOT handle:
//! - Resolving input events into Actions.
//! - Rendering help or documentation content.
//!
//! Invariants:
//! - Binding order is stable for deterministic help/docs output.

mod dialogs;
mod global;
mod screens;
mod walkthrough;

use crossterm::event::{KeyCode, KeyModifiers};

use super::{BindingScope, Keybinding, Matcher, Section};
use crate::action::Action;

pub(super) fn all() -> Vec<Keybinding> {
    let mut bindings = Vec::new();
    bindings.extend(global::bindings());
    bindings.extend(walkthrough::bindings());
    bindings.extend(screens::bindings());
    bindings.extend(dialogs::bindings());
    bindings
}

/// A binding the resolver acts on.
fn bind(
    section: Section,
    keys: &'static str,
    description: &'static str,
    scope: BindingScope,
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
) -> Keybinding {
    Keybinding {
        section,
        keys,
        description,
        scope,
        matcher: Some(Matcher::Key { code, modifiers }),
        action: Some(action),
        handles_input: true,
    }
}

/// A binding listed in help and docs but handled elsewhere.
fn doc(
    section: Section,
    keys: &'static str,
    description: &'static str,
    scope: BindingScope,
) -> Keybinding {
    Keybinding {
        section,
        keys,
        description,
        scope,
        matcher: None,
        action: None,
        handles_input: false,
    }
}
