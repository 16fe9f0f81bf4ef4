//! Centralized keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for keybindings and their descriptions.
//! - Resolve KeyEvents into Actions without mutating App state.
//!
//! Non-responsibilities:
//! - Performing App state mutations or side effects.
//! - Handling text entry, dialogs, or the walkthrough overlay (those stay in
//!   App handlers; their bindings here are documentation-only).
//!
//! Invariants:
//! - Bindings are deterministic and stable for help/docs rendering.
//! - Resolver never mutates App state and returns at most one Action.
//! - Shift is ignored for character keys and BackTab; the character already carries it.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::CurrentScreen;

mod bindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Global,
    Walkthrough,
    Tasks,
    TaskDetails,
    Inspections,
    Checklist,
    Properties,
}

impl Section {
    pub(crate) const ALL: [Section; 7] = [
        Section::Global,
        Section::Walkthrough,
        Section::Tasks,
        Section::TaskDetails,
        Section::Inspections,
        Section::Checklist,
        Section::Properties,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Section::Global => "Global",
            Section::Walkthrough => "Training Walkthrough",
            Section::Tasks => "Tasks & Work Orders",
            Section::TaskDetails => "Task Details",
            Section::Inspections => "Inspections",
            Section::Checklist => "Inspection Checklist",
            Section::Properties => "Properties",
        }
    }

    /// Sections that describe keys usable on `screen`, beyond Global and Walkthrough.
    pub(crate) fn for_screen(screen: CurrentScreen) -> &'static [Section] {
        match screen {
            CurrentScreen::Dashboard => &[],
            CurrentScreen::Tasks => &[Section::Tasks, Section::TaskDetails],
            CurrentScreen::Inspections => &[Section::Inspections, Section::Checklist],
            CurrentScreen::Properties => &[Section::Properties],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingScope {
    Global,
    Screen(CurrentScreen),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

#[derive(Clone)]
pub(crate) struct Keybinding {
    pub(crate) section: Section,
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) scope: BindingScope,
    pub(crate) matcher: Option<Matcher>,
    pub(crate) action: Option<Action>,
    pub(crate) handles_input: bool,
}

fn normalized_modifiers(key: KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers - KeyModifiers::SHIFT,
        _ => key.modifiers,
    }
}

impl Keybinding {
    fn matches(&self, key: KeyEvent, screen: CurrentScreen) -> bool {
        if !self.scope_applies(screen) {
            return false;
        }
        let Some(matcher) = self.matcher else {
            return false;
        };
        match matcher {
            Matcher::Key { code, modifiers } => {
                key.code == code && normalized_modifiers(key) == modifiers
            }
        }
    }

    fn scope_applies(&self, screen: CurrentScreen) -> bool {
        match self.scope {
            BindingScope::Global => true,
            BindingScope::Screen(s) => s == screen,
        }
    }
}

pub(crate) fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

pub(crate) fn resolve_action(screen: CurrentScreen, key: KeyEvent) -> Option<Action> {
    for binding in keybindings() {
        if !binding.handles_input {
            continue;
        }
        if binding.matches(key, screen) {
            return binding.action;
        }
    }
    None
}

/// `(keys, description)` pairs of a section, first occurrence wins.
pub(crate) fn unique_entries(section: Section) -> Vec<(&'static str, &'static str)> {
    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();
    for binding in keybindings() {
        if binding.section != section {
            continue;
        }
        let key = (binding.keys, binding.description);
        if seen.insert(key) {
            entries.push(key);
        }
    }
    entries
}

/// Resolve only global bindings. Used while the walkthrough overlay is open.
pub(crate) fn resolve_global_action(key: KeyEvent) -> Option<Action> {
    keybindings()
        .into_iter()
        .filter(|binding| binding.handles_input && binding.scope == BindingScope::Global)
        .find(|binding| binding.matches(key, CurrentScreen::default()))
        .and_then(|binding| binding.action)
}
