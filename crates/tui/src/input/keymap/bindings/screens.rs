//! Keybindings for the list screens.
//!
//! Invariants:
//! - Search-mode keys are handled by the screen's text field; only the key
//!   that enters search mode is resolved here.

use crossterm::event::{KeyCode, KeyModifiers};

use super::{bind, doc};
use crate::action::Action;
use crate::app::CurrentScreen;
use crate::input::keymap::{BindingScope, Keybinding, Section};

/// j/k/Up/Down list movement, shown once in help.
fn list_navigation(section: Section, screen: CurrentScreen) -> Vec<Keybinding> {
    let scope = BindingScope::Screen(screen);
    let none = KeyModifiers::NONE;
    [
        (KeyCode::Char('j'), Action::NavigateDown),
        (KeyCode::Down, Action::NavigateDown),
        (KeyCode::Char('k'), Action::NavigateUp),
        (KeyCode::Up, Action::NavigateUp),
    ]
    .into_iter()
    .map(|(code, action)| {
        bind(
            section,
            "j/k or Up/Down",
            "Move selection",
            scope,
            code,
            none,
            action,
        )
    })
    .collect()
}

fn tasks() -> Vec<Keybinding> {
    use CurrentScreen::Tasks;
    let scope = BindingScope::Screen(Tasks);
    let none = KeyModifiers::NONE;

    let mut bindings = vec![
        bind(
            Section::Tasks,
            "/",
            "Search tasks or properties",
            scope,
            KeyCode::Char('/'),
            none,
            Action::FocusSearch,
        ),
        doc(Section::Tasks, "Enter/Esc", "Leave the search box", scope),
        bind(
            Section::Tasks,
            "f",
            "Cycle status filter",
            scope,
            KeyCode::Char('f'),
            none,
            Action::CycleStatusFilter,
        ),
    ];
    bindings.extend(list_navigation(Section::Tasks, Tasks));
    bindings.push(bind(
        Section::Tasks,
        "Enter",
        "Open task details",
        scope,
        KeyCode::Enter,
        none,
        Action::OpenSelected,
    ));
    bindings
}

fn inspections() -> Vec<Keybinding> {
    use CurrentScreen::Inspections;
    let mut bindings = list_navigation(Section::Inspections, Inspections);
    bindings.push(bind(
        Section::Inspections,
        "Enter",
        "Open inspection checklist",
        BindingScope::Screen(Inspections),
        KeyCode::Enter,
        KeyModifiers::NONE,
        Action::OpenSelected,
    ));
    bindings
}

fn properties() -> Vec<Keybinding> {
    use CurrentScreen::Properties;
    let scope = BindingScope::Screen(Properties);

    let mut bindings = vec![
        bind(
            Section::Properties,
            "/",
            "Search properties",
            scope,
            KeyCode::Char('/'),
            KeyModifiers::NONE,
            Action::FocusSearch,
        ),
        doc(Section::Properties, "Enter/Esc", "Leave the search box", scope),
    ];
    bindings.extend(list_navigation(Section::Properties, Properties));
    bindings
}

pub(super) fn bindings() -> Vec<Keybinding> {
    let mut bindings = tasks();
    bindings.extend(inspections());
    bindings.extend(properties());
    bindings
}
