//! Global keybindings, active on every screen.
//!
//! Invariants:
//! - Screen switching keys stay global so they keep working while the
//!   walkthrough overlay is open.

use crossterm::event::{KeyCode, KeyModifiers};

use super::bind;
use crate::action::Action;
use crate::app::CurrentScreen;
use crate::input::keymap::{BindingScope, Keybinding, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    let global = |keys, description, code, modifiers, action| {
        bind(
            Section::Global,
            keys,
            description,
            BindingScope::Global,
            code,
            modifiers,
            action,
        )
    };
    let none = KeyModifiers::NONE;

    vec![
        global("q", "Quit", KeyCode::Char('q'), none, Action::Quit),
        global(
            "Ctrl+c",
            "Quit",
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            Action::Quit,
        ),
        global("?", "Help", KeyCode::Char('?'), none, Action::OpenHelpPopup),
        global("Tab", "Next screen", KeyCode::Tab, none, Action::NextScreen),
        global(
            "Shift+Tab",
            "Previous screen",
            KeyCode::BackTab,
            none,
            Action::PreviousScreen,
        ),
        global(
            "1",
            "Go to Dashboard",
            KeyCode::Char('1'),
            none,
            Action::SwitchToScreen(CurrentScreen::Dashboard),
        ),
        global(
            "2",
            "Go to Tasks & Work Orders",
            KeyCode::Char('2'),
            none,
            Action::SwitchToScreen(CurrentScreen::Tasks),
        ),
        global(
            "3",
            "Go to Inspections",
            KeyCode::Char('3'),
            none,
            Action::SwitchToScreen(CurrentScreen::Inspections),
        ),
        global(
            "4",
            "Go to Properties",
            KeyCode::Char('4'),
            none,
            Action::SwitchToScreen(CurrentScreen::Properties),
        ),
        global(
            "t",
            "Open training walkthrough",
            KeyCode::Char('t'),
            none,
            Action::OpenWalkthrough,
        ),
        global("T", "Cycle color theme", KeyCode::Char('T'), none, Action::CycleTheme),
    ]
}
