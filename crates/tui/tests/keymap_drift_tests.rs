//! Guards against the walkthrough content, help text and keymap drifting apart.

use breezeway_tui::input::help::contextual_help_text;
use breezeway_tui::{ContentTable, CurrentScreen, render_walkthrough_docs};

#[test]
fn every_screen_has_walkthrough_steps() {
    for screen in CurrentScreen::ALL {
        let steps = ContentTable::for_screen(screen);
        assert!(!steps.is_empty(), "{screen:?} has no walkthrough");
        assert!(steps.iter().all(|s| !s.title.is_empty()));
        assert!(steps.iter().all(|s| !s.description.is_empty()));
    }
}

#[test]
fn every_screen_help_mentions_training_keys() {
    for screen in CurrentScreen::ALL {
        let help = contextual_help_text(screen);
        assert!(help.contains("Global:"), "{screen:?} help lacks Global");
        assert!(
            help.contains("Training Walkthrough:"),
            "{screen:?} help lacks walkthrough keys"
        );
    }
}

#[test]
fn screen_help_leads_with_its_own_section() {
    let tasks = contextual_help_text(CurrentScreen::Tasks);
    assert!(tasks.starts_with("Tasks & Work Orders:"));
    let inspections = contextual_help_text(CurrentScreen::Inspections);
    assert!(inspections.starts_with("Inspections:"));
    let dashboard = contextual_help_text(CurrentScreen::Dashboard);
    assert!(dashboard.starts_with("Global:"));
}

#[test]
fn docs_include_every_view_sequence() {
    let docs = render_walkthrough_docs();
    for screen in CurrentScreen::ALL {
        let heading = format!(
            "#### {} ({} steps)",
            screen.title(),
            ContentTable::for_screen(screen).len()
        );
        assert!(docs.contains(&heading), "missing {heading}");
    }
}

#[test]
fn docs_include_every_step_title() {
    let docs = render_walkthrough_docs();
    for screen in CurrentScreen::ALL {
        for step in ContentTable::for_screen(screen) {
            assert!(docs.contains(step.title), "missing step {}", step.title);
        }
    }
}
