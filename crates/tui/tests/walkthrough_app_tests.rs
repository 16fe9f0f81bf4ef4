//! App-level walkthrough integration tests
//!
//! Tests for the overlay as driven through key input: stepping, closing,
//! reopening, and following the active view.

mod helpers;

use breezeway_tui::action::Action;
use breezeway_tui::app::CurrentScreen;
use helpers::*;

#[test]
fn test_shown_on_start_at_step_one() {
    let app = app_with_walkthrough();
    let state = app.walkthrough.as_ref().unwrap();
    assert_eq!(state.view(), CurrentScreen::Dashboard);
    assert_eq!(state.step_number(), 1);
    assert_eq!(state.current_step().title, "Welcome to Breezeway Training!");
}

#[test]
fn test_skip_walkthrough_starts_hidden() {
    let app = app_without_walkthrough();
    assert!(app.walkthrough.is_none());
}

#[test]
fn test_arrow_and_vim_keys_step() {
    let mut app = app_with_walkthrough();
    press(&mut app, right_key());
    press(&mut app, key('l'));
    assert_eq!(app.walkthrough.as_ref().unwrap().current_index(), 2);

    press(&mut app, left_key());
    assert_eq!(app.walkthrough.as_ref().unwrap().current_index(), 1);
    press(&mut app, key('h'));
    press(&mut app, key('h'));
    assert_eq!(app.walkthrough.as_ref().unwrap().current_index(), 0);
}

#[test]
fn test_right_arrow_does_not_finish_on_last_step() {
    let mut app = app_with_walkthrough();
    for _ in 0..10 {
        press(&mut app, right_key());
    }
    let state = app.walkthrough.as_ref().unwrap();
    assert!(state.is_complete());
    assert_eq!(state.current_index(), 3);
}

#[test]
fn test_enter_on_last_step_closes() {
    let mut app = app_with_walkthrough();
    for _ in 0..3 {
        press(&mut app, enter_key());
    }
    assert!(app.walkthrough.as_ref().unwrap().is_complete());

    press(&mut app, enter_key());
    assert!(app.walkthrough.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_escape_and_x_close() {
    let mut app = app_with_walkthrough();
    press(&mut app, esc_key());
    assert!(app.walkthrough.is_none());

    press(&mut app, key('t'));
    assert!(app.walkthrough.is_some());
    press(&mut app, key('x'));
    assert!(app.walkthrough.is_none());
}

#[test]
fn test_close_then_reopen_restarts_at_step_one() {
    let mut app = app_with_walkthrough();
    press(&mut app, right_key());
    press(&mut app, right_key());
    press(&mut app, esc_key());

    press(&mut app, key('t'));
    let state = app.walkthrough.as_ref().unwrap();
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.view(), CurrentScreen::Dashboard);
}

#[test]
fn test_view_switch_while_open_resets_to_new_sequence() {
    let mut app = app_with_walkthrough();
    press(&mut app, right_key());
    press(&mut app, right_key());

    press(&mut app, key('3'));
    assert_eq!(app.current_screen, CurrentScreen::Inspections);
    let state = app.walkthrough.as_ref().unwrap();
    assert_eq!(state.view(), CurrentScreen::Inspections);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.len(), 5);
    assert_eq!(state.current_step().title, "Property Inspections");

    press(&mut app, tab_key());
    assert_eq!(
        app.walkthrough.as_ref().unwrap().view(),
        CurrentScreen::Properties
    );
    press(&mut app, back_tab_key());
    assert_eq!(
        app.walkthrough.as_ref().unwrap().view(),
        CurrentScreen::Inspections
    );
}

#[test]
fn test_view_switch_while_hidden_creates_no_engine() {
    let mut app = app_without_walkthrough();
    press(&mut app, key('2'));
    press(&mut app, tab_key());
    assert_eq!(app.current_screen, CurrentScreen::Inspections);
    assert!(app.walkthrough.is_none());
}

#[test]
fn test_reopen_uses_current_view() {
    let mut app = app_without_walkthrough();
    press(&mut app, key('4'));
    press(&mut app, key('t'));
    let state = app.walkthrough.as_ref().unwrap();
    assert_eq!(state.view(), CurrentScreen::Properties);
    assert_eq!(state.current_step().title, "Property Management");
}

#[test]
fn test_tasks_progress_reaches_one() {
    let mut app = app_without_walkthrough();
    press(&mut app, key('2'));
    press(&mut app, key('t'));
    for _ in 0..3 {
        press(&mut app, right_key());
    }
    let state = app.walkthrough.as_ref().unwrap();
    assert_eq!(state.current_index(), 3);
    assert!((state.progress() - 0.8).abs() < 1e-9);

    press(&mut app, right_key());
    let state = app.walkthrough.as_ref().unwrap();
    assert_eq!(state.current_index(), 4);
    assert!((state.progress() - 1.0).abs() < 1e-9);
    assert!(state.is_complete());
}

#[test]
fn test_overlay_blocks_view_shortcuts() {
    let mut app = app_with_walkthrough();
    press(&mut app, key('2'));
    press(&mut app, key('/'));
    press(&mut app, key('f'));
    assert!(!app.tasks.searching);
    assert_eq!(app.tasks.filter, breezeway_catalog::StatusFilter::All);
    assert!(app.popup.is_none());
}

#[test]
fn test_quit_works_with_overlay_open() {
    let mut app = app_with_walkthrough();
    press(&mut app, key('q'));
    assert!(app.should_quit);

    let mut app = app_with_walkthrough();
    press(&mut app, ctrl_key('c'));
    assert!(app.should_quit);
}

#[test]
fn test_opening_walkthrough_closes_dialogs() {
    let mut app = app_without_walkthrough();
    press(&mut app, key('2'));
    press(&mut app, enter_key());
    assert!(app.popup.is_some());

    app.update(Action::OpenWalkthrough);
    assert!(app.popup.is_none());
    assert!(app.walkthrough.is_some());
}
