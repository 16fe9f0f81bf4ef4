//! Walkthrough engine and content table tests
//!
//! Tests for the walkthrough system that verify:
//! - Content table lookups and the dashboard fallback
//! - Advance/retreat bounds
//! - Progress calculation
//! - View selection resets

use crate::app::CurrentScreen;
use crate::walkthrough::{ContentTable, WalkthroughState};

#[test]
fn test_sequence_lengths_per_view() {
    assert_eq!(ContentTable::lookup("dashboard").len(), 4);
    assert_eq!(ContentTable::lookup("tasks").len(), 5);
    assert_eq!(ContentTable::lookup("inspections").len(), 5);
    assert_eq!(ContentTable::lookup("properties").len(), 5);
}

#[test]
fn test_every_sequence_is_non_empty() {
    for screen in CurrentScreen::ALL {
        assert!(!ContentTable::for_screen(screen).is_empty());
    }
}

#[test]
fn test_unknown_view_falls_back_to_dashboard() {
    let dashboard = ContentTable::lookup("dashboard");
    assert_eq!(ContentTable::lookup("reports"), dashboard);
    assert_eq!(ContentTable::lookup(""), dashboard);
    assert_eq!(ContentTable::lookup("Tasks"), dashboard);
    assert_eq!(dashboard[0].title, "Welcome to Breezeway Training!");
}

#[test]
fn test_lookup_is_stable_across_calls() {
    let first = ContentTable::lookup("inspections");
    let second = ContentTable::lookup("inspections");
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_call_to_action_placement() {
    let dashboard = ContentTable::for_screen(CurrentScreen::Dashboard);
    let with_action: Vec<usize> = dashboard
        .iter()
        .enumerate()
        .filter(|(_, s)| s.action.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(with_action, vec![3]);

    let last = ContentTable::for_screen(CurrentScreen::Properties)
        .last()
        .unwrap();
    assert_eq!(last.title, "Training Complete!");
    assert_eq!(
        last.action,
        Some("Close this training and start practicing!")
    );
}

#[test]
fn test_new_state_starts_at_first_step() {
    let state = WalkthroughState::new(CurrentScreen::Tasks);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.step_number(), 1);
    assert_eq!(state.len(), 5);
    assert!(state.is_at_start());
    assert!(!state.is_complete());
    assert_eq!(state.current_step().title, "Tasks & Work Orders");
}

#[test]
fn test_advance_stops_at_last_step() {
    let mut state = WalkthroughState::new(CurrentScreen::Dashboard);
    assert!(state.advance());
    assert!(state.advance());
    assert!(state.advance());
    assert_eq!(state.current_index(), 3);
    assert!(state.is_complete());

    assert!(!state.advance());
    assert_eq!(state.current_index(), 3);
}

#[test]
fn test_retreat_stops_at_first_step() {
    let mut state = WalkthroughState::new(CurrentScreen::Inspections);
    assert!(!state.retreat());
    assert_eq!(state.current_index(), 0);

    state.advance();
    assert!(state.retreat());
    assert!(state.is_at_start());
}

#[test]
fn test_tasks_progress_scenario() {
    let mut state = WalkthroughState::new(CurrentScreen::Tasks);
    for _ in 0..3 {
        state.advance();
    }
    assert_eq!(state.current_index(), 3);
    assert!((state.progress() - 0.8).abs() < f64::EPSILON);

    state.advance();
    assert_eq!(state.current_index(), 4);
    assert!((state.progress() - 1.0).abs() < f64::EPSILON);
    assert!(state.is_complete());

    state.advance();
    assert_eq!(state.current_index(), 4);
}

#[test]
fn test_progress_percent_rounds() {
    let mut state = WalkthroughState::new(CurrentScreen::Dashboard);
    assert_eq!(state.progress_percent(), 25);
    state.advance();
    assert_eq!(state.progress_percent(), 50);

    let mut tasks = WalkthroughState::new(CurrentScreen::Tasks);
    assert_eq!(tasks.progress_percent(), 20);
    tasks.advance();
    assert_eq!(tasks.progress_percent(), 40);
}

#[test]
fn test_select_view_resets_index() {
    let mut state = WalkthroughState::new(CurrentScreen::Tasks);
    for _ in 0..4 {
        state.advance();
    }
    assert_eq!(state.current_index(), 4);

    state.select_view(CurrentScreen::Inspections);
    assert_eq!(state.view(), CurrentScreen::Inspections);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.len(), 5);
    assert_eq!(state.current_step().title, "Property Inspections");
}

#[test]
fn test_select_same_view_still_resets() {
    let mut state = WalkthroughState::new(CurrentScreen::Properties);
    state.advance();
    state.advance();
    state.select_view(CurrentScreen::Properties);
    assert!(state.is_at_start());
}

#[test]
fn test_markdown_lists_every_view() {
    let docs = crate::walkthrough::render_markdown();
    assert!(docs.starts_with("#### Dashboard (4 steps)"));
    assert!(docs.contains("#### Tasks & Work Orders (5 steps)"));
    assert!(docs.contains("#### Inspections (5 steps)"));
    assert!(docs.contains("#### Properties (5 steps)"));
    assert!(docs.contains("   - Try it: Try searching for a specific property."));
    assert!(!docs.ends_with('\n'));
}
