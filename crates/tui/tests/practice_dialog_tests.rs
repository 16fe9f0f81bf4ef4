//! End-to-end flows through the practice dialogs.
//!
//! Both dialogs work on throwaway drafts: whatever happens inside them, the
//! sample data seen by the screens is unchanged afterwards.

mod helpers;

use breezeway_catalog::{TaskStatus, catalog};
use breezeway_tui::ui::popup::PopupType;
use breezeway_tui::{App, ToastLevel};
use helpers::*;

fn open_task_details(app: &mut App) {
    press(app, key('2'));
    press(app, enter_key());
}

fn task_state(app: &App) -> &breezeway_tui::ui::popup::TaskDetailsState {
    match &app.popup.as_ref().expect("popup open").kind {
        PopupType::TaskDetails(state) => state,
        other => panic!("expected task details, got {other:?}"),
    }
}

fn checklist_state(app: &App) -> &breezeway_tui::ui::popup::ChecklistState {
    match &app.popup.as_ref().expect("popup open").kind {
        PopupType::InspectionChecklist(state) => state,
        other => panic!("expected checklist, got {other:?}"),
    }
}

#[test]
fn test_task_status_and_comment_are_discarded() {
    let mut app = app_without_walkthrough();
    open_task_details(&mut app);
    assert_eq!(task_state(&app).draft.task_id, 1);
    assert_eq!(task_state(&app).draft.status, TaskStatus::Pending);
    assert_eq!(task_state(&app).draft.comments.len(), 1);

    press(&mut app, right_key());
    assert_eq!(task_state(&app).draft.status, TaskStatus::InProgress);
    press(&mut app, key('3'));
    assert_eq!(task_state(&app).draft.status, TaskStatus::Completed);

    press(&mut app, key('c'));
    type_text(&mut app, "Keys left at front desk");
    press(&mut app, enter_key());
    let state = task_state(&app);
    assert!(!state.composing);
    assert_eq!(state.draft.comments.len(), 2);
    assert_eq!(state.draft.comments[1].author, "Training User");
    assert!(state.comment.is_empty());

    press(&mut app, esc_key());
    assert!(app.popup.is_none());
    assert_eq!(
        catalog().task(1).map(|t| t.status),
        Some(TaskStatus::Pending)
    );

    open_task_details(&mut app);
    assert_eq!(task_state(&app).draft.status, TaskStatus::Pending);
    assert_eq!(task_state(&app).draft.comments.len(), 1);
}

#[test]
fn test_blank_comment_is_not_added() {
    let mut app = app_without_walkthrough();
    open_task_details(&mut app);
    press(&mut app, key('c'));
    type_text(&mut app, "   ");
    press(&mut app, enter_key());
    assert_eq!(task_state(&app).draft.comments.len(), 1);
}

#[test]
fn test_task_save_shows_not_saved_toast() {
    let mut app = app_without_walkthrough();
    open_task_details(&mut app);
    press(&mut app, key('s'));
    assert!(app.popup.is_none());
    let toast = app.toasts.last().expect("toast");
    assert_eq!(toast.level, ToastLevel::Info);
    assert!(toast.message.contains("not saved"));
}

#[test]
fn test_checklist_toggle_notes_and_complete() {
    let mut app = app_without_walkthrough();
    press(&mut app, key('3'));
    press(&mut app, enter_key());

    let state = checklist_state(&app);
    assert_eq!(state.session.total(), 10);
    assert_eq!(state.session.completion_percent(), 20);

    press(&mut app, down_key());
    press(&mut app, down_key());
    press(&mut app, key(' '));
    assert_eq!(checklist_state(&app).session.completion_percent(), 30);

    press(&mut app, key('n'));
    type_text(&mut app, "Smoke detector chirping");
    press(&mut app, esc_key());
    let state = checklist_state(&app);
    assert!(!state.editing_notes);
    assert_eq!(state.session.notes, "Smoke detector chirping");

    press(&mut app, enter_key());
    assert!(app.popup.is_none());
    let toast = app.toasts.last().expect("toast");
    assert_eq!(toast.level, ToastLevel::Success);

    press(&mut app, enter_key());
    assert_eq!(checklist_state(&app).session.completion_percent(), 20);
    assert!(checklist_state(&app).session.notes.is_empty());
}

#[test]
fn test_ctrl_c_quits_from_dialog() {
    let mut app = app_without_walkthrough();
    open_task_details(&mut app);
    press(&mut app, key('c'));
    press(&mut app, ctrl_key('c'));
    assert!(app.should_quit);
}
