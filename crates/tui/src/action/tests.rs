//! Tests for action redaction.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::action::redaction::RedactedAction;
use crate::action::variants::Action;
use crate::app::CurrentScreen;
use crate::ui::ToastLevel;

fn redacted_debug(action: &Action) -> String {
    format!("{:?}", RedactedAction(action))
}

#[test]
fn test_redact_typed_characters() {
    let action = Action::Input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
    let output = redacted_debug(&action);
    assert_eq!(output, "Input(<char>)");
}

#[test]
fn test_named_keys_are_visible() {
    let action = Action::Input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(redacted_debug(&action), "Input(Enter)");
}

#[test]
fn test_redact_notify_message() {
    let action = Action::Notify(ToastLevel::Info, "Guest code 4412".to_string());
    let output = redacted_debug(&action);
    assert!(!output.contains("4412"));
    assert!(output.contains("15 chars"));
    assert!(output.contains("Info"));
}

#[test]
fn test_mouse_shows_only_kind() {
    let action = Action::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 10,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    let output = redacted_debug(&action);
    assert!(output.starts_with("Mouse(Down(Left))"));
    assert!(!output.contains("column"));
}

#[test]
fn test_simple_variants_use_default_debug() {
    assert_eq!(redacted_debug(&Action::WalkthroughNext), "WalkthroughNext");
    assert_eq!(
        redacted_debug(&Action::SwitchToScreen(CurrentScreen::Tasks)),
        "SwitchToScreen(Tasks)"
    );
}
