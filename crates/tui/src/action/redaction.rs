//! Redaction wrapper for Action logging.
//!
//! Every action is logged at debug level by the main loop. Key presses can
//! carry text the trainee is typing (comments, notes, search terms), so
//! `RedactedAction` hides printable characters and message bodies.
//!
//! # Invariants
//!
//! - Printable key characters never appear in the output.
//! - Toast messages are reduced to their length.
//! - Variants without payloads fall through to default Debug.

use crossterm::event::KeyCode;

use crate::action::variants::Action;

/// Debug wrapper that keeps typed text out of log files.
///
/// # Example
/// ```
/// use breezeway_tui::action::{Action, RedactedAction};
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let action = Action::Input(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));
/// assert_eq!(format!("{:?}", RedactedAction(&action)), "Input(<char>)");
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => match key.code {
                KeyCode::Char(_) => write!(f, "Input(<char>)"),
                code => write!(f, "Input({:?})", code),
            },
            Action::Mouse(mouse) => write!(f, "Mouse({:?})", mouse.kind),
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }
            other => write!(f, "{:?}", other),
        }
    }
}
