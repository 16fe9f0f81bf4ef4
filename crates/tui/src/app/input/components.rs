//! Single-line text entry built on tui-input.
//!
//! Used for the search boxes, the comment composer, and inspection notes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Editable text with cursor handling and an optional placeholder.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    input: Input,
    placeholder: Option<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: Some(placeholder.into()),
        }
    }

    /// Apply an editing key. Returns `true` if the value changed.
    ///
    /// Keys that are not editing keys (Enter, Esc, Tab) are left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.input.value().to_string();

        let request = if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
                KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
                KeyCode::Delete => Some(InputRequest::DeleteNextChar),
                KeyCode::Left => Some(InputRequest::GoToPrevChar),
                KeyCode::Right => Some(InputRequest::GoToNextChar),
                KeyCode::Home => Some(InputRequest::GoToStart),
                KeyCode::End => Some(InputRequest::GoToEnd),
                _ => None,
            }
        };

        if let Some(request) = request {
            self.input.handle(request);
        }
        self.input.value() != before
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Text to draw: the value, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.is_empty() {
            self.placeholder().unwrap_or("")
        } else {
            self.value()
        }
    }
}

impl PartialEq for TextField {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
            && self.cursor() == other.cursor()
            && self.placeholder == other.placeholder
    }
}

impl Eq for TextField {}
