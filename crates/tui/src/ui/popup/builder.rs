//! Popup struct and builder implementation.
//!
//! This module provides the `Popup` struct and `PopupBuilder` for constructing
//! popup dialogs with customizable titles and content.

use breezeway_catalog::catalog;

use crate::input::help;
use crate::ui::popup::PopupType;

/// A modal popup dialog with title, content, and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// The title displayed in the popup border
    pub title: String,
    /// Body text; for the practice dialogs this is the record's description
    pub content: String,
    /// The kind/type of popup (determines behavior and layout)
    pub kind: PopupType,
}

impl Popup {
    /// Create a new `PopupBuilder` for the given popup type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use breezeway_tui::ui::popup::{Popup, PopupType};
    ///
    /// let popup = Popup::builder(PopupType::Help).build();
    /// assert_eq!(popup.title, "Help");
    /// ```
    pub fn builder(kind: PopupType) -> PopupBuilder {
        PopupBuilder::new(kind)
    }
}

/// Builder for constructing `Popup` instances.
pub struct PopupBuilder {
    kind: PopupType,
    title: Option<String>,
    content: Option<String>,
}

impl PopupBuilder {
    /// Create a new builder for the given popup type.
    pub fn new(kind: PopupType) -> Self {
        Self {
            kind,
            title: None,
            content: None,
        }
    }

    /// Set the popup title.
    ///
    /// If not set, a default title will be used based on the popup type.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the popup content.
    ///
    /// If not set, default content will be used based on the popup type.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Build the `Popup` instance using defaults derived from `PopupType`.
    pub fn build(self) -> Popup {
        let (default_title, default_content) = self.build_defaults();

        Popup {
            title: self.title.unwrap_or(default_title),
            content: self.content.unwrap_or(default_content),
            kind: self.kind,
        }
    }

    fn build_defaults(&self) -> (String, String) {
        match &self.kind {
            PopupType::Help => ("Help".to_string(), help::help_text()),
            PopupType::TaskDetails(state) => {
                let description = catalog()
                    .task(state.draft.task_id)
                    .map(|task| task.description.clone())
                    .unwrap_or_default();
                ("Task Details".to_string(), description)
            }
            PopupType::InspectionChecklist(state) => {
                let title = catalog()
                    .inspection(state.session.inspection_id)
                    .map(|inspection| format!("{} - {}", inspection.kind, inspection.property))
                    .unwrap_or_else(|| "Inspection Checklist".to_string());
                (title, String::new())
            }
        }
    }
}
