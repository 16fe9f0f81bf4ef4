//! Throwaway edit state for the practice dialogs.
//!
//! Responsibilities:
//! - Track the status and comment edits made in the task details dialog.
//! - Track checklist toggles and notes made in the inspection dialog.
//!
//! Does NOT handle:
//! - Saving. Drafts are dropped when their dialog closes; nothing flows back
//!   into the catalog.
//!
//! Invariants:
//! - A draft never mutates the record it was opened from.
//! - Blank comments are never added.
//! - `completion_percent` is `round(checked / total * 100)` and 0 for an empty checklist.

use crate::models::{ChecklistItem, Comment, Task, TaskStatus};

/// Author recorded on comments added during a practice session.
pub const TRAINING_USER: &str = "Training User";

/// Timestamp label recorded on comments added during a practice session.
pub const JUST_NOW_LABEL: &str = "Just now";

/// Edits made in the task details dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_id: u32,
    pub status: TaskStatus,
    pub comments: Vec<Comment>,
}

impl TaskDraft {
    /// Open a draft on `task` with the seeded comment thread.
    pub fn open(task: &Task, seed_comments: &[Comment]) -> Self {
        Self {
            task_id: task.id,
            status: task.status,
            comments: seed_comments.to_vec(),
        }
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Move the status selector right, wrapping around.
    pub fn next_status(&mut self) {
        let next = (self.status.index() + 1) % TaskStatus::ALL.len();
        self.status = TaskStatus::ALL[next];
    }

    /// Move the status selector left, wrapping around.
    pub fn previous_status(&mut self) {
        let len = TaskStatus::ALL.len();
        let previous = (self.status.index() + len - 1) % len;
        self.status = TaskStatus::ALL[previous];
    }

    /// Append a comment from the training user. Returns `false` for blank input.
    pub fn add_comment(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let id = self.comments.len() as u32 + 1;
        self.comments.push(Comment {
            id,
            author: TRAINING_USER.to_string(),
            text: text.to_string(),
            time: JUST_NOW_LABEL.to_string(),
        });
        true
    }

    /// Whether anything differs from the record and seed thread the draft was opened with.
    pub fn has_changes(&self, original: &Task, seed_comments: &[Comment]) -> bool {
        self.status != original.status || self.comments.len() != seed_comments.len()
    }
}

/// Edits made in the inspection checklist dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSession {
    pub inspection_id: u32,
    pub items: Vec<ChecklistItem>,
    pub notes: String,
}

impl ChecklistSession {
    /// Open a session on an inspection with a fresh copy of the template.
    pub fn open(inspection_id: u32, template: &[ChecklistItem]) -> Self {
        Self {
            inspection_id,
            items: template.to_vec(),
            notes: String::new(),
        }
    }

    /// Flip the checked state of item `id`. Returns `false` if no such item exists.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn completed(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn completion_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        ((self.completed() as f64 / self.total() as f64) * 100.0).round() as u8
    }

    /// Category headings in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Items in display order: grouped by category, categories in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&ChecklistItem>)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let items = self
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .collect();
                (category, items)
            })
            .collect()
    }

    /// Item ids in display order, for cursor navigation.
    pub fn display_order(&self) -> Vec<u32> {
        self.grouped()
            .into_iter()
            .flat_map(|(_, items)| items.into_iter().map(|item| item.id))
            .collect()
    }
}
