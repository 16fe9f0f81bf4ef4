//! Task and work order models.
//!
//! # What this module handles:
//! - Task records shown on the Tasks & Work Orders view
//! - Task status and priority vocabularies
//! - Comments attached to a task in the details dialog
//!
//! # What this module does NOT handle:
//! - Searching or filtering tasks (see [`crate::filter`])
//! - Editing a task (see [`crate::practice::TaskDraft`])

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// All statuses in the order the status selector lists them.
    pub const ALL: [TaskStatus; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Overdue,
    ];

    /// Wire identifier (`in-progress`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Badge label (`in progress`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Title-cased label used by the status filter.
    pub fn title(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    /// Position in [`TaskStatus::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Overdue => 3,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// A task or work order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// Display name of the property the task belongs to.
    pub property: String,
    pub assignee: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Human-readable due label ("Today, 2:00 PM").
    #[serde(rename = "dueDate")]
    pub due: String,
    pub category: String,
    pub description: String,
}

/// A comment in the task details dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    #[serde(rename = "user")]
    pub author: String,
    pub text: String,
    /// Relative time label ("10 mins ago").
    pub time: String,
}
