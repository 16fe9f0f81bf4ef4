//! Inspection and checklist models.
//!
//! # What this module handles:
//! - Scheduled inspection records shown on the Inspections view
//! - Checklist items and their photo/issue markers
//!
//! # What this module does NOT handle:
//! - Checking items off (see [`crate::practice::ChecklistSession`])

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress state of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl InspectionStatus {
    /// Pending inspections have no progress to show.
    pub fn shows_progress(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InspectionStatus::Pending => "pending",
            InspectionStatus::InProgress => "in progress",
            InspectionStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A scheduled inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: u32,
    /// Inspection type ("Pre-Arrival Inspection").
    #[serde(rename = "type")]
    pub kind: String,
    pub property: String,
    pub status: InspectionStatus,
    /// Human-readable schedule label.
    pub date: String,
    pub inspector: String,
    #[serde(rename = "completionPercentage")]
    pub completion_percent: u8,
}

bitflags! {
    /// Markers attached to a checklist item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChecklistFlags: u8 {
        /// The item needs a photo before it can be signed off.
        const REQUIRES_PHOTO = 1 << 0;
        /// A previous visit reported a problem with this item.
        const HAS_ISSUE = 1 << 1;
    }
}

/// One line of an inspection checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: u32,
    /// Room or area heading the item is grouped under.
    pub category: String,
    pub item: String,
    pub checked: bool,
    pub flags: ChecklistFlags,
}

impl ChecklistItem {
    pub fn requires_photo(&self) -> bool {
        self.flags.contains(ChecklistFlags::REQUIRES_PHOTO)
    }

    pub fn has_issue(&self) -> bool {
        self.flags.contains(ChecklistFlags::HAS_ISSUE)
    }
}
