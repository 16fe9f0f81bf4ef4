//! Dashboard summary models.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tasks::Priority;

/// Accent used for a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatTone {
    Info,
    Success,
    Danger,
    Accent,
}

/// A headline number on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: u32,
    pub tone: StatTone,
}

/// State of a recent activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityStatus {
    Completed,
    InProgress,
    Pending,
    Assigned,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityStatus::Completed => "completed",
            ActivityStatus::InProgress => "in progress",
            ActivityStatus::Pending => "pending",
            ActivityStatus::Assigned => "assigned",
        };
        f.write_str(s)
    }
}

/// An entry in the dashboard's recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    /// What happened ("Task Completed").
    #[serde(rename = "type")]
    pub kind: String,
    pub property: String,
    pub time: String,
    pub status: ActivityStatus,
}

/// A task teaser in the dashboard's upcoming list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingTask {
    pub id: u32,
    pub title: String,
    pub property: String,
    pub due: String,
    pub priority: Priority,
}

/// Everything the dashboard view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: Vec<StatCard>,
    #[serde(rename = "recentActivity")]
    pub recent_activity: Vec<Activity>,
    #[serde(rename = "upcomingTasks")]
    pub upcoming_tasks: Vec<UpcomingTask>,
}
