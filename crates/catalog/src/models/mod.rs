//! Data models for the practice catalog.
//!
//! Types are organized by view in submodules and re-exported here
//! for convenient access. Enum wire names match the identifiers used by
//! the hosted product (`in-progress`, `high`, ...).

pub mod dashboard;
pub mod inspections;
pub mod properties;
pub mod tasks;

pub use dashboard::{Activity, ActivityStatus, DashboardSummary, StatCard, StatTone, UpcomingTask};
pub use inspections::{ChecklistFlags, ChecklistItem, Inspection, InspectionStatus};
pub use properties::{Property, PropertyStatus};
pub use tasks::{Comment, Priority, Task, TaskStatus};
