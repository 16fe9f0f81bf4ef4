//! Static practice data for the Breezeway training simulator.
//!
//! This crate holds the display records shown by the simulator (tasks,
//! inspections, properties, dashboard summaries), the pure search/filter
//! helpers the list views use, and the throwaway draft state that modal
//! dialogs edit. Nothing here performs I/O or persists changes.

pub mod filter;
pub mod fixtures;
pub mod models;
pub mod practice;

pub use filter::{StatusFilter, filter_properties, filter_tasks};
pub use fixtures::{Catalog, catalog};
pub use models::{
    Activity, ActivityStatus, ChecklistFlags, ChecklistItem, Comment, DashboardSummary,
    Inspection, InspectionStatus, Priority, Property, PropertyStatus, StatCard, StatTone, Task,
    TaskStatus, UpcomingTask,
};
pub use practice::{ChecklistSession, JUST_NOW_LABEL, TRAINING_USER, TaskDraft};
