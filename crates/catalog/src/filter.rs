//! Search and status filtering for list views.
//!
//! Invariants:
//! - Matching is a case-insensitive substring test; an empty query matches everything.
//! - Filtering preserves catalog order.

use std::fmt;

use crate::models::{Property, Task, TaskStatus};

/// Status filter on the Tasks view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Next filter in dropdown order: All, then each status, then back to All.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::All => Self::Only(TaskStatus::ALL[0]),
            Self::Only(status) => TaskStatus::ALL
                .get(status.index() + 1)
                .copied()
                .map_or(Self::All, Self::Only),
        }
    }

    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.title(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Tasks whose title or property contains `query` and whose status passes `filter`.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str, filter: StatusFilter) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            contains_ignore_case(&task.title, &needle)
                || contains_ignore_case(&task.property, &needle)
        })
        .filter(|task| filter.matches(task.status))
        .collect()
}

/// Properties whose name or address contains `query`.
pub fn filter_properties<'a>(properties: &'a [Property], query: &str) -> Vec<&'a Property> {
    let needle = query.to_lowercase();
    properties
        .iter()
        .filter(|property| {
            contains_ignore_case(&property.name, &needle)
                || contains_ignore_case(&property.address, &needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::catalog;

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_empty_query_and_all_filter_returns_everything() {
        let tasks = &catalog().tasks;
        assert_eq!(filter_tasks(tasks, "", StatusFilter::All).len(), tasks.len());
    }

    #[test]
    fn test_query_matches_title_or_property_case_insensitively() {
        let tasks = &catalog().tasks;
        assert_eq!(
            titles(&filter_tasks(tasks, "CLEANING", StatusFilter::All)),
            vec!["Deep Cleaning", "Mid-Stay Cleaning"]
        );
        assert_eq!(
            titles(&filter_tasks(tasks, "ocean view", StatusFilter::All)),
            vec!["Deep Cleaning"]
        );
        assert!(filter_tasks(tasks, "Sarah", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_combines_with_query() {
        let tasks = &catalog().tasks;
        let in_progress = StatusFilter::Only(TaskStatus::InProgress);
        assert_eq!(
            titles(&filter_tasks(tasks, "", in_progress)),
            vec!["Deep Cleaning", "Mid-Stay Cleaning"]
        );
        assert_eq!(
            titles(&filter_tasks(tasks, "garden", in_progress)),
            vec!["Mid-Stay Cleaning"]
        );
        assert!(filter_tasks(tasks, "pool", in_progress).is_empty());
    }

    #[test]
    fn test_filter_cycle_order() {
        let mut filter = StatusFilter::All;
        let mut labels = Vec::new();
        for _ in 0..5 {
            filter = filter.cycle_next();
            labels.push(filter.label());
        }
        assert_eq!(
            labels,
            vec!["Pending", "In Progress", "Completed", "Overdue", "All Status"]
        );
    }

    #[test]
    fn test_property_search_covers_name_and_address() {
        let properties = &catalog().properties;
        let by_name = filter_properties(properties, "loft");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Downtown Loft #5");

        let by_address: Vec<_> = filter_properties(properties, ", ca")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_address, vec![2, 4]);

        assert!(filter_properties(properties, "chalet").is_empty());
    }
}
