//! Walkthrough content table.
//!
//! Responsibilities:
//! - Hold the scripted step sequence taught on each view.
//! - Resolve a view identifier to its sequence.
//!
//! Does NOT handle:
//! - Tracking which step is showing (handled by the `state` module).
//! - Rendering (handled by `ui::walkthrough`).
//!
//! Invariants:
//! - Every sequence in the table is non-empty.
//! - Unknown view identifiers resolve to the dashboard sequence.
//! - The table is built once per process and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::app::CurrentScreen;

/// One page of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Optional "Try it:" call to action.
    pub action: Option<&'static str>,
}

impl TutorialStep {
    const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            action: None,
        }
    }

    const fn with_action(mut self, action: &'static str) -> Self {
        self.action = Some(action);
        self
    }
}

const DASHBOARD_STEPS: &[TutorialStep] = &[
    TutorialStep::new(
        "Welcome to Breezeway Training!",
        "This interactive training environment will help you learn how to manage properties, tasks, and inspections efficiently. Let's start with an overview of the Dashboard.",
    ),
    TutorialStep::new(
        "Dashboard Overview",
        "The Dashboard provides a quick snapshot of your operations. You can see active tasks, completed items, urgent issues, and total properties at a glance.",
    ),
    TutorialStep::new(
        "Recent Activity",
        "The Recent Activity section shows real-time updates on task completions, inspections, and work orders across all properties.",
    ),
    TutorialStep::new(
        "Upcoming Tasks",
        "Keep track of what needs to be done next. Tasks are color-coded by priority: red for high, yellow for medium, and gray for low priority.",
    )
    .with_action("Try clicking on the \"Tasks & Work Orders\" menu to continue learning."),
];

const TASKS_STEPS: &[TutorialStep] = &[
    TutorialStep::new(
        "Tasks & Work Orders",
        "This is your command center for managing all property-related tasks. You can view, assign, and track the progress of every work order.",
    ),
    TutorialStep::new(
        "Search and Filter",
        "Use the search bar to quickly find specific tasks or properties. Filter by status (Pending, In Progress, Completed, Overdue) to focus on what matters most.",
    )
    .with_action("Try searching for a property name or filtering by status."),
    TutorialStep::new(
        "Task Details",
        "Click any task row to view detailed information including description, assignee, due date, and category.",
    )
    .with_action("Click on any task to open the detailed view."),
    TutorialStep::new(
        "Managing Tasks",
        "In the task details modal, you can update the status, add comments for team communication, and track progress. This keeps everyone on the same page.",
    ),
    TutorialStep::new(
        "Status Updates",
        "Change task status from Pending → In Progress → Completed. This creates a clear workflow and helps track team productivity.",
    )
    .with_action("Try the Inspections view to learn about property checks."),
];

const INSPECTIONS_STEPS: &[TutorialStep] = &[
    TutorialStep::new(
        "Property Inspections",
        "Inspections are crucial for maintaining property quality. Breezeway helps you conduct thorough, consistent inspections with customizable checklists.",
    ),
    TutorialStep::new(
        "Inspection Types",
        "Common inspection types include Pre-Arrival (before guest check-in), Mid-Stay (during longer stays), Post-Departure (after checkout), and Maintenance (routine checks).",
    ),
    TutorialStep::new(
        "Interactive Checklists",
        "Click on any inspection card to open the detailed checklist. You can check off items, add photos for documentation, and report issues.",
    )
    .with_action("Click on an inspection to see the full checklist."),
    TutorialStep::new(
        "Progress Tracking",
        "The progress bar shows completion percentage. Items requiring photos are marked, and you can flag issues that need attention.",
    ),
    TutorialStep::new(
        "Completing Inspections",
        "Add notes, document issues with photos, and complete the checklist. All data is saved for quality control and future reference.",
    )
    .with_action("Explore the Properties view to see your portfolio."),
];

const PROPERTIES_STEPS: &[TutorialStep] = &[
    TutorialStep::new(
        "Property Management",
        "The Properties view gives you an overview of your entire portfolio. Each card displays key information and current status.",
    ),
    TutorialStep::new(
        "Property Details",
        "Each property shows its name, location, type, number of bedrooms, and guest capacity. Status badges indicate if it's available, occupied, or under maintenance.",
    ),
    TutorialStep::new(
        "Quick Search",
        "Use the search bar to quickly find properties by name or address. This is especially useful when managing a large portfolio.",
    )
    .with_action("Try searching for a specific property."),
    TutorialStep::new(
        "Property Status",
        "Green means Available, Blue means Occupied, and Yellow means Under Maintenance. This helps you quickly assess property availability.",
    ),
    TutorialStep::new(
        "Training Complete!",
        "You now know the basics of Breezeway! Practice by exploring each section, creating tasks, completing inspections, and managing properties. The more you use it, the more efficient you'll become.",
    )
    .with_action("Close this training and start practicing!"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static [TutorialStep]>> = LazyLock::new(|| {
    let table = HashMap::from([
        (CurrentScreen::Dashboard.id(), DASHBOARD_STEPS),
        (CurrentScreen::Tasks.id(), TASKS_STEPS),
        (CurrentScreen::Inspections.id(), INSPECTIONS_STEPS),
        (CurrentScreen::Properties.id(), PROPERTIES_STEPS),
    ]);
    tracing::debug!(views = table.len(), "walkthrough content table built");
    table
});

/// Read-only access to the walkthrough content.
pub struct ContentTable;

impl ContentTable {
    /// Sequence for a raw view identifier. Unknown identifiers get the dashboard sequence.
    pub fn lookup(view_id: &str) -> &'static [TutorialStep] {
        TABLE.get(view_id).copied().unwrap_or(DASHBOARD_STEPS)
    }

    /// Sequence taught on `screen`.
    pub fn for_screen(screen: CurrentScreen) -> &'static [TutorialStep] {
        Self::lookup(screen.id())
    }
}
