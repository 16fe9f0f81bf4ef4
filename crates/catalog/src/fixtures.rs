//! Seeded practice data.
//!
//! Responsibilities:
//! - Build the single process-wide `Catalog` of sample records.
//! - Provide the checklist template and the comment thread every task opens with.
//!
//! Does NOT handle:
//! - Mutation. The catalog is immutable; edits go into `practice` drafts.
//!
//! Invariants:
//! - Built once on first access and never changed afterwards.
//! - Record ids are unique within each collection.

use std::sync::LazyLock;

use crate::models::{
    Activity, ActivityStatus, ChecklistFlags, ChecklistItem, Comment, DashboardSummary,
    Inspection, InspectionStatus, Priority, Property, PropertyStatus, StatCard, StatTone, Task,
    TaskStatus, UpcomingTask,
};

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::seeded);

/// Shared read-only catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// All sample records shown by the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub dashboard: DashboardSummary,
    pub tasks: Vec<Task>,
    pub inspections: Vec<Inspection>,
    pub properties: Vec<Property>,
    /// Checklist every inspection dialog starts from.
    pub checklist_template: Vec<ChecklistItem>,
    /// Comment thread every task dialog starts from.
    pub seed_comments: Vec<Comment>,
}

impl Catalog {
    /// Build the sample data set.
    pub fn seeded() -> Self {
        Self {
            dashboard: seeded_dashboard(),
            tasks: seeded_tasks(),
            inspections: seeded_inspections(),
            properties: seeded_properties(),
            checklist_template: seeded_checklist(),
            seed_comments: vec![Comment {
                id: 1,
                author: "Sarah Johnson".to_string(),
                text: "Starting this task now".to_string(),
                time: "10 mins ago".to_string(),
            }],
        }
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn inspection(&self, id: u32) -> Option<&Inspection> {
        self.inspections.iter().find(|inspection| inspection.id == id)
    }
}

fn stat(label: &str, value: u32, tone: StatTone) -> StatCard {
    StatCard {
        label: label.to_string(),
        value,
        tone,
    }
}

fn seeded_dashboard() -> DashboardSummary {
    let activity = |id, kind: &str, property: &str, time: &str, status| Activity {
        id,
        kind: kind.to_string(),
        property: property.to_string(),
        time: time.to_string(),
        status,
    };
    let upcoming = |id, title: &str, property: &str, due: &str, priority| UpcomingTask {
        id,
        title: title.to_string(),
        property: property.to_string(),
        due: due.to_string(),
        priority,
    };

    DashboardSummary {
        stats: vec![
            stat("Active Tasks", 12, StatTone::Info),
            stat("Completed Today", 8, StatTone::Success),
            stat("Urgent Items", 3, StatTone::Danger),
            stat("Properties", 24, StatTone::Accent),
        ],
        recent_activity: vec![
            activity(
                1,
                "Task Completed",
                "Sunset Villa #301",
                "10 mins ago",
                ActivityStatus::Completed,
            ),
            activity(
                2,
                "Inspection Started",
                "Ocean View Condo",
                "25 mins ago",
                ActivityStatus::InProgress,
            ),
            activity(
                3,
                "Work Order Created",
                "Mountain Lodge #12",
                "1 hour ago",
                ActivityStatus::Pending,
            ),
            activity(
                4,
                "Task Assigned",
                "Beach House A",
                "2 hours ago",
                ActivityStatus::Assigned,
            ),
        ],
        upcoming_tasks: vec![
            upcoming(
                1,
                "Pre-Arrival Inspection",
                "Sunset Villa #301",
                "Today, 2:00 PM",
                Priority::High,
            ),
            upcoming(
                2,
                "Deep Cleaning",
                "Ocean View Condo",
                "Today, 4:30 PM",
                Priority::Medium,
            ),
            upcoming(
                3,
                "Maintenance Check",
                "Mountain Lodge #12",
                "Tomorrow, 9:00 AM",
                Priority::Low,
            ),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: u32,
    title: &str,
    property: &str,
    assignee: &str,
    status: TaskStatus,
    priority: Priority,
    due: &str,
    category: &str,
    description: &str,
) -> Task {
    Task {
        id,
        title: title.to_string(),
        property: property.to_string(),
        assignee: assignee.to_string(),
        status,
        priority,
        due: due.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    }
}

fn seeded_tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Pre-Arrival Inspection",
            "Sunset Villa #301",
            "Sarah Johnson",
            TaskStatus::Pending,
            Priority::High,
            "Today, 2:00 PM",
            "Inspection",
            "Complete pre-arrival inspection before guest check-in. Verify all amenities are working and the property is clean.",
        ),
        task(
            2,
            "Deep Cleaning",
            "Ocean View Condo",
            "Mike Chen",
            TaskStatus::InProgress,
            Priority::Medium,
            "Today, 4:30 PM",
            "Cleaning",
            "Full deep cleaning of the unit including kitchen, bathrooms, and all living spaces.",
        ),
        task(
            3,
            "HVAC Filter Replacement",
            "Mountain Lodge #12",
            "Tom Davis",
            TaskStatus::Pending,
            Priority::Medium,
            "Tomorrow, 9:00 AM",
            "Maintenance",
            "Replace HVAC filters in all units. Check system operation after replacement.",
        ),
        task(
            4,
            "Pool Maintenance",
            "Beach House A",
            "Sarah Johnson",
            TaskStatus::Completed,
            Priority::Low,
            "Yesterday, 10:00 AM",
            "Maintenance",
            "Weekly pool cleaning and chemical balance check.",
        ),
        task(
            5,
            "Linen Inventory Check",
            "Downtown Loft #5",
            "Mike Chen",
            TaskStatus::Overdue,
            Priority::High,
            "Yesterday, 3:00 PM",
            "Inventory",
            "Count and verify all linens. Order replacements if needed.",
        ),
        task(
            6,
            "Mid-Stay Cleaning",
            "Garden Suite #8",
            "Tom Davis",
            TaskStatus::InProgress,
            Priority::Medium,
            "Today, 11:00 AM",
            "Cleaning",
            "Mid-stay refresh for extended guest. Change linens and restock supplies.",
        ),
    ]
}

fn seeded_inspections() -> Vec<Inspection> {
    let inspection = |id, kind: &str, property: &str, status, date: &str, inspector: &str, pct| {
        Inspection {
            id,
            kind: kind.to_string(),
            property: property.to_string(),
            status,
            date: date.to_string(),
            inspector: inspector.to_string(),
            completion_percent: pct,
        }
    };

    vec![
        inspection(
            1,
            "Pre-Arrival Inspection",
            "Sunset Villa #301",
            InspectionStatus::Pending,
            "Today, 2:00 PM",
            "Not Assigned",
            0,
        ),
        inspection(
            2,
            "Mid-Stay Check",
            "Ocean View Condo",
            InspectionStatus::InProgress,
            "Today, 10:30 AM",
            "Sarah Johnson",
            65,
        ),
        inspection(
            3,
            "Post-Departure Inspection",
            "Mountain Lodge #12",
            InspectionStatus::Completed,
            "Yesterday, 4:00 PM",
            "Mike Chen",
            100,
        ),
        inspection(
            4,
            "Maintenance Inspection",
            "Beach House A",
            InspectionStatus::Completed,
            "Yesterday, 11:00 AM",
            "Tom Davis",
            100,
        ),
        inspection(
            5,
            "Pre-Arrival Inspection",
            "Downtown Loft #5",
            InspectionStatus::Pending,
            "Tomorrow, 9:00 AM",
            "Not Assigned",
            0,
        ),
    ]
}

fn seeded_properties() -> Vec<Property> {
    let property = |id,
                    name: &str,
                    address: &str,
                    kind: &str,
                    bedrooms,
                    capacity,
                    status,
                    photo: &str| Property {
        id,
        name: name.to_string(),
        address: address.to_string(),
        kind: kind.to_string(),
        bedrooms,
        capacity,
        status,
        image_url: format!("https://images.unsplash.com/{photo}?w=800&h=600&fit=crop"),
    };

    vec![
        property(
            1,
            "Sunset Villa #301",
            "123 Ocean Drive, Miami Beach, FL",
            "Villa",
            3,
            6,
            PropertyStatus::Available,
            "photo-1613490493576-7fde63acd811",
        ),
        property(
            2,
            "Ocean View Condo",
            "456 Coastal Blvd, Santa Monica, CA",
            "Condo",
            2,
            4,
            PropertyStatus::Occupied,
            "photo-1512917774080-9991f1c4c750",
        ),
        property(
            3,
            "Mountain Lodge #12",
            "789 Pine Trail, Aspen, CO",
            "Lodge",
            4,
            8,
            PropertyStatus::Maintenance,
            "photo-1518780664697-55e3ad937233",
        ),
        property(
            4,
            "Beach House A",
            "321 Shoreline Ave, Malibu, CA",
            "House",
            5,
            10,
            PropertyStatus::Available,
            "photo-1499793983690-e29da59ef1c2",
        ),
        property(
            5,
            "Downtown Loft #5",
            "555 Main Street, Portland, OR",
            "Loft",
            1,
            2,
            PropertyStatus::Occupied,
            "photo-1502672260266-1c1ef2d93688",
        ),
        property(
            6,
            "Garden Suite #8",
            "888 Park Lane, Austin, TX",
            "Suite",
            2,
            4,
            PropertyStatus::Available,
            "photo-1600596542815-ffad4c1539a9",
        ),
    ]
}

fn seeded_checklist() -> Vec<ChecklistItem> {
    let item = |id, category: &str, text: &str, checked, flags| ChecklistItem {
        id,
        category: category.to_string(),
        item: text.to_string(),
        checked,
        flags,
    };
    let none = ChecklistFlags::empty();

    vec![
        item(1, "Kitchen", "Appliances clean and functioning", true, none),
        item(2, "Kitchen", "Refrigerator stocked with welcome items", true, none),
        item(3, "Kitchen", "All dishes and utensils present", false, none),
        item(4, "Living Room", "Furniture in good condition", false, none),
        item(
            5,
            "Living Room",
            "TV and remotes working",
            false,
            ChecklistFlags::REQUIRES_PHOTO,
        ),
        item(6, "Bedrooms", "Beds made with fresh linens", false, none),
        item(7, "Bedrooms", "Closets empty and clean", false, none),
        item(8, "Bathrooms", "Toiletries stocked", false, none),
        item(
            9,
            "Bathrooms",
            "No plumbing issues",
            false,
            ChecklistFlags::HAS_ISSUE,
        ),
        item(10, "General", "HVAC functioning properly", false, none),
    ]
}
