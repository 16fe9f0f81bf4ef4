//! Application state types and enums.
//!
//! Responsibilities:
//! - Define screen navigation enum (CurrentScreen)
//! - Define per-screen view state (search boxes, filters, selections)
//! - Define layout constants shared by rendering and mouse hit-testing
//!
//! Does NOT handle:
//! - Does NOT handle state mutations triggered by actions (in App impl)
//! - Does NOT define the main App struct

use breezeway_catalog::{
    Inspection, Property, StatusFilter, Task, catalog, filter_properties, filter_tasks,
};
use ratatui::widgets::{ListState, TableState};

use crate::app::input::components::TextField;

/// Layout constants for UI components.
/// Header: tab bar inside a bordered block.
pub const HEADER_HEIGHT: u16 = 3;
/// Footer: key hints inside a bordered block.
pub const FOOTER_HEIGHT: u16 = 3;

/// Top-level views, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrentScreen {
    #[default]
    Dashboard,
    Tasks,
    Inspections,
    Properties,
}

impl CurrentScreen {
    pub const ALL: [CurrentScreen; 4] = [
        Self::Dashboard,
        Self::Tasks,
        Self::Inspections,
        Self::Properties,
    ];

    /// Get the next screen in the cycle.
    pub fn next(self) -> Self {
        match self {
            CurrentScreen::Dashboard => CurrentScreen::Tasks,
            CurrentScreen::Tasks => CurrentScreen::Inspections,
            CurrentScreen::Inspections => CurrentScreen::Properties,
            CurrentScreen::Properties => CurrentScreen::Dashboard,
        }
    }

    /// Get the previous screen in the cycle.
    pub fn previous(self) -> Self {
        match self {
            CurrentScreen::Dashboard => CurrentScreen::Properties,
            CurrentScreen::Tasks => CurrentScreen::Dashboard,
            CurrentScreen::Inspections => CurrentScreen::Tasks,
            CurrentScreen::Properties => CurrentScreen::Inspections,
        }
    }

    /// View identifier used by the walkthrough content table and `--view`.
    pub fn id(self) -> &'static str {
        match self {
            CurrentScreen::Dashboard => "dashboard",
            CurrentScreen::Tasks => "tasks",
            CurrentScreen::Inspections => "inspections",
            CurrentScreen::Properties => "properties",
        }
    }

    /// Parse a view identifier, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|screen| screen.id() == normalized)
    }

    /// Menu label.
    pub fn title(self) -> &'static str {
        match self {
            CurrentScreen::Dashboard => "Dashboard",
            CurrentScreen::Tasks => "Tasks & Work Orders",
            CurrentScreen::Inspections => "Inspections",
            CurrentScreen::Properties => "Properties",
        }
    }

    /// Zero-based position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            CurrentScreen::Dashboard => 0,
            CurrentScreen::Tasks => 1,
            CurrentScreen::Inspections => 2,
            CurrentScreen::Properties => 3,
        }
    }

    /// Digit key that jumps to this screen.
    pub fn shortcut(self) -> char {
        match self {
            CurrentScreen::Dashboard => '1',
            CurrentScreen::Tasks => '2',
            CurrentScreen::Inspections => '3',
            CurrentScreen::Properties => '4',
        }
    }
}

/// Move a selection index by `delta` within `0..len`, clamping at both ends.
pub(crate) fn step_selection(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Some(current) = current else {
        return Some(0);
    };
    Some((current as isize + delta).clamp(0, len as isize - 1) as usize)
}

/// Tasks & Work Orders view state.
#[derive(Debug, Clone, Default)]
pub struct TasksView {
    pub search: TextField,
    /// Keys go to the search box while set.
    pub searching: bool,
    pub filter: StatusFilter,
    pub table: TableState,
}

impl TasksView {
    pub fn new() -> Self {
        Self {
            search: TextField::with_placeholder("Search tasks or properties..."),
            table: TableState::default().with_selected(Some(0)),
            ..Self::default()
        }
    }

    /// Rows after applying the search query and status filter.
    pub fn visible(&self) -> Vec<&'static Task> {
        filter_tasks(&catalog().tasks, self.search.value(), self.filter)
    }

    pub fn selected_task(&self) -> Option<&'static Task> {
        let index = self.table.selected()?;
        self.visible().get(index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        self.table
            .select(step_selection(self.table.selected(), len, 1));
    }

    pub fn select_previous(&mut self) {
        let len = self.visible().len();
        self.table
            .select(step_selection(self.table.selected(), len, -1));
    }

    /// Put the selection back on the first row after the row set changed.
    pub fn reset_selection(&mut self) {
        let selected = (!self.visible().is_empty()).then_some(0);
        self.table.select(selected);
    }
}

/// Inspections view state.
#[derive(Debug, Clone, Default)]
pub struct InspectionsView {
    pub list: ListState,
}

impl InspectionsView {
    pub fn new() -> Self {
        Self {
            list: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected_inspection(&self) -> Option<&'static Inspection> {
        catalog().inspections.get(self.list.selected()?)
    }

    pub fn select_next(&mut self) {
        let len = catalog().inspections.len();
        self.list.select(step_selection(self.list.selected(), len, 1));
    }

    pub fn select_previous(&mut self) {
        let len = catalog().inspections.len();
        self.list
            .select(step_selection(self.list.selected(), len, -1));
    }
}

/// Properties view state.
#[derive(Debug, Clone, Default)]
pub struct PropertiesView {
    pub search: TextField,
    pub searching: bool,
    pub list: ListState,
}

impl PropertiesView {
    pub fn new() -> Self {
        Self {
            search: TextField::with_placeholder("Search properties..."),
            list: ListState::default().with_selected(Some(0)),
            ..Self::default()
        }
    }

    pub fn visible(&self) -> Vec<&'static Property> {
        filter_properties(&catalog().properties, self.search.value())
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        self.list.select(step_selection(self.list.selected(), len, 1));
    }

    pub fn select_previous(&mut self) {
        let len = self.visible().len();
        self.list
            .select(step_selection(self.list.selected(), len, -1));
    }

    pub fn reset_selection(&mut self) {
        let selected = (!self.visible().is_empty()).then_some(0);
        self.list.select(selected);
    }
}
