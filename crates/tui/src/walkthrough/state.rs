//! Walkthrough engine state and step transitions.
//!
//! Responsibilities:
//! - Track the active view's sequence and the current step index.
//! - Move forward and back within the sequence.
//! - Derive progress for the overlay.
//!
//! Does NOT handle:
//! - Deciding when the walkthrough is visible (owned by `App`).
//! - Content strings (handled by the `steps` module).
//!
//! Invariants:
//! - `0 <= current_index < len()` at all times.
//! - Selecting a view always restarts at index 0, even for the same view.
//! - No transition fails; out-of-range moves are no-ops.

use crate::app::CurrentScreen;

use super::steps::{ContentTable, TutorialStep};

/// Position within one view's walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughState {
    view: CurrentScreen,
    steps: &'static [TutorialStep],
    current_index: usize,
}

impl WalkthroughState {
    /// Start at the first step of `view`'s sequence.
    pub fn new(view: CurrentScreen) -> Self {
        Self {
            view,
            steps: ContentTable::for_screen(view),
            current_index: 0,
        }
    }

    /// Load `view`'s sequence and restart at its first step.
    pub fn select_view(&mut self, view: CurrentScreen) {
        self.view = view;
        self.steps = ContentTable::for_screen(view);
        self.current_index = 0;
    }

    /// Moves to the next step.
    ///
    /// Returns `true` if the index changed, `false` if already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.steps.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous step.
    ///
    /// Returns `true` if the index changed, `false` if already on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn view(&self) -> CurrentScreen {
        self.view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based step number for "Step k of N".
    pub fn step_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; sequences are never empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &'static [TutorialStep] {
        self.steps
    }

    pub fn current_step(&self) -> &'static TutorialStep {
        &self.steps[self.current_index]
    }

    /// Fraction of the sequence reached, `(index + 1) / len`, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        self.step_number() as f64 / self.len() as f64
    }

    /// Progress rounded to a whole percentage.
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }

    /// On the final step, where "Next" becomes "Start Practicing".
    pub fn is_complete(&self) -> bool {
        self.step_number() == self.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.current_index == 0
    }
}

impl Default for WalkthroughState {
    fn default() -> Self {
        Self::new(CurrentScreen::default())
    }
}
