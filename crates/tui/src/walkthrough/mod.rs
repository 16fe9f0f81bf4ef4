//! Scripted training walkthrough shown over the active view.

pub mod state;
pub mod steps;

#[cfg(test)]
mod tests;

pub use state::WalkthroughState;
pub use steps::{ContentTable, TutorialStep};

use crate::app::CurrentScreen;

/// Render every view's sequence as Markdown, in tab order.
pub fn render_markdown() -> String {
    let mut out = String::new();
    for screen in CurrentScreen::ALL {
        let steps = ContentTable::for_screen(screen);
        out.push_str(&format!(
            "#### {} ({} steps)\n\n",
            screen.title(),
            steps.len()
        ));
        for (i, step) in steps.iter().enumerate() {
            out.push_str(&format!(
                "{}. **{}** {}\n",
                i + 1,
                step.title,
                step.description
            ));
            if let Some(action) = step.action {
                out.push_str(&format!("   - Try it: {}\n", action));
            }
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}
