//! Help popup rendering from centralized keybindings.
//!
//! Responsibilities:
//! - Convert keybinding metadata into a human-readable help string.
//! - Generate context-aware help with the current screen's keys first.
//!
//! Does NOT handle:
//! - Mutating application state.
//! - Owning keybinding definitions (delegated to keymap).
//!
//! Invariants:
//! - Rendering order is stable across runs.

use crate::app::CurrentScreen;
use crate::input::keymap::{Section, unique_entries};

fn push_section(out: &mut String, section: Section) {
    let entries = unique_entries(section);
    if entries.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(section.title());
    out.push_str(":\n");
    let max_key_len = entries
        .iter()
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0);
    for (keys, description) in entries {
        let padding = max_key_len.saturating_sub(keys.chars().count()) + 2;
        out.push_str("  ");
        out.push_str(keys);
        out.push_str(&" ".repeat(padding));
        out.push_str(description);
        out.push('\n');
    }
}

/// Every section in catalog order.
pub(crate) fn help_text() -> String {
    let mut out = String::new();
    for section in Section::ALL {
        push_section(&mut out, section);
    }
    out
}

/// Help for `screen`: its own sections, then Global, then the walkthrough keys.
pub fn contextual_help_text(screen: CurrentScreen) -> String {
    let mut out = String::new();
    for &section in Section::for_screen(screen) {
        push_section(&mut out, section);
    }
    push_section(&mut out, Section::Global);
    push_section(&mut out, Section::Walkthrough);
    out.push_str("\nj/k to scroll, Esc or ? to close\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_includes_every_section() {
        let help = help_text();
        for section in Section::ALL {
            assert!(help.contains(&format!("{}:", section.title())));
        }
    }

    #[test]
    fn help_text_aligns_key_column() {
        let help = help_text();
        // Widest global key is "Shift+Tab".
        assert!(help.contains(&format!("  q{}Quit", " ".repeat(10))));
        assert!(help.contains("Open training walkthrough"));
    }

    #[test]
    fn contextual_help_puts_screen_section_first() {
        let help = contextual_help_text(CurrentScreen::Tasks);
        assert!(help.starts_with("Tasks & Work Orders:"));
        assert!(help.contains("Task Details:"));
        assert!(!help.contains("Inspection Checklist:"));
    }

    #[test]
    fn contextual_help_on_dashboard_starts_with_global() {
        let help = contextual_help_text(CurrentScreen::Dashboard);
        assert!(help.starts_with("Global:"));
        assert!(help.contains("Training Walkthrough:"));
    }
}
