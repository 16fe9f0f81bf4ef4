//! Documentation rendering helpers for keybindings.
//!
//! Responsibilities:
//! - Render the keybinding catalog into Markdown for the README.
//!
//! Non-responsibilities:
//! - Reading or writing files (handled by the generator binary).
//!
//! Invariants:
//! - Output is deterministic and based on the keybinding catalog.

use crate::input::keymap::{Section, unique_entries};

pub(crate) fn render_markdown() -> String {
    let mut out = String::new();

    out.push_str("### Navigation\n\n");
    for (keys, description) in unique_entries(Section::Global) {
        out.push_str(&format!("- `{}`: {}\n", keys, description));
    }

    out.push_str("\n### Screen and Dialog Shortcuts\n\n");
    for section in Section::ALL.into_iter().filter(|s| *s != Section::Global) {
        let entries = unique_entries(section);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("#### {}\n", section.title()));
        for (keys, description) in entries {
            out.push_str(&format!("- `{}`: {}\n", keys, description));
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}
