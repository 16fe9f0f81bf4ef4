//! Marker-delimited generated blocks in Markdown files.
//!
//! Invariants:
//! - Only the text between the markers is replaced; markers are kept.
//! - Replacement is idempotent for identical generated content.

use thiserror::Error;

pub const START_MARKER: &str = "<!-- BEGIN WALKTHROUGH DOCS -->";
pub const END_MARKER: &str = "<!-- END WALKTHROUGH DOCS -->";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerError {
    #[error("Start marker not found: {START_MARKER}")]
    MissingStart,
    #[error("End marker not found: {END_MARKER}")]
    MissingEnd,
    #[error("End marker appears before start marker.")]
    OutOfOrder,
}

/// Replace the generated block in `content` with `generated`.
pub fn replace_marked_block(content: &str, generated: &str) -> Result<String, MarkerError> {
    let start_idx = content.find(START_MARKER).ok_or(MarkerError::MissingStart)?;
    let end_idx = content.find(END_MARKER).ok_or(MarkerError::MissingEnd)?;
    if end_idx <= start_idx {
        return Err(MarkerError::OutOfOrder);
    }

    let before = &content[..start_idx + START_MARKER.len()];
    let after = &content[end_idx..];
    Ok(format!("{before}\n\n{generated}\n{after}"))
}
