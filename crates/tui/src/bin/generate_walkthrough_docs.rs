//! Generate walkthrough and keybinding documentation.
//!
//! Responsibilities:
//! - Replace the marked block in documentation files with generated content.
//! - Print the generated Markdown with `--stdout`.
//! - Provide a stable, repeatable output for local CI.
//!
//! Does NOT handle:
//! - Editing any other documentation sections.
//!
//! Invariants:
//! - The markers must exist in all target files.
//! - Generated content is derived from the walkthrough content table and keymap only.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use breezeway_tui::doc_markers::replace_marked_block;
use clap::Parser;

/// Generate the walkthrough block in documentation files.
#[derive(Debug, Parser)]
#[command(
    name = "generate-walkthrough-docs",
    about = "Regenerate the walkthrough and keybinding section in documentation files",
    after_help = "Examples:\n  generate-walkthrough-docs\n  generate-walkthrough-docs --check\n  generate-walkthrough-docs --stdout\n"
)]
struct Args {
    /// Paths to the markdown files to update. Defaults to README.md.
    #[arg(long)]
    path: Vec<PathBuf>,

    /// Check if the files are up to date without writing.
    #[arg(long)]
    check: bool,

    /// Print the generated Markdown instead of touching any file.
    #[arg(long, conflicts_with = "check")]
    stdout: bool,
}

const DEFAULT_PATHS: &[&str] = &["README.md"];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let generated = breezeway_tui::render_walkthrough_docs();

    if args.stdout {
        println!("{generated}");
        return Ok(());
    }

    let paths = if args.path.is_empty() {
        DEFAULT_PATHS.iter().map(PathBuf::from).collect()
    } else {
        args.path
    };

    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let new_content = replace_marked_block(&content, &generated)
            .with_context(|| format!("Cannot update {}", path.display()))?;
        ensure_up_to_date(&path, &content, &new_content, args.check)?;
    }

    Ok(())
}

fn ensure_up_to_date(
    path: &Path,
    original: &str,
    updated: &str,
    check_only: bool,
) -> anyhow::Result<()> {
    if original != updated {
        if check_only {
            anyhow::bail!(
                "Documentation is out of date. Run 'generate-walkthrough-docs' to update {}",
                path.display()
            );
        }
        fs::write(path, updated)?;
        println!("Updated {}.", path.display());
    } else {
        println!("{} is already up to date.", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_up_to_date;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn check_mode_fails_when_drifted() {
        let path = std::path::Path::new("README.md");
        let err = ensure_up_to_date(path, "old content", "new content", true).unwrap_err();
        assert!(err.to_string().contains("Documentation is out of date"));
    }

    #[test]
    fn check_mode_passes_when_matching() {
        let path = std::path::Path::new("README.md");
        ensure_up_to_date(path, "same", "same", true).unwrap();
    }

    #[test]
    fn write_mode_updates_file() {
        let file = NamedTempFile::new().unwrap();
        ensure_up_to_date(file.path(), "old", "new", false).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "new");
    }

    #[test]
    fn write_mode_skips_identical() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "same").unwrap();
        ensure_up_to_date(file.path(), "same", "same", false).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "same");
    }
}
