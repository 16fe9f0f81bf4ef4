//! Purpose: Enforce RAII temp file handling in tests.
//!
//! Tests that touch the filesystem (config `.env` loading, the docs
//! generator) must use the tempfile crate rather than `std::env::temp_dir()`
//! with manual cleanup, and must keep the guard bound for the whole test.
//!
//! Non-scope: sources are scanned statically; nothing is executed.

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

/// `(path, contents)` of every Rust file under `crates/` containing a test.
fn test_sources() -> Vec<(String, String)> {
    let crates_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    WalkDir::new(crates_dir)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|entry| {
            let content = fs::read_to_string(entry.path()).ok()?;
            (content.contains("#[test]") || content.contains("#[tokio::test]"))
                .then(|| (entry.path().display().to_string(), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{path}: uses std::env::temp_dir() - prefer tempfile::tempdir()"
            ));
        }
        if content.contains("\"/tmp") {
            violations.push(format!("{path}: hardcoded /tmp path - prefer tempfile"));
        }
        if content.contains("fs::remove_file") && !content.contains("tempfile") {
            violations.push(format!(
                "{path}: manual remove_file cleanup - prefer NamedTempFile"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_guards_are_bound() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            let dropped = trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = tempdir()")
                || trimmed.starts_with("let _ = NamedTempFile");
            let unbound = trimmed.contains("tempfile::tempdir()")
                && !trimmed.starts_with("let ")
                && !trimmed.starts_with("//");
            if dropped || unbound {
                violations.push(format!("{path}:{}: tempfile guard dropped immediately", i + 1));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
