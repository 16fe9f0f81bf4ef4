//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without echoing file contents.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` and `#[serial]` because they mutate cwd and env.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_valid_dotenv_populates_environment() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "_BREEZEWAY_DOTENV_PROBE=inspections\n",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_BREEZEWAY_DOTENV_PROBE", None),
        ],
        || {
            let result = ConfigLoader::new().load_dotenv();
            assert!(result.is_ok(), "Valid .env file should load successfully");
            assert_eq!(
                std::env::var("_BREEZEWAY_DOTENV_PROBE").ok().as_deref(),
                Some("inspections")
            );
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error_without_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    let marker = "leaked_line_marker_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("BREEZEWAY_THEME=dark\n{marker}"),
    )
    .unwrap();

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), ("BREEZEWAY_THEME", None)],
        || match ConfigLoader::new().load_dotenv() {
            Err(err @ ConfigError::DotenvParse { .. }) => {
                let message = err.to_string();
                assert!(!message.contains(marker), "{message}");
                assert!(message.contains("DOTENV_DISABLED"), "{message}");
            }
            Err(other) => panic!("expected DotenvParse, got {other}"),
            Ok(_) => panic!("expected DotenvParse, got Ok"),
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            let result = ConfigLoader::new().load_dotenv();
            assert!(
                result.is_ok(),
                "DOTENV_DISABLED={value} should skip .env loading even if file is invalid"
            );
        });
    }
}
