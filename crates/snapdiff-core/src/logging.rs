//! Tracing setup for the `snapdiff` binary.
//!
//! Events are appended to `snapdiff.log` in the XDG state directory. When that
//! file cannot be opened the CLI calls [`init_logging_stderr`] instead.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or does not parse.
const DEFAULT_DIRECTIVES: &str = "info,snapdiff=debug,snapdiff_core=debug";
const LOG_FILE_NAME: &str = "snapdiff.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// `~/.local/state/snapdiff/snapdiff.log`; the state directory is created if missing.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("snapdiff")?;
    dirs.place_state_file(LOG_FILE_NAME)
        .context("failed to create snapdiff state directory")
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Installs the global subscriber writing to the state log file. Returns the file path.
///
/// Errors leave no subscriber installed, so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging to {}", path.display());
    Ok(path)
}

/// Installs a stderr subscriber. A subscriber that is already set is left in place.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVES).is_ok());
    }

    #[test]
    fn log_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        writeln!(open_append(&path).unwrap(), "first").unwrap();
        writeln!(open_append(&path).unwrap(), "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_append_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/sub/snapdiff.log");
        let err = open_append(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing/sub/snapdiff.log"), "{err:#}");
    }
}
