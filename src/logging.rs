//! File logging.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::startup::PortalConfig;

const LOG_DIR: &str = "campus-portal";
const LOG_FILE: &str = "portal.log";

/// Default log location: `<cache dir>/campus-portal/portal.log`, falling back
/// to the system temp directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILE)
}

/// The file the given config logs to.
pub fn log_path(config: &PortalConfig) -> PathBuf {
    config.log_file.clone().unwrap_or_else(default_log_path)
}

/// Create parent directories and open `path` for appending.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Parse a filter directive, falling back to the default on bad input.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(crate::startup::config::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the path in use. Calling it again after a subscriber is already
/// installed leaves the existing one in place.
pub fn init_logging(config: &PortalConfig) -> std::io::Result<PathBuf> {
    let path = log_path(config);
    let file = open_log_file(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            path = %path.display(),
            "logging initialised"
        );
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_layout() {
        let path = default_log_path();
        assert!(path.ends_with("campus-portal/portal.log"));
    }

    #[test]
    fn test_log_path_prefers_override() {
        let config = PortalConfig::new("https://sheets.test").with_log_file("/var/tmp/x.log");
        assert_eq!(log_path(&config), PathBuf::from("/var/tmp/x.log"));
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/portal.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_build_filter_accepts_bad_directive() {
        // An unparseable directive must not panic.
        let _ = build_filter("campus_portal=[[[");
        let _ = build_filter("debug");
    }
}
