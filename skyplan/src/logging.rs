//! Log file setup
//!
//! The terminal belongs to the UI, so `tracing` output goes to a file.
//! `RUST_LOG` overrides [`DEFAULT_FILTER`].

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "skyplan=info,skyplan_core=info";

/// `<cache_dir>/skyplan/skyplan.log`, falling back to the temp dir
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("skyplan")
        .join("skyplan.log")
}

/// Install the global subscriber, appending to `path`
pub fn init(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_under_skyplan_dir() {
        let path = default_log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("skyplan.log"));
        assert!(path.parent().is_some_and(|p| p.ends_with("skyplan")));
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("skyplan.log");

        // a subscriber may already be installed by another test; the file
        // is created either way
        let _ = init(&path);

        assert!(path.exists());
    }
}
