//! Tracing setup.
//!
//! The terminal belongs to the UI while the app runs, so log output goes to a
//! file instead of stderr.
//!
//! Environment variables:
//!   RUST_LOG             # Log filter (default: info)
//!   SKELETON_LOG_FILE    # Log file path (default: <cache dir>/skeleton/skeleton.log)

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

const LOG_FILE_ENV: &str = "SKELETON_LOG_FILE";
const LOG_FILE_NAME: &str = "skeleton.log";

/// Where the log file goes when `SKELETON_LOG_FILE` is not set.
pub fn default_log_path() -> PathBuf {
    if let Some(path) = std::env::var_os(LOG_FILE_ENV) {
        return PathBuf::from(path);
    }
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("skeleton")
        .join(LOG_FILE_NAME)
}

/// Install a global subscriber appending to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!(err))
}
