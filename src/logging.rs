//! Tracing setup.
//!
//! The interactive view owns stdout, so log lines go to a file:
//!   <data dir>/palettr/palettr.log    # default location
//!   RUST_LOG=palettr=debug palettr    # fine-grained filter
//!   palettr --debug                   # debug level unless RUST_LOG is set
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub debug: bool,
}

/// Returns the log file path inside the user's data directory.
/// Falls back to `./palettr.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let palettr_dir = data_dir.join("palettr");
        std::fs::create_dir_all(&palettr_dir).ok();
        palettr_dir.join("palettr.log")
    } else {
        PathBuf::from("palettr.log")
    }
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    let default_level = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

pub fn init(config: &LoggingConfig, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
