//! Diagnostic logging to a file.
//!
//! The terminal is owned by the UI, so tracing output goes to a file instead
//! of stdout. Disabled unless a log path is configured or `TALLY_LOG` names
//! one. Verbosity follows `RUST_LOG`, defaulting to `info`.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init(config: &LoggingConfig) -> Result<()> {
    let path = match config
        .file
        .clone()
        .or_else(|| std::env::var_os("TALLY_LOG").map(PathBuf::from))
    {
        Some(path) => path,
        None => return Ok(()),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
