//! Operational logging setup
//!
//! The TUI owns the terminal while running, so diagnostics go to a log
//! file rather than stdout/stderr. The view never shows these details;
//! load failures surface there as one fixed message.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Initialize the log facade from configuration. A no-op when logging is
/// disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(config.level_filter()?)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to initialize logger")?;

    Ok(())
}

/// Default log location: `<local data dir>/essayist/essayist.log`.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join("essayist").join("essayist.log"))
}
