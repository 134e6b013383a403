//! File-only tracing setup for the terminal viewers.
//!
//! The TUI owns the terminal, so nothing is written to stdout/stderr. Logs go
//! to `<log dir>/<binary>.log` through a non-blocking appender.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::ViewerConfig;

const APP_DIR: &str = "wargame-viewer";

/// Install the global subscriber.
///
/// Returns `None` when logging is disabled. Otherwise the returned guard must
/// be held until exit so buffered lines are flushed.
pub fn init(config: &ViewerConfig, binary: &str) -> Result<Option<WorkerGuard>> {
    if config.log_disabled {
        return Ok(None);
    }

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, format!("{binary}.log"));
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(binary, log_dir = %log_dir.display(), "logging initialized");
    Ok(Some(guard))
}

/// Platform cache directory for log files.
pub fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join(APP_DIR)
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join(APP_DIR).join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache").join(APP_DIR).join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join(APP_DIR).join("logs");
        }
    }

    std::env::temp_dir().join(APP_DIR).join("logs")
}
