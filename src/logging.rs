//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter in every front end.

use crate::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to stderr, leaving stdout to the printed views.
pub fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to the configured file so the terminal UI keeps the screen.
///
/// Without a `log_file` no subscriber is installed and events are dropped.
pub fn init_tui_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };

    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(path = %path.display(), "Logging to file");
    Ok(())
}
