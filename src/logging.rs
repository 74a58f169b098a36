//! tracing subscriber setup.
//!
//! The terminal runs in raw mode on the alternate screen, so log lines go to a
//! file. Without `BLOCKFALL_LOG_PATH` no subscriber is installed and the
//! engine's tracing calls are no-ops.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Install the global subscriber. Returns false when logging is disabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(Mutex::new(file))
        .compact()
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))?;

    Ok(true)
}
