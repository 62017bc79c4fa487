//! Tracing setup for the binary.
//!
//! `RUST_LOG` takes precedence over the configured level. The interactive
//! UI owns the terminal, so it should be given a log file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, writing to `file` when given and stderr otherwise
pub fn init(level: &str, file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level: {}", level))?;

    let registry = tracing_subscriber::registry().with(filter);

    match file {
        Some(path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(log_file)).with_ansi(false).compact())
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }
    Ok(())
}
