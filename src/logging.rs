//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file next to the
//! config. `RUST_LOG` overrides the configured level.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter from `RUST_LOG`, falling back to `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber writing to `log_path`.
///
/// Fails if the file can't be opened or a subscriber is already installed.
pub fn init_logging(log_path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err_with(|| format!("failed to open {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .wrap_err("failed to install tracing subscriber")?;

    tracing::info!(path = %log_path.display(), "logging initialized");
    Ok(())
}
