#![forbid(unsafe_code)]

//! Log output for the binary.
//!
//! The terminal belongs to the UI, so logs only go to a file. Without
//! `--log-file` (or `ACADEMY_MANUAL_LOG`) no subscriber is installed and
//! every `tracing` macro is a no-op.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the log filter from a `RUST_LOG`-style directive string.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global `fmt` subscriber appending to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber is
/// already installed.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
