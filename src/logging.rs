//! Tracing subscriber setup
//!
//! Logs go to a file when one is configured. Otherwise they go to stderr, or
//! nowhere when the TUI owns the terminal.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// Pick a target from the CLI flags
    ///
    /// An explicit file always wins. Without one, terminal-owning modes log
    /// nowhere.
    #[must_use]
    pub fn resolve(log_file: Option<PathBuf>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

/// Install the global tracing subscriber
///
/// `filter` uses `EnvFilter` syntax (`info`, `wordle_game=debug`, ...).
/// Calling this more than once is harmless; only the first call takes effect.
///
/// # Errors
///
/// Returns an error if the filter cannot be parsed or the log file cannot be
/// opened.
pub fn init_tracing(filter: &str, target: &LogTarget) -> Result<()> {
    let env_filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init();
        }
    }

    Ok(())
}
