//! File-based tracing setup.
//!
//! The terminal is owned by the TUI, so log output goes to a daily rolling
//! file in [`Config::log_dir`] through a non-blocking writer.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Base name of the log file; the appender adds a date suffix.
pub const LOG_FILE_NAME: &str = "tally.log";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("could not create log directory: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed.
    #[error("could not install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from the configured directive, falling back to the
/// default when the directive does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Creates the log directory if it does not exist.
pub fn ensure_log_dir(dir: &Path) -> Result<(), LoggingError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines on drop and must be held for
/// the life of the program.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<WorkerGuard, LoggingError> {
    ensure_log_dir(&config.log_dir)?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        log_dir = %config.log_dir.display(),
        filter = %config.log_filter,
        "logging initialized"
    );
    Ok(guard)
}
