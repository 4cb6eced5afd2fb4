//! Logging system initialization
//!
//! This module sets up the tracing subscriber from the `[logging]` section of
//! the configuration.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use super::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{Result, SnaplinkError};

/// Initialize logging system based on configuration
///
/// - a configured `file` receives the logs (daily rotation when enabled)
/// - otherwise CLI mode logs to stderr, keeping stdout for command output
/// - otherwise TUI mode discards logs, since the terminal belongs to the UI
///
/// `RUST_LOG` takes precedence over `logging.level` when set.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());
    let writer = make_writer(config, log_file, mode)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            SnaplinkError::config(format!("Invalid log level '{}': {}", config.level, e))
        })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none() && mode == RunMode::Cli);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| SnaplinkError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

fn make_writer(
    config: &LoggingConfig,
    log_file: Option<&str>,
    mode: RunMode,
) -> Result<Box<dyn Write + Send + Sync>> {
    let Some(log_file) = log_file else {
        return Ok(match mode {
            RunMode::Cli => Box::new(std::io::stderr()),
            RunMode::Tui => Box::new(std::io::sink()),
        });
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path.parent().unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("snaplink.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .map_err(|e| {
                SnaplinkError::file_operation(format!(
                    "Failed to create rolling log appender: {}",
                    e
                ))
            })?;
        return Ok(Box::new(appender));
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            SnaplinkError::file_operation(format!("Failed to open log file {}: {}", log_file, e))
        })?;
    Ok(Box::new(file))
}
