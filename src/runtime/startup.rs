//! Startup: configuration, logging and panic reporting, in that order

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::Cli;
use crate::config::{StaticConfig, init_config_with};
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Everything the selected mode needs once startup succeeded
///
/// Keep it alive until the process exits: dropping the guard flushes
/// buffered log lines.
pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    _log_guard: WorkerGuard,
}

/// Load configuration (applying `--base-url`), start logging, install the
/// panic hook
pub fn prepare(cli: &Cli, mode: RunMode) -> Result<StartupContext> {
    let base_url = cli.base_url.clone();
    let config = init_config_with(cli.config.as_deref(), move |config| {
        if let Some(url) = base_url {
            config.backend.base_url = url;
        }
    })
    .context("Failed to load configuration")?;

    let guard = init_logging(&config.logging, mode).context("Failed to initialize logging")?;
    install_panic_hook(mode);

    info!("snaplink v{} ({:?} mode)", env!("CARGO_PKG_VERSION"), mode);
    debug!("Backend: {}", config.backend.base_url);

    Ok(StartupContext {
        config,
        _log_guard: guard,
    })
}
