//! CLI interface module
//!
//! One-shot commands that drive the same flows as the TUI and print the
//! result to stdout. Notifications go to stderr so `--json` output stays
//! machine-readable.

pub mod commands;

use std::fmt;

use colored::Colorize;

use crate::app::{NotificationKind, Notifier};
use crate::cli::{Commands, ConfigCommands};
use crate::client::{ClientError, HttpBackend};
use crate::config::StaticConfig;
use commands::{analytics, backend_status, config_generate, shorten};

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    CommandError(String),
    /// The failure was already shown to the user through a notification
    Reported,
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::Reported => String::new(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::Reported => String::new(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::SnaplinkError> for CliError {
    fn from(err: crate::errors::SnaplinkError) -> Self {
        match err {
            crate::errors::SnaplinkError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::CommandError(other.to_string()),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Prints notifications as colored status lines on stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => eprintln!("{} {}", "✓".bold().green(), message.green()),
            NotificationKind::Error => eprintln!("{} {}", "✗".bold().red(), message.red()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Generate doesn't need a backend
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let backend = HttpBackend::from_config(&config.backend);
    let mut notifier = ConsoleNotifier;

    match cmd {
        Commands::Shorten {
            url,
            alias,
            expiry,
            json,
        } => {
            let expiry = expiry.unwrap_or_else(|| config.default_expiry());
            shorten(&backend, &mut notifier, url, alias, expiry, json).await
        }

        Commands::Analytics { code, json } => {
            analytics(
                &backend,
                &mut notifier,
                code,
                config.ui.expiring_soon_days,
                json,
            )
            .await
        }

        Commands::Status => backend_status(&backend).await,

        Commands::Config { .. } => Ok(()),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI mode is started by the launcher, not the CLI runner".to_string(),
        )),
    }
}
