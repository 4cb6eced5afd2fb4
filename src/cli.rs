//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for snaplink using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::models::ExpiryOption;

/// SnapLink - Shorten. Share. Track.
#[derive(Parser, Debug)]
#[command(name = "snaplink")]
#[command(version)]
#[command(about = "Shorten URLs and inspect click analytics", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the backend address for this run
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Create a short link
    Shorten {
        /// Long URL, must start with http:// or https://
        url: String,

        /// Custom alias instead of a generated code (whitespace is removed)
        #[arg(long, short = 'a')]
        alias: Option<String>,

        /// Expiry in days: 1, 7, 30, 90 or 365 (default from config)
        #[arg(long, short = 'e')]
        expiry: Option<ExpiryOption>,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show click analytics for a short code or a pasted short URL
    Analytics {
        /// Short code, or a full short URL (its last path segment is used)
        code: String,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the backend is reachable
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorten_defaults() {
        let cli = Cli::try_parse_from(["snaplink", "shorten", "https://a.co/x"]).unwrap();
        match cli.command {
            Some(Commands::Shorten {
                url,
                alias,
                expiry,
                json,
            }) => {
                assert_eq!(url, "https://a.co/x");
                assert_eq!(alias, None);
                assert_eq!(expiry, None);
                assert!(!json);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_shorten_with_options() {
        let cli = Cli::try_parse_from([
            "snaplink",
            "shorten",
            "https://a.co/x",
            "--alias",
            "promo",
            "--expiry",
            "7",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Shorten {
                alias,
                expiry,
                json,
                ..
            }) => {
                assert_eq!(alias.as_deref(), Some("promo"));
                assert_eq!(expiry, Some(ExpiryOption::SevenDays));
                assert!(json);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_expiry() {
        let result = Cli::try_parse_from(["snaplink", "shorten", "https://a.co", "-e", "14"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "snaplink",
            "analytics",
            "abc123",
            "--base-url",
            "http://127.0.0.1:9000",
            "-c",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(cli.command, Some(Commands::Analytics { .. })));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["snaplink"]).unwrap();
        assert!(cli.command.is_none());
    }
}
