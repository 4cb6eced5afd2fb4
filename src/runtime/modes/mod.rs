//! Mode routing
//!
//! The mode selection is based on the parsed command line and feature flags:
//! 1. No subcommand, or `tui`, with the TUI feature enabled -> TUI mode
//! 2. Any other subcommand with the CLI feature enabled -> CLI mode
//! 3. Otherwise -> Unknown (print usage)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::RunMode;

/// Mode detection result
#[derive(Debug)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli(Commands),
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

impl Mode {
    /// Logging and panic behavior for this mode
    pub fn run_mode(&self) -> RunMode {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => RunMode::Tui,
            _ => RunMode::Cli,
        }
    }
}

/// Detect which mode to run based on the parsed subcommand
pub fn detect_mode(command: Option<Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(cmd) => Mode::Cli(cmd),
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}

#[cfg(all(test, feature = "cli", feature = "tui"))]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn mode_for(args: &[&str]) -> Mode {
        detect_mode(Cli::try_parse_from(args).unwrap().command)
    }

    #[test]
    fn test_no_command_is_tui() {
        assert!(matches!(mode_for(&["snaplink"]), Mode::Tui));
        assert!(matches!(
            mode_for(&["snaplink", "--base-url", "http://x:1"]),
            Mode::Tui
        ));
        assert!(matches!(mode_for(&["snaplink", "tui"]), Mode::Tui));
    }

    #[test]
    fn test_subcommand_is_cli() {
        let mode = mode_for(&["snaplink", "status"]);
        assert!(matches!(mode, Mode::Cli(Commands::Status)));
        assert_eq!(mode.run_mode(), RunMode::Cli);
        assert_eq!(mode_for(&["snaplink"]).run_mode(), RunMode::Tui);
    }
}
