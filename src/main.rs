use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use snaplink::cli::Cli;
use snaplink::runtime::modes::{self, Mode};
use snaplink::runtime::startup;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();
    let mode = modes::detect_mode(cli.command.take());

    let ctx = match startup::prepare(&cli, mode.run_mode()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(&ctx.config).await {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli(cmd) => {
            if let Err(e) = modes::run_cli(cmd, &ctx.config).await {
                let text = e.format_colored();
                if !text.is_empty() {
                    eprintln!("{}", text);
                }
                return ExitCode::FAILURE;
            }
        }
        Mode::Unknown => {
            let _ = Cli::command().print_help();
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
