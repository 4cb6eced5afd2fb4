//! Shared output helpers for CLI commands

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::app::display::{DetailRow, Tone};
use crate::interfaces::cli::CliError;

/// Color a value according to its tone
pub fn paint(row: &DetailRow) -> ColoredString {
    match row.tone {
        Tone::Plain => row.value.normal(),
        Tone::Code => row.value.cyan(),
        Tone::Success => row.value.green(),
        Tone::Danger => row.value.red().bold(),
    }
}

/// Print rows as an aligned `label: value` block
pub fn print_rows(rows: &[DetailRow]) {
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for row in rows {
        let pad = " ".repeat(width - row.label.len());
        println!("  {}:{} {}", row.label.cyan(), pad, paint(row));
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::CommandError(format!("Failed to encode JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}
