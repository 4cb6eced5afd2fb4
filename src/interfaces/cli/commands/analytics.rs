//! Analytics command

use chrono::Utc;
use colored::Colorize;

use super::helpers::{print_json, print_rows};
use crate::app::{AppState, Notifier, display};
use crate::client::LinkBackend;
use crate::interfaces::cli::CliError;

pub async fn analytics(
    backend: &dyn LinkBackend,
    notifier: &mut dyn Notifier,
    code: String,
    expiring_soon_days: i64,
    json: bool,
) -> Result<(), CliError> {
    let mut state = AppState::default();
    state.analytics_form.code = code;

    let outcome = state.submit_analytics(backend, notifier).await;
    let Some(result) = state.analytics.result().filter(|_| outcome.is_success()) else {
        return Err(CliError::Reported);
    };

    if json {
        return print_json(result);
    }

    println!("{}", "Link Analytics".bold().green());
    println!(
        "  {}: {}",
        "Total Clicks".cyan(),
        result.click_count.to_string().bold().green()
    );
    print_rows(&display::analytics_rows(
        result,
        Utc::now(),
        expiring_soon_days,
    ));
    Ok(())
}
