//! Shorten command

use colored::Colorize;

use super::helpers::{print_json, print_rows};
use crate::app::{AppState, Notifier, display};
use crate::client::LinkBackend;
use crate::interfaces::cli::CliError;
use crate::models::ExpiryOption;

pub async fn shorten(
    backend: &dyn LinkBackend,
    notifier: &mut dyn Notifier,
    url: String,
    alias: Option<String>,
    expiry: ExpiryOption,
    json: bool,
) -> Result<(), CliError> {
    let mut state = AppState::new(expiry);
    state.shorten_form.url = url;
    if let Some(alias) = alias {
        state.shorten_form.set_custom_alias(&alias);
    }

    let outcome = state.submit_shorten(backend, notifier).await;
    let Some(result) = state.shorten.result().filter(|_| outcome.is_success()) else {
        return Err(CliError::Reported);
    };

    if json {
        return print_json(result);
    }

    println!();
    println!("  {}", result.short_url.bold().cyan().underline());
    println!();
    print_rows(&display::shorten_rows(result));
    Ok(())
}
