//! Status command - check that the backend answers its health endpoint

use colored::Colorize;
use tracing::debug;

use crate::client::{HttpBackend, LinkBackend};
use crate::interfaces::cli::CliError;

/// Display backend health
pub async fn backend_status(backend: &HttpBackend) -> Result<(), CliError> {
    debug!("Probing {}", backend.health_endpoint());

    match backend.health().await {
        Ok(health) => {
            println!("{}", "Backend Status".bold().green());
            println!("  {}: {}", "Address".cyan(), backend.base_url());
            println!(
                "  {}:  {}",
                "Status".cyan(),
                if health.is_ok() {
                    health.status.green()
                } else {
                    health.status.yellow()
                }
            );
            Ok(())
        }
        Err(e) => Err(CliError::CommandError(format!(
            "Backend at {} is unreachable: {}",
            backend.base_url(),
            e
        ))),
    }
}
