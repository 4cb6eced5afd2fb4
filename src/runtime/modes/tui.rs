//! TUI mode
//!
//! Builds the HTTP backend from configuration and hands it to the terminal UI.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::client::{HttpBackend, LinkBackend};
use crate::config::StaticConfig;

/// Run TUI mode
pub async fn run_tui(config: &StaticConfig) -> Result<()> {
    let backend: Arc<dyn LinkBackend> = Arc::new(HttpBackend::from_config(&config.backend));
    crate::interfaces::tui::run_tui(config, backend)
        .await
        .context("Terminal UI failed")
}
