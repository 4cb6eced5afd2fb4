use std::sync::{Arc, OnceLock};

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Initialize the global configuration from `config.toml` (or an explicit
/// file path) and the environment, then let the caller apply command-line
/// overrides before it is frozen.
///
/// The first successful call wins; later calls return the already-loaded
/// configuration, so the backend address stays fixed for the lifetime of the
/// process.
pub fn init_config_with(
    path: Option<&str>,
    customize: impl FnOnce(&mut StaticConfig),
) -> Result<Arc<StaticConfig>> {
    if let Some(existing) = CONFIG.get() {
        return Ok(existing.clone());
    }

    let mut config = StaticConfig::load(path)?;
    customize(&mut config);
    config.normalize();
    config.validate()?;

    Ok(CONFIG.get_or_init(|| Arc::new(config)).clone())
}
