//! CLI command implementations

mod analytics;
mod config_gen;
mod helpers;
mod shorten;
mod status;

pub use analytics::analytics;
pub use config_gen::config_generate;
pub use shorten::shorten;
pub use status::backend_status;
