mod r#impl;
mod structs;

pub use r#impl::init_config_with;
pub use structs::*;
