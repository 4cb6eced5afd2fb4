//! Application lifecycle and execution modes

pub mod modes;
pub mod startup;
