//! SnapLink - terminal client for a URL shortening service
//!
//! Shorten long URLs (optional custom alias, fixed expiry choices) and look
//! up click analytics for a short code, from a TUI or one-shot commands.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `models`: Wire types exchanged with the backend
//! - `client`: Backend collaborator (`LinkBackend`, HTTP implementation)
//! - `app`: UI-agnostic state, flows and display helpers
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Startup and execution modes
//! - `system`: Logging and panic reporting

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod runtime;
pub mod system;
