//! Clipboard capability

use tracing::warn;

use super::flows::messages;
use super::notify::Notifier;
use crate::errors::SnaplinkError;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), SnaplinkError>;
}

/// Write `text` to the clipboard and confirm with a notification
///
/// A failing clipboard is reported as an error notification; there is no
/// return value for callers to handle.
pub fn copy_to_clipboard(text: &str, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) {
    match clipboard.set_text(text) {
        Ok(()) => notifier.success(messages::COPIED),
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            notifier.error(&e.format_simple());
        }
    }
}
