//! System clipboard backed by arboard

use tracing::debug;

use crate::app::Clipboard;
use crate::errors::SnaplinkError;

/// Lazily opened system clipboard
///
/// The handle is kept for the whole session: on X11 the copied text is only
/// served while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), SnaplinkError> {
        if self.inner.is_none() {
            let opened = arboard::Clipboard::new()
                .map_err(|e| SnaplinkError::clipboard(format!("Clipboard unavailable: {}", e)))?;
            debug!("System clipboard opened");
            self.inner = Some(opened);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| SnaplinkError::clipboard(e.to_string())),
            None => Err(SnaplinkError::clipboard("Clipboard unavailable")),
        }
    }
}
