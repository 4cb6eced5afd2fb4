//! Transient notifications shown in the status bar

use std::time::{Duration, Instant};

use crate::app::{NotificationKind, Notifier};

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: NotificationKind,
    pub message: String,
    shown_at: Instant,
}

/// Holds the most recent notification until it times out
///
/// A new notification replaces the one on screen.
#[derive(Debug)]
pub struct Toasts {
    current: Option<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once it has been visible for the configured time
    pub fn expire(&mut self, now: Instant) {
        if let Some(toast) = &self.current
            && now.saturating_duration_since(toast.shown_at) >= self.ttl
        {
            self.current = None;
        }
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.current = Some(Toast {
            kind,
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_toast_wins() {
        let mut toasts = Toasts::new(Duration::from_secs(3));
        toasts.success("first");
        toasts.error("second");
        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "second");
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        toasts.success("done");
        let shown = Instant::now();

        toasts.expire(shown);
        assert!(toasts.current().is_some());

        toasts.expire(shown + Duration::from_secs(10));
        assert!(toasts.current().is_none());
    }
}
