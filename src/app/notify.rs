//! Notification capability
//!
//! Flows report outcomes through `notify(kind, message)`; how that is shown
//! (status bar toast, colored stderr line) is the front-end's business.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);

    fn success(&mut self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }
}

/// Keeps every notification in memory, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages_of(NotificationKind::Error)
    }

    pub fn successes(&self) -> Vec<&str> {
        self.messages_of(NotificationKind::Success)
    }

    fn messages_of(&self, kind: NotificationKind) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notifications.push(Notification {
            kind,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_splits_by_kind() {
        let mut n = RecordingNotifier::new();
        n.success("done");
        n.error("oops");
        n.notify(NotificationKind::Error, "again");
        assert_eq!(n.successes(), vec!["done"]);
        assert_eq!(n.errors(), vec!["oops", "again"]);
        assert_eq!(n.last().map(|l| l.message.as_str()), Some("again"));
    }
}
