//! Application root
//!
//! UI-agnostic state container for the two flows (shorten, analytics).
//! Front-ends (TUI, CLI) own an [`AppState`], feed it user input, and inject
//! the side-effect capabilities it needs: a [`LinkBackend`](crate::client::LinkBackend),
//! a [`Notifier`] and, for copy, a [`Clipboard`].

mod clipboard;
pub mod display;
mod flows;
pub mod input;
mod notify;
mod state;

pub use clipboard::{Clipboard, copy_to_clipboard};
pub use flows::{FlowOutcome, PendingAnalytics, PendingShorten, messages};
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier};
pub use state::{AnalyticsForm, AppState, FlowState, ShortenForm, Tab, Ticket, VisibleResult};
