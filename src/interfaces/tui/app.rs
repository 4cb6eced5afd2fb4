//! TUI application state
//!
//! Wraps the shared [`AppState`] with everything only the terminal needs:
//! field focus, toasts, the help overlay, and the channel through which
//! background requests hand their answers back to the event loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::clipboard::SystemClipboard;
use super::toast::Toasts;
use crate::app::{
    AppState, Clipboard, FlowOutcome, Tab, Ticket, VisibleResult, copy_to_clipboard,
};
use crate::client::{ClientError, LinkBackend};
use crate::config::StaticConfig;
use crate::models::{AnalyticsResult, ShortenResult};

/// Answer of a background request, delivered to the event loop
#[derive(Debug)]
pub enum Completion {
    Shorten(Ticket, Result<ShortenResult, ClientError>),
    Analytics(Ticket, Result<AnalyticsResult, ClientError>),
}

/// Input field with keyboard focus on the shorten tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortenField {
    #[default]
    Url,
    Alias,
    Expiry,
}

impl ShortenField {
    pub fn next(self) -> Self {
        match self {
            Self::Url => Self::Alias,
            Self::Alias => Self::Expiry,
            Self::Expiry => Self::Url,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Url => Self::Expiry,
            Self::Alias => Self::Url,
            Self::Expiry => Self::Alias,
        }
    }
}

pub struct TuiApp {
    pub state: AppState,
    pub focus: ShortenField,
    pub toasts: Toasts,
    pub show_help: bool,
    pub expiring_soon_days: i64,
    backend: Arc<dyn LinkBackend>,
    clipboard: Box<dyn Clipboard>,
    tx: UnboundedSender<Completion>,
}

impl TuiApp {
    pub fn new(
        config: &StaticConfig,
        backend: Arc<dyn LinkBackend>,
        tx: UnboundedSender<Completion>,
    ) -> Self {
        Self::with_clipboard(config, backend, Box::new(SystemClipboard::new()), tx)
    }

    pub fn with_clipboard(
        config: &StaticConfig,
        backend: Arc<dyn LinkBackend>,
        clipboard: Box<dyn Clipboard>,
        tx: UnboundedSender<Completion>,
    ) -> Self {
        Self {
            state: AppState::new(config.default_expiry()),
            focus: ShortenField::default(),
            toasts: Toasts::new(Duration::from_millis(config.ui.toast_millis)),
            show_help: false,
            expiring_soon_days: config.ui.expiring_soon_days,
            backend,
            clipboard,
            tx,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Submit the form of the active tab
    ///
    /// Ignored while that tab's request is still outstanding.
    pub fn submit(&mut self) {
        if self.state.active_flow_loading() {
            debug!("Submit ignored: {:?} request in flight", self.state.active_tab);
            return;
        }
        match self.state.active_tab {
            Tab::Shorten => self.dispatch_shorten(),
            Tab::Analytics => self.dispatch_analytics(),
        }
    }

    fn dispatch_shorten(&mut self) {
        let Some(pending) = self.state.begin_shorten(&mut self.toasts) else {
            return;
        };
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let response = backend.shorten(&pending.request).await;
            if tx.send(Completion::Shorten(pending.ticket, response)).is_err() {
                debug!("Shorten #{} finished after the UI closed", pending.ticket.id());
            }
        });
    }

    fn dispatch_analytics(&mut self) {
        let Some(pending) = self.state.begin_analytics(&mut self.toasts) else {
            return;
        };
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let response = backend.analytics(&pending.code).await;
            if tx.send(Completion::Analytics(pending.ticket, response)).is_err() {
                debug!("Analytics #{} finished after the UI closed", pending.ticket.id());
            }
        });
    }

    /// Fold a background answer into the state
    pub fn apply(&mut self, completion: Completion) -> FlowOutcome {
        let (flow, outcome) = match completion {
            Completion::Shorten(ticket, response) => (
                Tab::Shorten,
                self.state.finish_shorten(ticket, response, &mut self.toasts),
            ),
            Completion::Analytics(ticket, response) => (
                Tab::Analytics,
                self.state.finish_analytics(ticket, response, &mut self.toasts),
            ),
        };
        if outcome == FlowOutcome::Failed {
            warn!("{} request failed", flow.title());
        }
        outcome
    }

    /// Copy the short link of the result on screen, from either tab
    pub fn copy_short_url(&mut self) {
        let text = match self.state.visible_result() {
            VisibleResult::Shorten(result) => result.short_url.clone(),
            VisibleResult::Analytics(result) => result.short_url.clone(),
            VisibleResult::Nothing => return,
        };
        copy_to_clipboard(&text, self.clipboard.as_mut(), &mut self.toasts);
    }

    pub fn switch_tab(&mut self) {
        self.state.switch_tab();
    }
}
