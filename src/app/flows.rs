//! Shorten and analytics flows
//!
//! Each flow is split in two so an event-loop front-end can run the network
//! call on a background task:
//!
//! 1. `begin_*`: local validation, enter Loading, hand back the request and
//!    its ticket (or `None` when validation rejected the input)
//! 2. `finish_*`: apply the backend's answer, unless a newer submission of
//!    the same flow has been issued since
//!
//! `submit_*` chains both for callers that can simply await.

use tracing::debug;

use super::input::extract_short_code;
use super::notify::Notifier;
use super::state::{AppState, Ticket};
use crate::client::{ClientError, LinkBackend};
use crate::models::{AnalyticsResult, ShortenRequest, ShortenResult};

/// User-facing notification texts
pub mod messages {
    pub const EMPTY_URL: &str = "Please enter a URL!";
    pub const URL_SCHEME: &str = "URL must start with http:// or https://";
    pub const SHORTEN_OK: &str = "URL shortened successfully!";
    pub const SHORTEN_FALLBACK: &str = "Something went wrong!";
    pub const EMPTY_CODE: &str = "Please enter a short code!";
    pub const ANALYTICS_FALLBACK: &str = "Short URL not found!";
    pub const COPIED: &str = "Copied to clipboard!";
}

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Local validation failed, nothing was sent
    Rejected,
    Succeeded,
    Failed,
    /// A newer submission superseded this one; its answer was dropped
    Stale,
}

impl FlowOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, FlowOutcome::Succeeded)
    }
}

/// A validated shorten submission waiting to be sent
#[derive(Debug, Clone)]
pub struct PendingShorten {
    pub ticket: Ticket,
    pub request: ShortenRequest,
}

/// A validated analytics lookup waiting to be sent
#[derive(Debug, Clone)]
pub struct PendingAnalytics {
    pub ticket: Ticket,
    pub code: String,
}

impl AppState {
    /// Validate the shorten form and enter Loading
    pub fn begin_shorten(&mut self, notifier: &mut dyn Notifier) -> Option<PendingShorten> {
        let form = &self.shorten_form;

        if form.url.trim().is_empty() {
            notifier.error(messages::EMPTY_URL);
            return None;
        }
        if !form.url.starts_with("http") {
            notifier.error(messages::URL_SCHEME);
            return None;
        }

        let alias = form.custom_alias();
        let request = ShortenRequest {
            original_url: form.url.clone(),
            custom_alias: (!alias.is_empty()).then(|| alias.to_string()),
            expiry_days: form.expiry,
        };

        let ticket = self.shorten.begin();
        debug!(
            "Shorten #{} dispatched: url={}, alias={:?}, expiry_days={}",
            ticket.id(),
            request.original_url,
            request.custom_alias,
            request.expiry_days.days()
        );
        Some(PendingShorten { ticket, request })
    }

    /// Apply the backend's answer to a shorten submission
    pub fn finish_shorten(
        &mut self,
        ticket: Ticket,
        response: Result<ShortenResult, ClientError>,
        notifier: &mut dyn Notifier,
    ) -> FlowOutcome {
        match response {
            Ok(result) => {
                if !self.shorten.settle(ticket, Some(result)) {
                    debug!("Dropping stale shorten response #{}", ticket.id());
                    return FlowOutcome::Stale;
                }
                notifier.success(messages::SHORTEN_OK);
                FlowOutcome::Succeeded
            }
            Err(err) => {
                if !self.shorten.settle(ticket, None) {
                    debug!("Dropping stale shorten failure #{}: {}", ticket.id(), err);
                    return FlowOutcome::Stale;
                }
                debug!("Shorten #{} failed: {}", ticket.id(), err);
                notifier.error(&err.user_message(messages::SHORTEN_FALLBACK));
                FlowOutcome::Failed
            }
        }
    }

    /// Validate, send and apply in one go
    pub async fn submit_shorten(
        &mut self,
        backend: &dyn LinkBackend,
        notifier: &mut dyn Notifier,
    ) -> FlowOutcome {
        let Some(pending) = self.begin_shorten(notifier) else {
            return FlowOutcome::Rejected;
        };
        let response = backend.shorten(&pending.request).await;
        self.finish_shorten(pending.ticket, response, notifier)
    }

    /// Validate the analytics form and enter Loading
    pub fn begin_analytics(&mut self, notifier: &mut dyn Notifier) -> Option<PendingAnalytics> {
        if self.analytics_form.code.trim().is_empty() {
            notifier.error(messages::EMPTY_CODE);
            return None;
        }
        // A pasted URL ending in '/' leaves no code to look up.
        let Some(code) = extract_short_code(&self.analytics_form.code) else {
            notifier.error(messages::EMPTY_CODE);
            return None;
        };
        let code = code.to_string();

        let ticket = self.analytics.begin();
        debug!("Analytics #{} dispatched for code '{}'", ticket.id(), code);
        Some(PendingAnalytics { ticket, code })
    }

    /// Apply the backend's answer to an analytics lookup
    pub fn finish_analytics(
        &mut self,
        ticket: Ticket,
        response: Result<AnalyticsResult, ClientError>,
        notifier: &mut dyn Notifier,
    ) -> FlowOutcome {
        match response {
            Ok(result) => {
                if !self.analytics.settle(ticket, Some(result)) {
                    debug!("Dropping stale analytics response #{}", ticket.id());
                    return FlowOutcome::Stale;
                }
                FlowOutcome::Succeeded
            }
            Err(err) => {
                if !self.analytics.settle(ticket, None) {
                    debug!("Dropping stale analytics failure #{}: {}", ticket.id(), err);
                    return FlowOutcome::Stale;
                }
                debug!("Analytics #{} failed: {}", ticket.id(), err);
                notifier.error(&err.user_message(messages::ANALYTICS_FALLBACK));
                FlowOutcome::Failed
            }
        }
    }

    /// Validate, send and apply in one go
    pub async fn submit_analytics(
        &mut self,
        backend: &dyn LinkBackend,
        notifier: &mut dyn Notifier,
    ) -> FlowOutcome {
        let Some(pending) = self.begin_analytics(notifier) else {
            return FlowOutcome::Rejected;
        };
        let response = backend.analytics(&pending.code).await;
        self.finish_analytics(pending.ticket, response, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RecordingNotifier;
    use crate::models::ExpiryOption;
    use chrono::Utc;

    fn sample_result(code: &str) -> ShortenResult {
        ShortenResult {
            short_code: code.to_string(),
            short_url: format!("http://localhost:8000/{}", code),
            original_url: "https://a.co/x".to_string(),
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.shorten_form.url = "   ".to_string();
        assert!(state.begin_shorten(&mut n).is_none());
        assert_eq!(n.errors(), vec!["Please enter a URL!"]);
        assert!(!state.shorten.is_loading());
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.shorten_form.url = "example.com".to_string();
        assert!(state.begin_shorten(&mut n).is_none());
        assert_eq!(n.errors(), vec!["URL must start with http:// or https://"]);
    }

    #[test]
    fn test_request_built_from_form() {
        let mut state = AppState::new(ExpiryOption::ThirtyDays);
        let mut n = RecordingNotifier::new();
        state.shorten_form.url = "https://a.co/x".to_string();
        let pending = state.begin_shorten(&mut n).unwrap();
        assert_eq!(pending.request.original_url, "https://a.co/x");
        assert_eq!(pending.request.custom_alias, None);
        assert_eq!(pending.request.expiry_days, ExpiryOption::ThirtyDays);
        assert!(state.shorten.is_loading());
        assert!(n.notifications.is_empty());

        state.shorten_form.set_custom_alias("my link");
        state.shorten_form.expiry = ExpiryOption::OneDay;
        let pending = state.begin_shorten(&mut n).unwrap();
        assert_eq!(pending.request.custom_alias.as_deref(), Some("mylink"));
        assert_eq!(pending.request.expiry_days.days(), 1);
    }

    #[test]
    fn test_finish_shorten_success_and_failure() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.shorten_form.url = "https://a.co/x".to_string();

        let p = state.begin_shorten(&mut n).unwrap();
        let outcome = state.finish_shorten(p.ticket, Ok(sample_result("abc")), &mut n);
        assert_eq!(outcome, FlowOutcome::Succeeded);
        assert_eq!(n.successes(), vec!["URL shortened successfully!"]);
        assert_eq!(state.shorten.result().unwrap().short_code, "abc");

        let p = state.begin_shorten(&mut n).unwrap();
        let outcome = state.finish_shorten(
            p.ticket,
            Err(ClientError::Rejected {
                status: 400,
                detail: Some("alias taken".into()),
            }),
            &mut n,
        );
        assert_eq!(outcome, FlowOutcome::Failed);
        assert_eq!(n.errors(), vec!["alias taken"]);
        assert!(!state.shorten.is_loading());
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.shorten_form.url = "https://a.co/x".to_string();
        let first = state.begin_shorten(&mut n).unwrap();
        let second = state.begin_shorten(&mut n).unwrap();

        let outcome = state.finish_shorten(second.ticket, Ok(sample_result("new")), &mut n);
        assert_eq!(outcome, FlowOutcome::Succeeded);
        let outcome = state.finish_shorten(
            first.ticket,
            Err(ClientError::Transport("late".into())),
            &mut n,
        );
        assert_eq!(outcome, FlowOutcome::Stale);
        assert!(n.errors().is_empty());
        assert_eq!(state.shorten.result().unwrap().short_code, "new");
    }

    #[test]
    fn test_analytics_code_extraction() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.analytics_form.code = "http://localhost:8000/abc123".to_string();
        let pending = state.begin_analytics(&mut n).unwrap();
        assert_eq!(pending.code, "abc123");
    }

    #[test]
    fn test_analytics_empty_rejected() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        assert!(state.begin_analytics(&mut n).is_none());
        state.analytics_form.code = "http://localhost:8000/".to_string();
        assert!(state.begin_analytics(&mut n).is_none());
        assert_eq!(
            n.errors(),
            vec!["Please enter a short code!", "Please enter a short code!"]
        );
        assert!(!state.analytics.is_loading());
    }

    #[test]
    fn test_analytics_failure_fallback() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.analytics_form.code = "nope".to_string();
        let p = state.begin_analytics(&mut n).unwrap();
        let outcome = state.finish_analytics(
            p.ticket,
            Err(ClientError::Rejected {
                status: 500,
                detail: None,
            }),
            &mut n,
        );
        assert_eq!(outcome, FlowOutcome::Failed);
        assert_eq!(n.errors(), vec!["Short URL not found!"]);
    }

    #[test]
    fn test_flows_are_independent() {
        let mut state = AppState::default();
        let mut n = RecordingNotifier::new();
        state.shorten_form.url = "https://a.co/x".to_string();
        state.analytics_form.code = "abc".to_string();

        let s = state.begin_shorten(&mut n).unwrap();
        let a = state.begin_analytics(&mut n).unwrap();
        assert!(state.shorten.is_loading());
        assert!(state.analytics.is_loading());

        state.finish_shorten(s.ticket, Ok(sample_result("abc")), &mut n);
        assert!(!state.shorten.is_loading());
        assert!(state.analytics.is_loading());
        assert!(state.analytics.is_current(a.ticket));
    }
}
