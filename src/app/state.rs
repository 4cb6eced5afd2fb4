//! App state definition and basic state management

use crate::models::{AnalyticsResult, ExpiryOption, ShortenResult};

use super::input::strip_whitespace;

/// 当前标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Shorten,
    Analytics,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Shorten, Self::Analytics];

    pub fn toggle(self) -> Self {
        match self {
            Self::Shorten => Self::Analytics,
            Self::Analytics => Self::Shorten,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Shorten => "Shorten URL",
            Self::Analytics => "Analytics",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Shorten => 0,
            Self::Analytics => 1,
        }
    }
}

/// Identifies one submission of a flow
///
/// Tickets grow monotonically per flow; only the response to the most
/// recent ticket may touch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Idle → Loading → {result | error} per flow
#[derive(Debug, Clone)]
pub struct FlowState<T> {
    loading: bool,
    result: Option<T>,
    latest: u64,
}

impl<T> Default for FlowState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            result: None,
            latest: 0,
        }
    }
}

impl<T> FlowState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Enter Loading: issue a new ticket and drop the previous result
    pub(crate) fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.result = None;
        Ticket(self.latest)
    }

    /// Leave Loading for `ticket`
    ///
    /// `Some` replaces the result, `None` (a failure) keeps whatever is there.
    /// Returns `false` and changes nothing when `ticket` has been superseded.
    pub(crate) fn settle(&mut self, ticket: Ticket, result: Option<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        if let Some(result) = result {
            self.result = Some(result);
        }
        true
    }
}

/// 缩短表单
#[derive(Debug, Clone, Default)]
pub struct ShortenForm {
    pub url: String,
    custom_alias: String,
    pub expiry: ExpiryOption,
}

impl ShortenForm {
    pub fn new(expiry: ExpiryOption) -> Self {
        Self {
            expiry,
            ..Default::default()
        }
    }

    pub fn custom_alias(&self) -> &str {
        &self.custom_alias
    }

    /// Replace the alias; whitespace is stripped
    pub fn set_custom_alias(&mut self, raw: &str) {
        self.custom_alias = strip_whitespace(raw);
    }

    /// Append one typed character; whitespace is ignored
    pub fn push_alias_char(&mut self, c: char) {
        if !c.is_whitespace() {
            self.custom_alias.push(c);
        }
    }

    pub fn pop_alias_char(&mut self) {
        self.custom_alias.pop();
    }
}

/// 统计查询表单
#[derive(Debug, Clone, Default)]
pub struct AnalyticsForm {
    pub code: String,
}

/// Result currently on screen, decided by the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleResult<'a> {
    Shorten(&'a ShortenResult),
    Analytics(&'a AnalyticsResult),
    Nothing,
}

/// All state of the single view; discarded when the session ends
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub active_tab: Tab,
    pub shorten_form: ShortenForm,
    pub analytics_form: AnalyticsForm,
    pub shorten: FlowState<ShortenResult>,
    pub analytics: FlowState<AnalyticsResult>,
}

impl AppState {
    pub fn new(default_expiry: ExpiryOption) -> Self {
        Self {
            shorten_form: ShortenForm::new(default_expiry),
            ..Default::default()
        }
    }

    pub fn switch_tab(&mut self) {
        self.active_tab = self.active_tab.toggle();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// At most one result is shown: the one belonging to the active tab
    pub fn visible_result(&self) -> VisibleResult<'_> {
        match self.active_tab {
            Tab::Shorten => self
                .shorten
                .result()
                .map_or(VisibleResult::Nothing, VisibleResult::Shorten),
            Tab::Analytics => self
                .analytics
                .result()
                .map_or(VisibleResult::Nothing, VisibleResult::Analytics),
        }
    }

    /// Whether the active tab's flow is waiting on the backend
    pub fn active_flow_loading(&self) -> bool {
        match self.active_tab {
            Tab::Shorten => self.shorten.is_loading(),
            Tab::Analytics => self.analytics.is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_toggle() {
        assert_eq!(Tab::Shorten.toggle(), Tab::Analytics);
        assert_eq!(Tab::Analytics.toggle(), Tab::Shorten);
        assert_eq!(Tab::default(), Tab::Shorten);
    }

    #[test]
    fn test_flow_begin_clears_result_and_sets_loading() {
        let mut flow: FlowState<u32> = FlowState::new();
        let t1 = flow.begin();
        assert!(flow.settle(t1, Some(1)));
        assert_eq!(flow.result(), Some(&1));

        let t2 = flow.begin();
        assert!(flow.is_loading());
        assert_eq!(flow.result(), None);
        assert!(t2 > t1);
    }

    #[test]
    fn test_flow_failure_keeps_result() {
        let mut flow: FlowState<u32> = FlowState::new();
        let t = flow.begin();
        assert!(flow.settle(t, None));
        assert!(!flow.is_loading());
        assert_eq!(flow.result(), None);
    }

    #[test]
    fn test_flow_stale_ticket_is_ignored() {
        let mut flow: FlowState<u32> = FlowState::new();
        let first = flow.begin();
        let second = flow.begin();

        assert!(flow.settle(second, Some(2)));
        assert!(!flow.settle(first, Some(1)));
        assert_eq!(flow.result(), Some(&2));
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut flow: FlowState<u32> = FlowState::new();
        let first = flow.begin();
        let _second = flow.begin();
        assert!(!flow.settle(first, Some(1)));
        assert!(flow.is_loading());
    }

    #[test]
    fn test_alias_whitespace_stripped() {
        let mut form = ShortenForm::default();
        form.set_custom_alias(" my alias ");
        assert_eq!(form.custom_alias(), "myalias");
        form.push_alias_char(' ');
        form.push_alias_char('x');
        assert_eq!(form.custom_alias(), "myaliasx");
        form.pop_alias_char();
        assert_eq!(form.custom_alias(), "myalias");
    }

    #[test]
    fn test_new_uses_default_expiry() {
        let state = AppState::new(ExpiryOption::SevenDays);
        assert_eq!(state.shorten_form.expiry, ExpiryOption::SevenDays);
        assert_eq!(state.active_tab, Tab::Shorten);
        assert_eq!(state.visible_result(), VisibleResult::Nothing);
    }
}
