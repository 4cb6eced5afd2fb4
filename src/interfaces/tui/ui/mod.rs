// UI submodules
mod analytics;
mod common;
mod help;
mod shorten;
pub mod widgets;

pub use analytics::draw_analytics_tab;
pub use common::{draw_footer, draw_status_bar, draw_tabs, draw_title_bar};
pub use help::draw_help_screen;
pub use shorten::draw_shorten_tab;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::TuiApp;
use crate::app::Tab;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Active tab
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_tabs(frame, app, chunks[1]);
    match app.state.active_tab {
        Tab::Shorten => draw_shorten_tab(frame, app, chunks[2]),
        Tab::Analytics => draw_analytics_tab(frame, app, chunks[2]),
    }
    draw_status_bar(frame, app, chunks[3]);
    draw_footer(frame, app, chunks[4]);

    if app.show_help {
        draw_help_screen(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpBackend;
    use crate::config::StaticConfig;
    use crate::models::ShortenResult;
    use chrono::Utc;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn render(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| ui(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_only_active_tab_result_is_drawn() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let backend = Arc::new(HttpBackend::new("http://localhost:8000", None));
        let mut app = TuiApp::new(&StaticConfig::default(), backend, tx);

        let ticket = app.state.shorten.begin();
        app.state.shorten.settle(
            ticket,
            Some(ShortenResult {
                short_code: "abc123".into(),
                short_url: "http://localhost:8000/abc123".into(),
                original_url: "https://a.co/x".into(),
                expires_at: None,
                created_at: Utc::now(),
            }),
        );

        assert!(render(&app).contains("Your Short Link"));

        app.switch_tab();
        assert!(!render(&app).contains("Your Short Link"));
    }
}
