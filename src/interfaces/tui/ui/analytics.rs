use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::common::detail_lines;
use super::widgets::InputField;
use crate::app::{VisibleResult, display};
use crate::interfaces::tui::app::TuiApp;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, busy_text, colors};
use crate::models::AnalyticsResult;

pub fn draw_analytics_tab(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Code
            Constraint::Length(1), // Submit
            Constraint::Min(8),    // Result
        ])
        .split(area);

    InputField::new("Enter short code or URL", &app.state.analytics_form.code)
        .active(true)
        .placeholder("abc123 or http://localhost:8000/abc123")
        .render(frame, chunks[0]);

    let hint = if app.state.analytics.is_loading() {
        Line::from(Span::styled(
            busy_text::FETCHING,
            Style::default().fg(colors::WARNING).add_modifier(Modifier::SLOW_BLINK),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" Get Analytics", Style::default().fg(Color::White)),
        ])
    };
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[1]);

    if let VisibleResult::Analytics(result) = app.state.visible_result() {
        draw_result(frame, result, app.expiring_soon_days, chunks[2]);
    }
}

fn draw_result(frame: &mut Frame, result: &AnalyticsResult, expiring_soon_days: i64, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(30)])
        .split(area);

    let clicks = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            result.click_count.to_string(),
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(Span::styled("Total Clicks", Style::default().fg(colors::MUTED))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY)),
    );
    frame.render_widget(clicks, chunks[0]);

    let mut rows = display::analytics_rows(result, Utc::now(), expiring_soon_days);
    for row in rows.iter_mut().filter(|r| r.label == "Original URL") {
        row.value = display::truncate(&row.value, URL_TRUNCATE_LENGTH);
    }

    let mut lines = detail_lines(&rows);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Ctrl+Y] Copy short URL",
        Style::default().fg(colors::WARNING),
    )));

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Link Analytics")
                .border_style(Style::default().fg(colors::SUCCESS)),
        );
    frame.render_widget(details, chunks[1]);
}
