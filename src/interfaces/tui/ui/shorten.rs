use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use super::common::detail_lines;
use super::widgets::InputField;
use crate::app::{VisibleResult, display};
use crate::interfaces::tui::app::{ShortenField, TuiApp};
use crate::interfaces::tui::constants::{ALIAS_PREFIX, URL_TRUNCATE_LENGTH, busy_text, colors};
use crate::models::{ExpiryOption, ShortenResult};

pub fn draw_shorten_tab(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL
            Constraint::Length(3), // Alias
            Constraint::Length(3), // Expiry
            Constraint::Length(1), // Submit
            Constraint::Min(6),    // Result
        ])
        .split(area);

    let form = &app.state.shorten_form;
    InputField::new("Enter your long URL", &form.url)
        .active(app.focus == ShortenField::Url)
        .placeholder("https://example.com/very/long/url")
        .required()
        .render(frame, chunks[0]);

    InputField::new("Custom Alias", form.custom_alias())
        .active(app.focus == ShortenField::Alias)
        .prefix(ALIAS_PREFIX)
        .placeholder("optional")
        .render(frame, chunks[1]);

    draw_expiry_selector(frame, form.expiry, app.focus == ShortenField::Expiry, chunks[2]);
    draw_submit_hint(frame, app.state.shorten.is_loading(), chunks[3]);

    if let VisibleResult::Shorten(result) = app.state.visible_result() {
        draw_result(frame, result, chunks[4]);
    }
}

fn draw_expiry_selector(frame: &mut Frame, selected: ExpiryOption, active: bool, area: Rect) {
    let mut spans = Vec::new();
    for (i, option) in ExpiryOption::iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if option == selected {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::PRIMARY)
                .bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
    }

    let border_style = if active {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    } else {
        Style::default().fg(Color::White)
    };

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Link Expiry")
            .border_style(border_style),
    );
    frame.render_widget(selector, area);
}

fn draw_submit_hint(frame: &mut Frame, loading: bool, area: Rect) {
    let line = if loading {
        Line::from(Span::styled(
            busy_text::SHORTENING,
            Style::default().fg(colors::WARNING).add_modifier(Modifier::SLOW_BLINK),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" Shorten URL", Style::default().fg(Color::White)),
        ])
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_result(frame: &mut Frame, result: &ShortenResult, area: Rect) {
    let mut rows = display::shorten_rows(result);
    for row in rows.iter_mut().filter(|r| r.label == "Original URL") {
        row.value = display::truncate(&row.value, URL_TRUNCATE_LENGTH);
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                result.short_url.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled("   [Ctrl+Y] Copy", Style::default().fg(colors::WARNING)),
        ]),
        Line::from(""),
    ];
    lines.extend(detail_lines(&rows));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Your Short Link")
                .border_style(Style::default().fg(colors::SUCCESS)),
        );
    frame.render_widget(panel, area);
}
