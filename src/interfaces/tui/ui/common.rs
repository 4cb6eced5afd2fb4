use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use crate::app::display::{DetailRow, Tone};
use crate::app::{NotificationKind, Tab};
use crate::interfaces::tui::app::TuiApp;
use crate::interfaces::tui::constants::{APP_TITLE, TAGLINE, busy_text, colors};

/// Draw title bar with version and backend address
pub fn draw_title_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled(APP_TITLE, Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(TAGLINE, Style::default().fg(Color::White)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.backend_name(), Style::default().fg(Color::Yellow)),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the tab strip
pub fn draw_tabs(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let titles = Tab::ALL.iter().map(|tab| {
        let loading = match tab {
            Tab::Shorten => app.state.shorten.is_loading(),
            Tab::Analytics => app.state.analytics.is_loading(),
        };
        if loading {
            format!(" {} … ", tab.title())
        } else {
            format!(" {} ", tab.title())
        }
    });

    let tabs = Tabs::new(titles)
        .select(app.state.active_tab.index())
        .style(Style::default().fg(colors::MUTED))
        .highlight_style(
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::PRIMARY)
                .bold(),
        )
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    frame.render_widget(tabs, area);
}

/// Draw status bar: the current toast, else the active flow's progress
pub fn draw_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let (status_text, status_style) = match app.toasts.current() {
        Some(toast) if toast.kind == NotificationKind::Error => (
            format!("[ERROR] {}", toast.message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        ),
        Some(toast) => (
            format!("[SUCCESS] {}", toast.message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        ),
        None if app.state.active_flow_loading() => {
            let text = match app.state.active_tab {
                Tab::Shorten => busy_text::SHORTENING,
                Tab::Analytics => busy_text::FETCHING,
            };
            (text.to_string(), Style::default().fg(colors::WARNING))
        }
        None => ("Ready".to_string(), Style::default().fg(Color::Cyan)),
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let shortcuts = if app.show_help {
        vec![("Esc/F1", "Close", Color::Red)]
    } else {
        match app.state.active_tab {
            Tab::Shorten => vec![
                ("Tab", "Next Field", Color::Cyan),
                ("←/→", "Expiry", Color::Cyan),
                ("Enter", "Shorten", Color::Green),
                ("Ctrl+Y", "Copy", Color::Yellow),
                ("F2", "Analytics", Color::Magenta),
                ("F1", "Help", Color::Blue),
                ("Esc", "Quit", Color::Red),
            ],
            Tab::Analytics => vec![
                ("Enter", "Get Analytics", Color::Green),
                ("Ctrl+Y", "Copy", Color::Yellow),
                ("F2", "Shorten", Color::Magenta),
                ("F1", "Help", Color::Blue),
                ("Esc", "Quit", Color::Red),
            ],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Style for a value according to its tone
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default().fg(Color::White),
        Tone::Code => Style::default().fg(colors::PRIMARY),
        Tone::Success => Style::default().fg(colors::SUCCESS).bold(),
        Tone::Danger => Style::default().fg(colors::ERROR).bold(),
    }
}

/// Render rows as aligned `label  value` lines
pub fn detail_lines(rows: &[DetailRow]) -> Vec<Line<'static>> {
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", row.label, width = width),
                    Style::default().fg(colors::MUTED),
                ),
                Span::styled(row.value.clone(), tone_style(row.tone)),
            ])
        })
        .collect()
}
