use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SHORTCUTS: &[(&str, &str)] = &[
    ("F2 / Ctrl+T", "Switch between Shorten URL and Analytics"),
    ("Tab / Shift+Tab", "Move between fields"),
    ("← / →", "Change link expiry"),
    ("Enter", "Submit the active form"),
    ("Ctrl+Y", "Copy the short link on screen"),
    ("F1", "Toggle this help"),
    ("Esc / Ctrl+C", "Quit"),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner = Popup::new(" Help ", popup::HELP)
        .theme_color(colors::PRIMARY)
        .render(frame, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard shortcuts",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(""),
    ];
    for (key, desc) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", key), Style::default().fg(colors::WARNING)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Whitespace typed into the alias is dropped. Analytics accepts a bare code or a pasted short URL.",
        Style::default().fg(colors::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
