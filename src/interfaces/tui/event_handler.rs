//! Event handling for TUI
//!
//! Global shortcuts first, then keys routed to the focused field of the
//! active tab.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ShortenField, TuiApp};
use crate::app::Tab;

/// Handle one key press; returns `true` when the app should exit
pub fn handle_key_event(app: &mut TuiApp, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::F(1) => app.show_help = true,
        KeyCode::F(2) => app.switch_tab(),
        KeyCode::Char('t') if ctrl => app.switch_tab(),
        KeyCode::Char('y') if ctrl => app.copy_short_url(),
        KeyCode::Enter => app.submit(),
        _ => match app.state.active_tab {
            Tab::Shorten => handle_shorten_tab(app, key),
            Tab::Analytics => handle_analytics_tab(app, key),
        },
    }
    false
}

fn handle_shorten_tab(app: &mut TuiApp, key: KeyEvent) {
    let form = &mut app.state.shorten_form;
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Left if app.focus == ShortenField::Expiry => form.expiry = form.expiry.prev(),
        KeyCode::Right if app.focus == ShortenField::Expiry => form.expiry = form.expiry.next(),
        KeyCode::Char(c) if is_plain(key) => match app.focus {
            ShortenField::Url => form.url.push(c),
            ShortenField::Alias => form.push_alias_char(c),
            ShortenField::Expiry => {}
        },
        KeyCode::Backspace => match app.focus {
            ShortenField::Url => {
                form.url.pop();
            }
            ShortenField::Alias => form.pop_alias_char(),
            ShortenField::Expiry => {}
        },
        _ => {}
    }
}

fn handle_analytics_tab(app: &mut TuiApp, key: KeyEvent) {
    let code = &mut app.state.analytics_form.code;
    match key.code {
        KeyCode::Char(c) if is_plain(key) => code.push(c),
        KeyCode::Backspace => {
            code.pop();
        }
        _ => {}
    }
}

/// A character typed without Ctrl/Alt (Shift is part of the character)
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpBackend;
    use crate::config::StaticConfig;
    use crate::models::ExpiryOption;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn make_app() -> TuiApp {
        let (tx, _rx) = mpsc::unbounded_channel();
        TuiApp::new(
            &StaticConfig::default(),
            Arc::new(HttpBackend::new("http://127.0.0.1:9", None)),
            tx,
        )
    }

    fn press(app: &mut TuiApp, code: KeyCode) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = make_app();
        type_text(&mut app, "https://a.co");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "my link");
        assert_eq!(app.state.shorten_form.url, "https://a.co");
        assert_eq!(app.state.shorten_form.custom_alias(), "mylink");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.shorten_form.custom_alias(), "mylin");
    }

    #[test]
    fn test_expiry_cycles_only_when_focused() {
        let mut app = make_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.shorten_form.expiry, ExpiryOption::ThirtyDays);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, ShortenField::Expiry);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.shorten_form.expiry, ExpiryOption::NinetyDays);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.shorten_form.expiry, ExpiryOption::SevenDays);
    }

    #[test]
    fn test_tab_switch_and_analytics_input() {
        let mut app = make_app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.state.active_tab, Tab::Analytics);
        type_text(&mut app, "abc123");
        assert_eq!(app.state.analytics_form.code, "abc123");
        assert!(app.state.shorten_form.url.is_empty());

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.state.active_tab, Tab::Shorten);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = make_app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert!(app.state.shorten_form.url.is_empty());
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.show_help);
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = make_app();
        assert!(handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ));
    }
}
