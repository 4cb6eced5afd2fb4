//! Terminal User Interface (TUI) module
//!
//! Two tabs, Shorten URL and Analytics, over the shared [`AppState`](crate::app::AppState).
//! Requests run on background tasks; their answers come back over a channel
//! and are folded in between frames, so typing and tab switches stay live
//! while a request is outstanding.

use std::io::{self, Stderr, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

mod app;
mod clipboard;
mod constants;
mod event_handler;
mod toast;
mod ui;

pub use app::{Completion, ShortenField, TuiApp};
pub use clipboard::SystemClipboard;
pub use toast::{Toast, Toasts};

use crate::client::LinkBackend;
use crate::config::StaticConfig;
use constants::TICK_MILLIS;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(config: &StaticConfig, backend: Arc<dyn LinkBackend>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match setup_terminal(io::stderr()) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(e);
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = TuiApp::new(config, backend, tx);
    info!("TUI started against {}", app.backend_name());

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Switch to the alternate screen; raw mode must already be on
fn setup_terminal<W: Write>(mut out: W) -> io::Result<Terminal<CrosstermBackend<W>>> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Best-effort terminal restore, used by the panic hook and failed setup
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    app: &mut TuiApp,
    rx: &mut UnboundedReceiver<app::Completion>,
) -> io::Result<()> {
    let tick = Duration::from_millis(TICK_MILLIS);
    loop {
        while let Ok(completion) = rx.try_recv() {
            app.apply(completion);
        }
        app.toasts.expire(Instant::now());

        terminal.draw(|f| ui(f, app))?;

        // Poll with a timeout so background answers get drawn without a key press
        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            return Ok(());
        }

        // Let spawned requests make progress on this worker as well
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_setup_failure_is_reported_and_restore_is_safe() {
        let err = setup_terminal(ClosedOutput).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // 失败路径上的恢复不能再出错
        restore_terminal();
        restore_terminal();
    }
}
