// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Receiving the directory load and updating the display

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod pointer;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::source::{self, SourceState};
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::oneshot;

/// Run the TUI
///
/// Sets up the terminal, starts the directory load, runs the event loop
/// and restores the terminal when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let mut app = App::new(&config, log_buffer);
    let mut source_rx = Some(source::spawn_fetch(config));

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut source_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    // Listener released with the component
    app.search_bar.unmount();

    result
}

/// Main event loop
///
/// Waits on three sources at once:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner, toast expiry)
/// 3. The one-time directory load
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source_rx: &mut Option<oneshot::Receiver<SourceState>>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Directory load, at most once
            state = recv_source(source_rx) => {
                app.set_source(state);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Resolve the pending load, then never again
async fn recv_source(rx: &mut Option<oneshot::Receiver<SourceState>>) -> SourceState {
    let Some(receiver) = rx.as_mut() else {
        return std::future::pending().await;
    };
    let state = match receiver.await {
        Ok(state) => state,
        // Sender dropped without a result: the load task panicked
        Err(_) => SourceState::Failed(source::SourceError::Network(
            "directory load aborted".to_string(),
        )),
    };
    *rx = None;
    state
}

/// Handle keyboard input
/// Layered dispatch: global keys → focused panel → fallbacks
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let handled = app.dispatch_to_focused(key_event);
    if handled.was_handled() {
        return;
    }

    // Fallbacks for keys the panel did not take
    match key_event.code {
        KeyCode::Esc if app.focus == Focus::Search => app.set_focus(Focus::List),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('y') => app.copy_link(),
        _ => {}
    }
}

/// Handle global keys - returns true if handled
/// These work the same regardless of the focused panel
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Tab => {
            app.focus_next();
            true
        }
        KeyCode::BackTab => {
            app.focus_prev();
            true
        }
        KeyCode::Char('/') if !app.is_typing() => {
            app.set_focus(Focus::Search);
            true
        }
        _ => false,
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.handle_click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        MouseEventKind::ScrollDown => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        _ => {}
    }
}
