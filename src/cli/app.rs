//! Terminal host for the clock.
//!
//! Owns the terminal, feeds keyboard/mouse events and timer fires into a
//! single [`TimerEngine`], and redraws after every change. Everything runs
//! on one task, so the engine needs no locking.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::commands::RunArgs;
use super::config::load_config;
use crate::display::TerminalDisplay;
use crate::engine::{Dispatch, TimerEngine, TokioScheduler};
use crate::input::{from_event, Command, InputEvent};
use crate::sound::try_create_signal;
use crate::ui;

/// How long the reader thread waits for an event before checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Backend = CrosstermBackend<Stdout>;

// ============================================================================
// Terminal guard
// ============================================================================

/// Raw mode and mouse capture, switched off again on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = disable_raw_mode();
    }
}

/// Raw-mode terminal that restores itself when dropped.
///
/// Fields drop after `Drop::drop`, so raw mode is released last.
struct TerminalSession {
    terminal: Terminal<Backend>,
    display: Arc<TerminalDisplay>,
    _raw: RawModeGuard,
}

impl TerminalSession {
    fn open(display: Arc<TerminalDisplay>, windowed: bool) -> Result<Self> {
        let raw = RawModeGuard::enable()?;
        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("failed to open terminal")?;
        let mut session = Self {
            terminal,
            display,
            _raw: raw,
        };

        if !windowed {
            if let Err(e) = session.display.enter() {
                warn!("Starting windowed: {}", e);
            }
        }

        session.terminal.hide_cursor()?;
        session.terminal.clear()?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        if let Err(e) = self.display.leave() {
            warn!("Failed to leave alternate screen: {}", e);
        }
    }
}

// ============================================================================
// Event reader
// ============================================================================

/// Reads crossterm events on a blocking thread until the receiver goes away.
fn spawn_input_reader(tx: mpsc::UnboundedSender<InputEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("Event poll failed: {}", e);
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    warn!("Event read failed: {}", e);
                    break;
                }
            };
            if let Some(input) = from_event(&event) {
                if tx.send(input).is_err() {
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    });
}

// ============================================================================
// Run loop
// ============================================================================

/// Runs the clock until the user quits.
pub async fn run(args: &RunArgs) -> Result<()> {
    let base = load_config(args.config.as_deref())?;
    let config = args.apply(base);
    config.validate().map_err(anyhow::Error::msg)?;

    let (fired_tx, mut fired_rx) = mpsc::unbounded_channel();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();

    let display = Arc::new(TerminalDisplay::new());
    let mut engine =
        TimerEngine::new(config, TokioScheduler::new(fired_tx)).with_display(display.clone());
    if let Some(sound) = try_create_signal(args.no_sound) {
        engine = engine.with_sound(sound);
    }

    let mut session = TerminalSession::open(display, args.windowed)?;
    spawn_input_reader(input_tx);
    info!(mode = engine.get_state().mode.as_str(), "Clock started");

    loop {
        let snapshot = engine.snapshot();
        session
            .terminal
            .draw(|frame| ui::render(frame, &snapshot))
            .context("failed to draw")?;

        tokio::select! {
            Some(fired) = fired_rx.recv() => engine.on_fired(fired),
            input = input_rx.recv() => match input {
                Some(InputEvent::Key(key)) => match engine.handle_key(key) {
                    Dispatch::Quit => break,
                    Dispatch::Handled(Command::ToggleFullscreen) => {
                        // The screen buffer changed under ratatui; force a full repaint.
                        session.terminal.clear()?;
                    }
                    Dispatch::Handled(_) | Dispatch::Ignored => {}
                },
                Some(InputEvent::PointerMoved) => engine.pointer_moved(),
                Some(InputEvent::Resize) => {}
                None => break,
            },
        }
    }

    if let Ok(json) = serde_json::to_string(&engine.snapshot()) {
        debug!(%json, "Final snapshot");
    }
    info!(seconds = engine.get_state().seconds, "Clock stopped");
    Ok(())
}
