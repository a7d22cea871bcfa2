//! Main Application
//!
//! The App is the single loop that owns the [`Session`]:
//! - Terminal events are translated by [`keymap`](crate::keymap)
//! - Fetch completions arrive on an mpsc channel from detached fetch tasks
//! - A 100ms tick drives the spinner
//!
//! Each event goes through `Session::handle`; the returned [`Command`] is
//! carried out here, then the frame is redrawn from the session.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use movcli_core::{spawn_fetch, Command, Config, Fetcher, Session, SessionEvent};

use crate::keymap;
use crate::render::render;
use crate::theme::Theme;

/// Spinner tick
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Fetch completion channel depth (at most one fetch is in flight)
const FETCH_CHANNEL_CAPACITY: usize = 4;

/// Main application state
pub struct App {
    /// Search state machine
    session: Session,
    theme: Theme,
    /// Performs searches off the loop
    fetcher: Arc<dyn Fetcher>,
    /// Handed to every fetch task
    fetch_tx: mpsc::Sender<SessionEvent>,
    /// Completions from fetch tasks
    fetch_rx: mpsc::Receiver<SessionEvent>,
    /// Is the app still running?
    running: bool,
    /// Result chosen for opening after the terminal is restored
    exit_url: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &Config, fetcher: Arc<dyn Fetcher>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel(FETCH_CHANNEL_CAPACITY);
        Self {
            session: Session::from_config(config),
            theme: Theme::DEFAULT,
            fetcher,
            fetch_tx,
            fetch_rx,
            running: true,
            exit_url: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// URL to open once the TUI has closed
    pub fn exit_url(&self) -> Option<&str> {
        self.exit_url.as_deref()
    }

    /// Feed one event to the session and carry out its command
    pub fn dispatch(&mut self, event: SessionEvent) {
        let Some(command) = self.session.handle(event) else {
            return;
        };

        if command.ends_session() {
            self.running = false;
        }

        match command {
            Command::Fetch(token) => {
                spawn_fetch(self.fetcher.clone(), token, self.fetch_tx.clone());
            }
            Command::Open(url) => {
                tracing::info!(%url, "result selected");
                self.exit_url = Some(url);
            }
            Command::Quit => {}
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // The session learns the size from events; seed it with the current one
        let size = terminal.size()?;
        self.dispatch(SessionEvent::Resize {
            width: size.width,
            height: size.height,
        });

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(event) = keymap::translate(&event) {
                            self.dispatch(event);
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::warn!("terminal event stream closed");
                        self.running = false;
                    }
                },

                // Fetch completions
                Some(event) = self.fetch_rx.recv() => self.dispatch(event),

                _ = tick.tick() => self.dispatch(SessionEvent::Tick),
            }

            if self.running {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            render(&self.session, &self.theme, area, frame.buffer_mut());
        })?;
        Ok(())
    }
}
