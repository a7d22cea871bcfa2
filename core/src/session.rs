//! Search Session
//!
//! The state machine at the heart of movcli. A [`Session`] owns all mutable
//! state; [`Session::handle`] is the only way to change it, and it is called
//! from exactly one loop. Fetches run elsewhere and come back as
//! [`SessionEvent::FetchCompleted`] messages carrying the token they were
//! dispatched with.
//!
//! # Modes
//!
//! ```text
//!            submit (non-empty)
//!   Input ─────────────────────▶ Waiting
//!     ▲                            │
//!     │ back                       ├── Ok(items) ──▶ Showing ── select ──▶ Open(url)
//!     │                            │                   │
//!     │                            └── Err(e) ────▶ Failed
//!     └────────────────────────────────────────────────┘ back
//! ```
//!
//! Ctrl+C quits from anywhere; `q` quits everywhere except while typing.
//!
//! # Stale completions
//!
//! A completion is applied only while the session is Waiting *and* its token
//! equals the pending one. Anything else (a completion arriving after quit,
//! or from an older generation) is dropped without touching the session.

use crate::config::Config;
use crate::events::{Key, SessionEvent};
use crate::extract::SearchResult;
use crate::fetch::FetchError;
use crate::input::QueryInput;
use crate::list::{Filter, ListState, Viewport};
use crate::messages::Command;

/// Which screen the session is on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Typing a query
    #[default]
    Input,
    /// A fetch is in flight
    Waiting,
    /// Browsing results
    Showing,
    /// The last fetch failed
    Failed,
}

impl Mode {
    /// Short description for logs and status lines
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Waiting => "waiting",
            Self::Showing => "showing",
            Self::Failed => "failed",
        }
    }
}

/// Correlation token for the one fetch in flight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFetch {
    /// Monotonic dispatch counter
    pub generation: u64,
    /// Query text exactly as submitted
    pub query: String,
}

/// The search session
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    /// Search field; only edited in Input
    query: QueryInput,
    /// Query of the most recent dispatch (shown while waiting and in results)
    searched: String,
    /// Results; non-empty only in Showing
    items: Vec<SearchResult>,
    /// Set only in Failed
    last_error: Option<FetchError>,
    /// Unknown until the first resize
    viewport: Option<Viewport>,
    /// Set only in Waiting
    pending: Option<PendingFetch>,
    /// Last generation handed out
    generation: u64,
    list: ListState,
    spinner_frame: usize,
    /// Result paths are joined onto this
    base_url: String,
}

impl Session {
    /// Create a session in Input mode
    pub fn new(base_url: impl Into<String>, char_limit: usize) -> Self {
        Self {
            mode: Mode::Input,
            query: QueryInput::new(char_limit),
            searched: String::new(),
            items: Vec::new(),
            last_error: None,
            viewport: None,
            pending: None,
            generation: 0,
            list: ListState::default(),
            spinner_frame: 0,
            base_url: base_url.into(),
        }
    }

    /// Create from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.base_url.clone(), config.input.char_limit)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &QueryInput {
        &self.query
    }

    /// Query of the most recent search
    pub fn searched_query(&self) -> &str {
        &self.searched
    }

    pub fn items(&self) -> &[SearchResult] {
        &self.items
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn pending(&self) -> Option<&PendingFetch> {
        self.pending.as_ref()
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Items that pass the current filter, in order
    pub fn visible_items(&self) -> Vec<&SearchResult> {
        self.list
            .visible_indices(&self.items)
            .into_iter()
            .map(|i| &self.items[i])
            .collect()
    }

    /// The highlighted item in Showing
    pub fn selected(&self) -> Option<&SearchResult> {
        if self.mode != Mode::Showing {
            return None;
        }
        self.list.selected(&self.items)
    }

    /// Whether the mode/data invariants hold
    pub fn invariants_hold(&self) -> bool {
        let items_ok = self.items.is_empty() || self.mode == Mode::Showing;
        let error_ok = self.last_error.is_none() || self.mode == Mode::Failed;
        let pending_ok = self.pending.is_none() || self.mode == Mode::Waiting;
        items_ok && error_ok && pending_ok
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Apply one event; returns the side effect the surface must perform
    pub fn handle(&mut self, event: SessionEvent) -> Option<Command> {
        let command = match event {
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::Resize { width, height } => {
                self.resize(width, height);
                None
            }
            SessionEvent::Tick => {
                if self.mode == Mode::Waiting {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                None
            }
            SessionEvent::FetchCompleted { token, outcome } => {
                self.complete_fetch(token, outcome);
                None
            }
        };

        debug_assert!(self.invariants_hold(), "session invariants broken: {:?}", self);
        command
    }

    fn handle_key(&mut self, key: Key) -> Option<Command> {
        if key == Key::Ctrl('c') {
            return self.quit();
        }

        match self.mode {
            Mode::Input => self.handle_input_key(key),
            Mode::Waiting => match key {
                Key::Char('q') => self.quit(),
                _ => None,
            },
            Mode::Showing if self.list.filter.is_editing() => {
                self.handle_filter_key(key);
                None
            }
            Mode::Showing => self.handle_list_key(key),
            Mode::Failed => match key {
                Key::Char('q') => self.quit(),
                Key::Esc => {
                    self.back();
                    None
                }
                _ => None,
            },
        }
    }

    fn handle_input_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Enter => return self.submit(),
            Key::Char(c) => {
                self.query.insert(c);
            }
            Key::Ctrl('u') => self.query.clear(),
            Key::Backspace => self.query.backspace(),
            Key::Delete => self.query.delete(),
            Key::Left => self.query.move_left(),
            Key::Right => self.query.move_right(),
            Key::Home => self.query.move_home(),
            Key::End => self.query.move_end(),
            _ => {}
        }
        None
    }

    fn handle_list_key(&mut self, key: Key) -> Option<Command> {
        let len = self.list.visible_indices(&self.items).len();
        let page = self.page_size();

        match key {
            Key::Char('q') => return self.quit(),
            Key::Enter => return self.select(),
            Key::Esc => {
                if self.list.filter == Filter::Off {
                    self.back();
                } else {
                    self.list.filter = Filter::Off;
                    self.list.reset_position();
                }
            }
            Key::Char('/') => {
                let text = self.list.filter.text().unwrap_or_default().to_string();
                self.list.filter = Filter::Editing(text);
            }
            Key::Up | Key::Char('k') => self.list.move_up(len, page),
            Key::Down | Key::Char('j') => self.list.move_down(len, page),
            Key::PageUp => self.list.page_up(len, page),
            Key::PageDown => self.list.page_down(len, page),
            Key::Home | Key::Char('g') => self.list.first(len, page),
            Key::End | Key::Char('G') => self.list.last(len, page),
            _ => {}
        }
        None
    }

    fn handle_filter_key(&mut self, key: Key) {
        let Filter::Editing(text) = &mut self.list.filter else {
            return;
        };

        match key {
            Key::Char(c) if !c.is_control() => {
                text.push(c);
                self.list.reset_position();
            }
            Key::Backspace => {
                text.pop();
                self.list.reset_position();
            }
            Key::Enter => {
                self.list.filter = if text.is_empty() {
                    Filter::Off
                } else {
                    Filter::Applied(std::mem::take(text))
                };
            }
            Key::Esc => {
                self.list.filter = Filter::Off;
                self.list.reset_position();
            }
            _ => {}
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Input → Waiting
    fn submit(&mut self) -> Option<Command> {
        if self.query.is_empty() {
            return None;
        }

        self.generation += 1;
        let token = PendingFetch {
            generation: self.generation,
            query: self.query.value().to_string(),
        };
        tracing::debug!(generation = token.generation, query = %token.query, "dispatching fetch");

        self.searched = token.query.clone();
        self.pending = Some(token.clone());
        self.spinner_frame = 0;
        self.mode = Mode::Waiting;
        Some(Command::Fetch(token))
    }

    /// Waiting → Showing / Failed, or nothing for a stale token
    fn complete_fetch(
        &mut self,
        token: PendingFetch,
        outcome: Result<Vec<SearchResult>, FetchError>,
    ) {
        if self.mode != Mode::Waiting || self.pending.as_ref() != Some(&token) {
            tracing::debug!(
                generation = token.generation,
                mode = self.mode.description(),
                "discarding stale fetch completion"
            );
            return;
        }
        self.pending = None;

        match outcome {
            Ok(items) if !items.is_empty() => {
                self.items = items;
                self.list = ListState::default();
                self.list.scroll_into_view(self.items.len(), self.page_size());
                self.mode = Mode::Showing;
            }
            Ok(_) => self.fail(FetchError::NoResults(token.query)),
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: FetchError) {
        self.last_error = Some(error);
        self.mode = Mode::Failed;
    }

    /// Showing / Failed → Input
    fn back(&mut self) {
        self.items.clear();
        self.list = ListState::default();
        self.last_error = None;
        self.query.move_end();
        self.mode = Mode::Input;
    }

    /// Showing → open the highlighted result
    fn select(&self) -> Option<Command> {
        let item = self.list.selected(&self.items)?;
        Some(Command::Open(item.url(&self.base_url)))
    }

    fn quit(&mut self) -> Option<Command> {
        tracing::debug!(mode = self.mode.description(), "quit requested");
        // Nothing will consume the in-flight result any more
        self.pending = None;
        Some(Command::Quit)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Some(Viewport::new(width, height));
        let len = self.list.visible_indices(&self.items).len();
        self.list.scroll_into_view(len, self.page_size());
    }

    fn page_size(&self) -> usize {
        self.viewport.map(|v| v.page_size()).unwrap_or(1)
    }
}
