//! Session Events
//!
//! Everything the session reacts to. Surfaces translate their native input
//! (terminal keys, resize notifications, timers) into these and feed them to
//! [`Session::handle`](crate::Session::handle) one at a time. The surface
//! doesn't decide what a key means; the session does, based on its mode.

use crate::extract::SearchResult;
use crate::fetch::FetchError;
use crate::session::PendingFetch;

/// A key press, already stripped of terminal-specific detail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Character with Ctrl held
    Ctrl(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Inbound message to the session loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// User pressed a key
    Key(Key),

    /// Terminal size changed (also sent once at startup)
    Resize {
        /// Columns
        width: u16,
        /// Rows
        height: u16,
    },

    /// Animation tick
    Tick,

    /// A dispatched fetch finished
    FetchCompleted {
        /// Token the fetch was dispatched with
        token: PendingFetch,
        /// What the fetcher produced
        outcome: Result<Vec<SearchResult>, FetchError>,
    },
}

impl SessionEvent {
    /// Shorthand for a printable key press
    pub fn char(c: char) -> Self {
        Self::Key(Key::Char(c))
    }
}
