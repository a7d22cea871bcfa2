//! Session Commands
//!
//! Side effects the session asks its surface to perform. The session never
//! does I/O itself; it returns one of these from
//! [`Session::handle`](crate::Session::handle) and the surface carries it out.

use crate::session::PendingFetch;

/// Side effect requested by the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a fetch for this token and report back with
    /// [`SessionEvent::FetchCompleted`](crate::SessionEvent::FetchCompleted)
    Fetch(PendingFetch),

    /// Open this absolute URL in the browser, then exit
    Open(String),

    /// Exit immediately
    Quit,
}

impl Command {
    /// Whether the surface should stop its loop after this command
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Open(_) | Self::Quit)
    }
}
