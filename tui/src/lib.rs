//! movcli TUI - Terminal interface for movcli
//!
//! A full-screen search box, a spinner while the query is in flight, and a
//! scrollable result list; picking a result opens it in the browser once the
//! terminal has been restored.
//!
//! # Architecture
//!
//! - **App**: the event loop; owns the [`movcli_core::Session`] and runs its commands
//! - **Keymap**: crossterm events to session events
//! - **Render**: pure drawing of a session into a buffer
//! - **Browser**: opening the chosen URL after exit
//! - **Cli / Logging**: process setup for the binary

pub mod app;
pub mod browser;
pub mod cli;
pub mod keymap;
pub mod logging;
pub mod render;
pub mod theme;
pub mod widgets;

pub use app::App;
