//! Browser Launch
//!
//! Opens a result URL with whatever the platform provides. Launchers are
//! tried in order until one succeeds: the desktop default handler first, then
//! on Linux the Android activity manager (Termux has no desktop handler).
//!
//! Failure is never fatal; the caller prints the URL instead.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

/// A way of opening a URL
pub type Opener = fn(&str) -> io::Result<()>;

/// Every launcher failed
#[derive(Debug, Error)]
#[error("could not open {url} in a browser")]
pub struct BrowserError {
    pub url: String,
    #[source]
    pub source: io::Error,
}

/// Launchers for this platform, in the order they are tried
pub fn default_openers() -> Vec<(&'static str, Opener)> {
    let mut openers: Vec<(&'static str, Opener)> = vec![("system", system_open as Opener)];
    if cfg!(target_os = "linux") {
        openers.push(("android", android_open as Opener));
    }
    openers
}

/// Open `url` with the platform launchers
pub fn open_url(url: &str) -> Result<&'static str, BrowserError> {
    open_with(url, &default_openers())
}

/// Try each launcher until one succeeds; returns the name of the one that did
pub fn open_with(
    url: &str,
    openers: &[(&'static str, Opener)],
) -> Result<&'static str, BrowserError> {
    let mut last_error =
        io::Error::new(io::ErrorKind::NotFound, "no browser launcher available");

    for (name, opener) in openers {
        match opener(url) {
            Ok(()) => {
                tracing::info!(launcher = name, url, "opened result in browser");
                return Ok(*name);
            }
            Err(e) => {
                tracing::warn!(launcher = name, error = %e, "browser launcher failed");
                last_error = e;
            }
        }
    }

    Err(BrowserError {
        url: url.to_string(),
        source: last_error,
    })
}

fn system_open(url: &str) -> io::Result<()> {
    open::that_detached(url)
}

fn android_open(url: &str) -> io::Result<()> {
    let status = Command::new("am")
        .args([
            "start",
            "--user",
            "0",
            "-a",
            "android.intent.action.VIEW",
            "-d",
            url,
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("am exited with {}", status)))
    }
}
