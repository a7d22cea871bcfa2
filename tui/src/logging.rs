//! Logging Setup
//!
//! The TUI owns the terminal, so log lines go to a file under the user's
//! cache directory instead of stderr. The filter comes from `MOVCLI_LOG`
//! (same syntax as `RUST_LOG`) and defaults to `warn`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MOVCLI_LOG";

/// Filter used when `MOVCLI_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "warn";

/// `$XDG_CACHE_HOME/movcli/movcli.log`
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("movcli").join("movcli.log"))
}

/// Build the filter from the raw `MOVCLI_LOG` value
pub fn filter_from(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Open (creating directories as needed) the log file for appending
pub fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber; returns the log file path, or `None` if
/// logging stays disabled
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    let file = open_log(&path).ok()?;
    let filter = filter_from(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(path)
}
