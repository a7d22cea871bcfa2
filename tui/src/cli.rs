//! Command Line
//!
//! Flags override the configuration file and the `MOVCLI_*` environment
//! variables (which are layered in by `movcli_core::config`).

use std::path::PathBuf;

use clap::Parser;

use movcli_core::ConfigOverrides;

/// Search titles from the terminal and open them in the browser
#[derive(Debug, Parser)]
#[command(name = "movcli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/movcli/config.toml)
    #[arg(short = 'c', long, env = "MOVCLI_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Site to search, e.g. https://movhub.ws [env: MOVCLI_BASE_URL]
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds [env: MOVCLI_TIMEOUT_SECS]
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// The values that take precedence over every other source
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
