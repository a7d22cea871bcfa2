//! TOML Configuration File Support
//!
//! Configuration for the search endpoint and the query field, loaded from
//! `~/.config/movcli/config.toml`.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [endpoint]
//! base_url = "https://movhub.ws"
//! search_path = "/ajax/film/search"
//! query_param = "keyword"
//! timeout_secs = 10
//!
//! [input]
//! char_limit = 100
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default site root; result paths are joined onto this
pub const DEFAULT_BASE_URL: &str = "https://movhub.ws";

/// Default search endpoint path
pub const DEFAULT_SEARCH_PATH: &str = "/ajax/film/search";

/// Default name of the query parameter
pub const DEFAULT_QUERY_PARAM: &str = "keyword";

/// Browser-like user agent; the endpoint answers bots with an HTML error page
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Accept header asking for JSON
pub const DEFAULT_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

/// Request timeout ceiling in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum query length in characters
pub const DEFAULT_CHAR_LIMIT: usize = 100;

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "MOVCLI_BASE_URL";

/// Environment variable overriding the timeout
pub const ENV_TIMEOUT_SECS: &str = "MOVCLI_TIMEOUT_SECS";

/// Environment variable overriding the user agent
pub const ENV_USER_AGENT: &str = "MOVCLI_USER_AGENT";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Endpoint section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointToml {
    /// Site root
    pub base_url: Option<String>,
    /// Path of the search endpoint
    pub search_path: Option<String>,
    /// Query parameter name
    pub query_param: Option<String>,
    /// User-Agent header value
    pub user_agent: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Input section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputToml {
    /// Maximum query length in characters
    pub char_limit: Option<usize>,
}

/// Root of the TOML configuration file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigToml {
    /// `[endpoint]`
    pub endpoint: EndpointToml,
    /// `[input]`
    pub input: InputToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Where and how to search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub search_path: String,
    pub query_param: String,
    pub user_agent: String,
    pub accept: String,
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EndpointConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Query field settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    pub char_limit: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }
}

/// Fully resolved configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub input: InputConfig,
}

/// Values supplied on the command line
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when given
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// `$XDG_CONFIG_HOME/movcli/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("movcli").join("config.toml"))
}

/// Read and parse a TOML configuration file
pub fn load_config_from_path(path: &Path) -> Result<ConfigToml, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

impl Config {
    /// Resolve configuration from file, process environment and CLI
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve configuration with an explicit environment lookup
    pub fn load_with_env<E>(overrides: &ConfigOverrides, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let file = match &overrides.config_path {
            Some(path) => Some(load_config_from_path(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(load_config_from_path(&path)?),
                _ => None,
            },
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_env(env)?;
        config.apply_overrides(overrides);
        config.validate()?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Layer values from a parsed file over the current ones
    pub fn apply_file(&mut self, file: ConfigToml) {
        let ep = file.endpoint;
        if let Some(v) = ep.base_url {
            self.endpoint.base_url = v;
        }
        if let Some(v) = ep.search_path {
            self.endpoint.search_path = v;
        }
        if let Some(v) = ep.query_param {
            self.endpoint.query_param = v;
        }
        if let Some(v) = ep.user_agent {
            self.endpoint.user_agent = v;
        }
        if let Some(v) = ep.timeout_secs {
            self.endpoint.timeout_secs = v;
        }
        if let Some(v) = file.input.char_limit {
            self.input.char_limit = v;
        }
    }

    /// Layer values from environment variables
    pub fn apply_env<E>(&mut self, env: E) -> Result<(), ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(v) = env(ENV_BASE_URL) {
            self.endpoint.base_url = v;
        }
        if let Some(v) = env(ENV_USER_AGENT) {
            self.endpoint.user_agent = v;
        }
        if let Some(v) = env(ENV_TIMEOUT_SECS) {
            self.endpoint.timeout_secs = v.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, v
                ))
            })?;
        }
        Ok(())
    }

    /// Layer values from the command line
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = &overrides.base_url {
            self.endpoint.base_url = v.clone();
        }
        if let Some(v) = overrides.timeout_secs {
            self.endpoint.timeout_secs = v;
        }
    }

    /// Reject values the fetcher or session cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.endpoint.base_url).map_err(|e| {
            ConfigError::Invalid(format!("base_url {:?}: {}", self.endpoint.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base_url must be http or https, got {}",
                url.scheme()
            )));
        }
        // Result paths and the search path are both rooted at the site
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::Invalid(format!(
                "base_url must be a site root without a path, got {}",
                self.endpoint.base_url
            )));
        }
        if self.endpoint.query_param.trim().is_empty() {
            return Err(ConfigError::Invalid("query_param must not be empty".into()));
        }
        if self.endpoint.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be at least 1".into()));
        }
        if self.input.char_limit == 0 {
            return Err(ConfigError::Invalid("char_limit must be at least 1".into()));
        }
        Ok(())
    }
}
