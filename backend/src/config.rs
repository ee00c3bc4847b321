//! Dashboard configuration.
//!
//! Settings are read from a TOML file and then overridden from environment
//! variables. Every field has a default, so an empty file (or no file at all)
//! yields a working configuration.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [source]
//! type = "http"
//! url = "https://example.org/schools.json"
//! fetch_timeout_secs = 30
//!
//! [normalize]
//! sentinel_policy = "compatible"
//! malformed_records = "abort"
//!
//! [dashboard]
//! initial_view = 1
//! chart_timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::preprocessing::NormalizeOptions;

/// Public dataset the dashboard was built around.
pub const DEFAULT_DATASET_URL: &str =
    "https://gist.githubusercontent.com/balasubramanim/fc66826974e13e134e33512f9f634d4b/raw";

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "SCHOOL_DASH_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where the dataset comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// HTTP GET of `source.url`
    #[default]
    Http,
    /// JSON file at `source.path`
    Local,
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" | "https" => Ok(Self::Http),
            "local" | "file" => Ok(Self::Local),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type", default)]
    pub source_type: SourceType,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// View selected right after startup.
    #[serde(default = "default_initial_view")]
    pub initial_view: i64,
    #[serde(default = "default_chart_timeout")]
    pub chart_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_initial_view() -> i64 {
    1
}

fn default_chart_timeout() -> u64 {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            source_type: SourceType::default(),
            url: default_url(),
            path: None,
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl SourceSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            initial_view: default_initial_view(),
            chart_timeout_secs: default_chart_timeout(),
        }
    }
}

impl DashboardSettings {
    pub fn chart_timeout(&self) -> Duration {
        Duration::from_secs(self.chart_timeout_secs)
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub normalize: NormalizeOptions,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

impl DashboardConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Locate the configuration file.
    ///
    /// Uses `SCHOOL_DASH_CONFIG` when set, otherwise the first existing of
    /// `dashboard.toml`, `backend/dashboard.toml`, `../dashboard.toml`.
    pub fn default_location() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        [
            "dashboard.toml",
            "backend/dashboard.toml",
            "../dashboard.toml",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
    }

    /// Load from the default location (or defaults when there is no file),
    /// then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_location() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override settings from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: server bind address
    /// - `DATASET_URL`: fetch the dataset from this URL
    /// - `DATASET_FILE`: read the dataset from this file (switches to a local source)
    /// - `FETCH_TIMEOUT_SECS`: bound on the dataset fetch
    /// - `CHART_TIMEOUT_SECS`: bound on each chart construction
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_env("PORT")? {
            self.server.port = port;
        }
        if let Ok(url) = env::var("DATASET_URL") {
            self.source.source_type = SourceType::Http;
            self.source.url = url;
        }
        if let Ok(path) = env::var("DATASET_FILE") {
            self.source.source_type = SourceType::Local;
            self.source.path = Some(PathBuf::from(path));
        }
        if let Some(secs) = parse_env("FETCH_TIMEOUT_SECS")? {
            self.source.fetch_timeout_secs = secs;
        }
        if let Some(secs) = parse_env("CHART_TIMEOUT_SECS")? {
            self.dashboard.chart_timeout_secs = secs;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.source_type == SourceType::Local && self.source.path.is_none() {
            return Err(ConfigError::Invalid(
                "local source requires 'source.path'".to_string(),
            ));
        }
        if self.source.source_type == SourceType::Http && self.source.url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "http source requires 'source.url'".to_string(),
            ));
        }
        if self.source.fetch_timeout_secs == 0 || self.dashboard.chart_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be positive".to_string()));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(None),
    }
}
