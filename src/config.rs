//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory unless a path is
//! given explicitly:
//! - Windows: %APPDATA%\song-catalog\config.toml
//! - macOS: ~/Library/Application Support/song-catalog/config.toml
//! - Linux: ~/.config/song-catalog/config.toml
//!
//! Every setting has a default, and command-line flags or environment
//! variables override whatever the file says (see [`Overrides`]).

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Store settings
    pub database: DatabaseConfig,

    /// External metadata service settings
    pub enrichment: EnrichmentConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, e.g. "0.0.0.0:8080"
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: crate::db::db_url(None),
            max_connections: crate::db::DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// External metadata service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Base URL of the song info service (the client appends `/info`)
    pub base_url: String,

    /// Per-request timeout in seconds (unset = wait indefinitely)
    pub timeout_secs: Option<u64>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout_secs: None,
        }
    }
}

impl EnrichmentConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Values supplied on the command line or through the environment.
///
/// `None` leaves the file/default value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub database_url: Option<String>,
    pub enrichment_url: Option<String>,
}

impl Config {
    /// Apply command-line/environment overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(bind) = &overrides.bind {
            self.server.bind = bind.clone();
        }
        if let Some(url) = &overrides.database_url {
            self.database.url = url.clone();
        }
        if let Some(url) = &overrides.enrichment_url {
            self.enrichment.base_url = url.clone();
        }
        self
    }

    /// Parse the configured bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("song-catalog"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from an explicit path
///
/// Unlike [`load`], a missing or malformed file is an error: the caller
/// asked for this file specifically.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid bind address: {0}")]
    InvalidBind(String),
}

// ============================================================================
// Tests
// ============================================================================
