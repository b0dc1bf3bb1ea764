//! Server configuration
//!
//! Settings come from an optional TOML file, then command-line flags and
//! environment variables override individual values.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;
use orrery_logging::LogConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default catalog file, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "planets.json";

/// Errors that can occur while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Config file is not valid TOML for [`ServerConfig`]
    #[error("Invalid config: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Configuration for the Orrery server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// Path to the JSON catalog loaded at startup
    pub catalog_path: PathBuf,
    /// Logging configuration
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the listen address
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the listen port, keeping the host
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind.set_port(port);
        self
    }

    /// Set the catalog path
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log.default_level = level.into();
        self
    }
}

/// Command-line interface for the `orrery` binary
#[derive(Debug, Parser)]
#[command(name = "orrery", about = "Serve a planet catalog over a JSON API")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Listen port (overrides the port in --bind)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Catalog JSON file
    #[arg(long, env = "ORRERY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Human-readable console logs instead of JSONL
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Resolve the final configuration: file first, then flag overrides
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config = config.with_bind(bind);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(catalog) = self.catalog {
            config = config.with_catalog_path(catalog);
        }
        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }
        if self.pretty {
            config.log.console = LogConfig::development().console;
        }

        Ok(config)
    }
}
