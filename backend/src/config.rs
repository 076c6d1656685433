//! Server configuration.
//!
//! Settings are resolved in three layers: built-in defaults, an optional TOML
//! file, then environment variables.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable naming the optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "THERMOMETER_CONFIG";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("invalid bind address {0:?}")]
    InvalidAddress(String),
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// TCP port (default: 8080)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    /// Resolve the configuration from defaults, the file named by
    /// `THERMOMETER_CONFIG` (if set), and the `HOST` / `PORT` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Load a configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.server)
    }

    /// Apply `HOST` and `PORT` on top of this configuration.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: PORT_ENV,
                value: port,
            })?;
        }
        Ok(self)
    }

    /// Address to bind the listener to. `host` must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}
