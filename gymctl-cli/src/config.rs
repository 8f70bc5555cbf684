//! File-based configuration for gymctl
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:5000"
//! cors_permissive = false
//!
//! [store]
//! host = "localhost"
//! port = 5432
//! user = "root"
//! password = "..."
//! database = "fitness_tracker"
//! ```
//!
//! Every key is optional. Command-line flags and environment variables
//! override whatever the file sets.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gymctl_server::{ServerConfig, StoreConfig};
use serde::Deserialize;

/// Top-level config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GymConfig {
    pub server: ServerSection,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: defaults.bind_addr,
            cors_permissive: defaults.cors_permissive,
        }
    }
}

impl GymConfig {
    /// Load config.
    ///
    /// An explicit path must exist. Without one, `~/.gymctl/config.toml` is
    /// used if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    tracing::debug!("no config at {:?}, using defaults", path);
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_toml(&content)
            .context(format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Get config file path: ~/.gymctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gymctl/config.toml")
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind,
            cors_permissive: self.server.cors_permissive,
        }
    }
}
