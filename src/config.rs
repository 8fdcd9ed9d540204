use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::config::{CONFIG_FILE, DEFAULT_DATA_FILE};
use crate::constants::server::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{DashboardError, Result};

/// Runtime configuration; every field falls back to its default when absent
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
    pub separator: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            separator: ",".to_string(),
        }
    }
}

impl Config {
    /// Load `loan-dashboard.toml` from `dir`, falling back to the defaults
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.is_file() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Self::parse(&contents);
        }

        tracing::info!("{} not found, using defaults", config_path.display());
        Ok(Self::default())
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.data.separator_byte()?;
        Ok(config)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DataConfig {
    /// The separator as a single ASCII byte
    pub fn separator_byte(&self) -> Result<u8> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c as u8),
            _ => Err(DashboardError::Config(format!(
                "separator must be a single ASCII character, got {:?}",
                self.separator
            ))),
        }
    }
}
