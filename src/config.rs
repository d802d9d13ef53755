use crate::error::{Result, SaltEdgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "saltedge-client";
const DEFAULT_API_BASE_URL: &str = "https://www.saltedge.com/api/v5/";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub saltedge: SaltEdgeConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SaltEdgeConfig {
    pub app_id: String,
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl SaltEdgeConfig {
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret: secret.into(),
            base_url: None,
        }
    }

    /// API root with a trailing slash so relative paths join beneath it
    pub fn api_base_url(&self) -> String {
        let base = self
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        match base.ends_with('/') {
            true => base.to_string(),
            false => format!("{}/", base),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() || self.secret.is_empty() {
            return Err(SaltEdgeError::Config(
                "Salt Edge app_id and secret must be set in config file".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(SaltEdgeError::Config(format!(
                "Config file not found at {:?}. Please create one.",
                config_path
            )));
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| SaltEdgeError::Config(format!("Failed to parse config: {}", e)))?;
        config.saltedge.validate()?;
        Ok(config)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
            .place_config_file("config.toml")
            .map_err(|e| {
                SaltEdgeError::Config(format!("Failed to create config directory: {}", e))
            })
    }
}
