//! Configuration management for Storefront

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Page size used when listing carts
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Sort order used when listing carts, e.g. `id,asc`
    pub sort: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u64 {
    20
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration pointing at a local backend
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            defaults: DefaultsConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("api.base_url".to_string()).into());
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(self.api.base_url.clone()).into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("STOREFRONT_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("storefront").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://shop.example.com"
timeout_secs = 10

[defaults]
page_size = 50
sort = "id,desc"
"#
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.defaults.page_size, 50);
        assert_eq!(config.defaults.sort.as_deref(), Some("id,desc"));
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://localhost:8080"
"#
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.defaults.page_size, 20);
        assert!(config.defaults.sort.is_none());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "ftp://shop.example.com"
"#
        )
        .unwrap();

        let result = Config::load_from_path(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let path = PathBuf::from("/nonexistent/storefront/config.toml");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.defaults.page_size, 20);
    }
}
