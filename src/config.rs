use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_langs: Option<Vec<String>>,
    pub default_model: Option<String>,
    pub ollama_url: Option<String>,
    pub interval: Option<f64>,
}

impl Config {
    /// Load config from ~/.config/ytbrief/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Resolve the YouTube Data API key: environment first, then config file.
    pub fn resolve_api_key(&self) -> std::result::Result<String, Error> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(Error::ConfigMissing { env_var: API_KEY_ENV })
    }

    pub fn langs(&self) -> Vec<String> {
        self.default_langs
            .clone()
            .unwrap_or_else(|| vec!["en".to_string(), "en-US".to_string()])
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytbrief")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
api_key = "AIzaSyTest"
default_langs = ["es", "es-MX"]
default_model = "mistral"
ollama_url = "http://10.0.0.2:11434"
interval = 90.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("AIzaSyTest"));
        assert_eq!(config.langs(), vec!["es".to_string(), "es-MX".to_string()]);
        assert_eq!(config.default_model.as_deref(), Some("mistral"));
        assert_eq!(config.ollama_url.as_deref(), Some("http://10.0.0.2:11434"));
        assert_eq!(config.interval, Some(90.0));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.api_key.is_none());
        assert!(config.default_model.is_none());
        assert_eq!(config.langs(), vec!["en".to_string(), "en-US".to_string()]);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"default_model = "llama3:8b""#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("llama3:8b"));
        assert!(config.interval.is_none());
    }
}
