//! Configuration for the advisor TUI and the relay service

use crate::directory::{FirmDirectory, DEFAULT_MAX_SUGGESTIONS};
use crate::state::DEFAULT_MAX_FIRMS;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default relay listen address
pub const DEFAULT_RELAY_BIND: &str = "127.0.0.1:8787";

/// User configuration for the advisor TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdvisorConfig {
    /// Relay endpoint the finished form is posted to
    pub relay_url: Option<String>,
    /// Firm list to load instead of the built-in one
    pub directory_path: Option<PathBuf>,
    /// Soft cap on firms per submission
    pub max_firms: Option<usize>,
    /// Suggestions shown under the firm name field
    pub max_suggestions: Option<usize>,
}

impl AdvisorConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "firm-advisor", "firm-advisor")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AdvisorConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn max_firms(&self) -> usize {
        self.max_firms.unwrap_or(DEFAULT_MAX_FIRMS)
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS)
    }

    /// Load the configured directory, or the built-in list
    pub fn load_directory(&self) -> Result<FirmDirectory> {
        let directory = match &self.directory_path {
            Some(path) => FirmDirectory::load(path)?,
            None => FirmDirectory::builtin()?,
        };
        Ok(directory)
    }
}

/// Settings for the relay service, read from the environment
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind: SocketAddr,
    pub webhook_url: Option<String>,
}

impl RelayConfig {
    /// Read `FIRM_RELAY_BIND` and `CHAT_WEBHOOK_URL`
    pub fn from_env() -> Result<Self> {
        let bind = env::var("FIRM_RELAY_BIND").unwrap_or_else(|_| DEFAULT_RELAY_BIND.to_string());
        Self::from_values(&bind, env::var("CHAT_WEBHOOK_URL").ok())
    }

    pub fn from_values(bind: &str, webhook_url: Option<String>) -> Result<Self> {
        Ok(Self {
            bind: bind.parse()?,
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod advisor_config {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = AdvisorConfig::default();
            assert!(config.relay_url.is_none());
            assert!(config.directory_path.is_none());
            assert_eq!(config.max_firms(), 5);
            assert_eq!(config.max_suggestions(), 10);
        }

        #[test]
        fn test_serialization() {
            let config = AdvisorConfig {
                relay_url: Some("http://relay.local/api/submit-form".to_string()),
                directory_path: Some(PathBuf::from("/etc/firms.txt")),
                max_firms: Some(8),
                max_suggestions: Some(4),
            };

            let json = serde_json::to_string(&config).unwrap();
            let parsed: AdvisorConfig = serde_json::from_str(&json).unwrap();

            assert_eq!(
                parsed.relay_url,
                Some("http://relay.local/api/submit-form".to_string())
            );
            assert_eq!(parsed.directory_path, Some(PathBuf::from("/etc/firms.txt")));
            assert_eq!(parsed.max_firms(), 8);
            assert_eq!(parsed.max_suggestions(), 4);
        }

        #[test]
        fn test_deserialize_from_empty_json() {
            let parsed: AdvisorConfig = serde_json::from_str("{}").unwrap();
            assert!(parsed.relay_url.is_none());
            assert_eq!(parsed.max_firms(), 5);
        }

        #[test]
        fn test_deserialize_with_extra_fields() {
            // Should ignore unknown fields
            let json = r#"{"max_firms": 3, "unknown_field": "value"}"#;
            let parsed: AdvisorConfig = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.max_firms(), 3);
        }

        #[test]
        fn test_load_directory_defaults_to_builtin() {
            let directory = AdvisorConfig::default().load_directory().unwrap();
            assert!(directory.is_valid_firm("Linklaters"));
        }

        #[test]
        fn test_load_directory_from_path() {
            let path = std::env::temp_dir().join(format!("firms-{}.txt", uuid::Uuid::new_v4()));
            fs::write(&path, "Only Firm LLP\n").unwrap();
            let config = AdvisorConfig {
                directory_path: Some(path.clone()),
                ..Default::default()
            };

            let directory = config.load_directory().unwrap();
            fs::remove_file(&path).ok();

            assert_eq!(directory.get_all_firms(), vec!["Only Firm LLP"]);
        }

        #[test]
        fn test_load_directory_missing_path_fails() {
            let config = AdvisorConfig {
                directory_path: Some(PathBuf::from("/no/such/firms.txt")),
                ..Default::default()
            };
            assert!(config.load_directory().is_err());
        }

        #[test]
        fn test_load_returns_ok() {
            let result = AdvisorConfig::load();
            assert!(result.is_ok());
        }
    }

    mod relay_config {
        use super::*;

        #[test]
        fn test_from_values() {
            let config = RelayConfig::from_values(
                "0.0.0.0:9000",
                Some("https://chat.example/webhook".to_string()),
            )
            .unwrap();
            assert_eq!(config.bind.port(), 9000);
            assert_eq!(
                config.webhook_url.as_deref(),
                Some("https://chat.example/webhook")
            );
        }

        #[test]
        fn test_blank_webhook_is_none() {
            let config = RelayConfig::from_values(DEFAULT_RELAY_BIND, Some(" ".to_string())).unwrap();
            assert!(config.webhook_url.is_none());
        }

        #[test]
        fn test_invalid_bind_is_error() {
            assert!(RelayConfig::from_values("not-an-address", None).is_err());
        }
    }
}
