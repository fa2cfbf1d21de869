//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::languages::{AUTO_DETECT, DEFAULT_SOURCE_LANGUAGE};

/// Configuration for the translation client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Source code sent in place of auto-detect
    pub default_source_language: String,
    /// Timeout for translate calls; `None` leaves the transport default
    pub request_timeout_ms: Option<u64>,
    pub health_timeout_ms: u64,
    pub pool_idle_timeout_secs: u64,
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            request_timeout_ms: None,
            health_timeout_ms: 5000,
            pool_idle_timeout_secs: 30,
            pool_max_idle_per_host: 10,
        }
    }
}

impl ClientConfig {
    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded client configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_source_language.is_empty() {
            return Err(anyhow::anyhow!("default_source_language is required"));
        }

        if self.default_source_language == AUTO_DETECT {
            return Err(anyhow::anyhow!(
                "default_source_language must be a concrete language code"
            ));
        }

        if self.health_timeout_ms == 0 {
            return Err(anyhow::anyhow!("health_timeout_ms must be greater than 0"));
        }

        if self.request_timeout_ms == Some(0) {
            return Err(anyhow::anyhow!("request_timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_source_language, "en");
        assert_eq!(config.health_timeout_ms, 5000);
        assert!(config.request_timeout_ms.is_none());
    }

    #[test]
    fn test_config_validation_rejects_auto() {
        let config = ClientConfig {
            default_source_language: "auto".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");

        let config = ClientConfig {
            default_source_language: "de".to_string(),
            request_timeout_ms: Some(15000),
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.default_source_language, "de");
        assert_eq!(loaded.request_timeout_ms, Some(15000));
        assert_eq!(loaded.health_timeout_ms, 5000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        std::fs::write(&path, r#"{"health_timeout_ms": 2000}"#).unwrap();

        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded.health_timeout_ms, 2000);
        assert_eq!(loaded.default_source_language, "en");
    }
}
