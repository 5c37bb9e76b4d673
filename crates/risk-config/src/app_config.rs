//! Application configuration
//!
//! Configuration loaded from `.risk-dashboard.toml`, with the service URL
//! overridable from the environment (or a `.env` file).

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`AppConfig::service_url`]
pub const SERVICE_URL_ENV: &str = "RISK_SERVICE_URL";

/// Application configuration loaded from `.risk-dashboard.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the risk analysis service
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// UI redraw interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_service_url() -> String {
    risk_client::DEFAULT_SERVICE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from file (CWD, home, config dir) or use defaults, then
    /// apply environment overrides
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        let config = match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_service_url_override(env::var(SERVICE_URL_ENV).ok())
    }

    /// Parse TOML content, falling back to defaults when it is malformed
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    /// Replace the service URL when `url` is set and non-blank
    pub fn with_service_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            log::info!("Service URL overridden from {}: {}", SERVICE_URL_ENV, url);
            self.service_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.service_url, "http://127.0.0.1:8000");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            service_url = "http://risk.internal:9000"
            tick_rate_ms = 250
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.service_url, "http://risk.internal:9000");
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: AppConfig = toml::from_str("tick_rate_ms = 50").unwrap();
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.service_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let config = AppConfig::parse("service_url = [1, 2");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_service_url_override() {
        let config = AppConfig::default()
            .with_service_url_override(Some("http://10.0.0.5:8000".to_string()));
        assert_eq!(config.service_url, "http://10.0.0.5:8000");

        let config = AppConfig::default().with_service_url_override(Some("  ".to_string()));
        assert_eq!(config.service_url, "http://127.0.0.1:8000");

        let config = AppConfig::default().with_service_url_override(None);
        assert_eq!(config.service_url, "http://127.0.0.1:8000");
    }
}
