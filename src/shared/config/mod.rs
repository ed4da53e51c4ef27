//! Application configuration module
//!
//! Provides configuration types for the application.

use serde::Deserialize;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted identity provider
    pub provider_url: Option<String>,
    /// Publishable API key identifying this application to the provider
    pub publishable_key: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.provider_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        match self.publishable_key {
            Some(ref key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingValue("publishable key")),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    provider_url: Option<String>,
    publishable_key: Option<String>,
}

impl AppConfigBuilder {
    /// Set the identity provider base URL
    pub fn provider_url(mut self, url: String) -> Self {
        self.provider_url = Some(url);
        self
    }

    /// Set the publishable key
    pub fn publishable_key(mut self, key: String) -> Self {
        self.publishable_key = Some(key);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            provider_url: self.provider_url,
            publishable_key: self.publishable_key,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("unreadable config file: {0}")]
    UnreadableFile(String),
}
