use std::path::PathBuf;

use uuid::Uuid;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default provider URL, pointing at a local development stub.
const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:3000";

/// Environment variable overriding the provider base URL.
pub const PROVIDER_URL_VAR: &str = "ANTEROOM_PROVIDER_URL";
/// Environment variable holding the publishable key. Required unless the
/// config file provides one.
pub const PUBLISHABLE_KEY_VAR: &str = "ANTEROOM_PUBLISHABLE_KEY";

/// Application configuration wrapper.
///
/// Carries the validated provider settings, the in-memory token of the
/// active session, and the per-process client instance id sent with every
/// provider request. Cloned into worker threads wholesale.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
    client_instance: Uuid,
}

impl Config {
    /// Resolve configuration from the environment, falling back to the
    /// config file (`config.toml` under the user config dir), then to
    /// defaults. A missing publishable key is a hard error: without it no
    /// provider call can be authenticated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = Self::load_config_file()?;

        let provider_url = std::env::var(PROVIDER_URL_VAR)
            .ok()
            .or(file.provider_url)
            .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());
        let mut builder = AppConfig::builder().provider_url(provider_url);
        if let Some(key) = std::env::var(PUBLISHABLE_KEY_VAR)
            .ok()
            .or(file.publishable_key)
        {
            builder = builder.publishable_key(key);
        }

        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self {
            app,
            token: None,
            client_instance: Uuid::new_v4(),
        })
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("anteroom").join("config.toml"))
    }

    /// Parsed config file, or an empty config when the file is absent. A
    /// file that exists but does not parse is an error rather than a
    /// silent fallback.
    fn load_config_file() -> Result<AppConfig, ConfigError> {
        let Some(path) = Self::config_file_path() else {
            return Ok(AppConfig::default());
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw)
                .map_err(|err| ConfigError::UnreadableFile(format!("{}: {}", path.display(), err))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(err) => Err(ConfigError::UnreadableFile(format!(
                "{}: {}",
                path.display(),
                err
            ))),
        }
    }

    /// Set the session token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (sign-out)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for a provider endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.provider_url(), path)
    }

    pub fn provider_url(&self) -> &str {
        self.app
            .provider_url
            .as_deref()
            .unwrap_or(DEFAULT_PROVIDER_URL)
    }

    /// The publishable key sent with every provider request.
    pub fn publishable_key(&self) -> &str {
        // Validation guarantees the key is present on every built Config.
        self.app.publishable_key.as_deref().unwrap_or_default()
    }

    /// Per-process client instance id.
    pub fn client_instance(&self) -> Uuid {
        self.client_instance
    }
}
