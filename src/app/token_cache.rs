//! Durable token cache.
//!
//! Key-value byte storage backing session restore across launches. One
//! file per key under the user config directory. Read failures of any
//! kind are a cache miss; write failures are logged and ignored, so a
//! broken disk degrades to signing in again rather than an error path.

use std::path::PathBuf;

/// Key under which the active session token is cached.
pub const SESSION_TOKEN_KEY: &str = "session-token";

#[derive(Debug, Clone)]
pub struct TokenCache {
    dir: PathBuf,
}

impl TokenCache {
    /// Cache rooted at the platform config dir, e.g.
    /// `~/.config/anteroom` on Linux.
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("anteroom");
        Self { dir }
    }

    /// Cache rooted at an explicit directory. Used by tests.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Fetch the bytes stored under `key`. Missing, unreadable, or empty
    /// entries are all `None`.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        match tokio::fs::read(self.key_path(key)).await {
            Ok(bytes) if bytes.is_empty() => None,
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::debug!(key, %err, "token cache read miss");
                None
            }
        }
    }

    /// Store `value` under `key`. Failures are ignored; an empty value
    /// clears the entry.
    pub async fn set(&self, key: &str, value: &[u8]) {
        if let Err(err) = tokio::fs::create_dir_all(&self.dir).await {
            tracing::warn!(key, %err, "token cache write ignored");
            return;
        }
        if let Err(err) = tokio::fs::write(self.key_path(key), value).await {
            tracing::warn!(key, %err, "token cache write ignored");
        }
    }

    /// Clear the entry under `key`.
    pub async fn clear(&self, key: &str) {
        self.set(key, &[]).await;
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
