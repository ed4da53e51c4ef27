//! Shared Module
//!
//! Types used across the application that do not depend on the UI layer:
//! the application configuration (with its builder) and the error types
//! for identity-provider and client failures.

pub mod config;
pub mod error;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::AuthError;
