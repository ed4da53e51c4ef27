//! Shared Error Types
//!
//! Error types for identity-provider and client failures. Screens display
//! a single message per failed operation: the provider's first structured
//! error wins, then the transport error text, then a per-screen generic
//! fallback.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and cross worker-thread boundaries
//! inside operation results.
use thiserror::Error;

/// Errors produced by the identity-provider client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider rejected the operation with a structured error list;
    /// the payload is the first error's message, already chosen by
    /// long-message-first priority.
    #[error("{message}")]
    Provider {
        /// Human-readable error message from the provider
        message: String,
    },

    /// The request never completed (connection, TLS, timeout).
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The provider answered with something we could not interpret.
    #[error("unexpected response from identity provider: {message}")]
    Response {
        /// Human-readable error message
        message: String,
    },

    /// The operation did not fail, but the provider reports it is not
    /// complete (e.g. further verification steps are required).
    #[error("operation incomplete: status {status}")]
    Incomplete {
        /// The status reported by the provider
        status: String,
    },

    /// A worker thread could not start its async runtime.
    #[error("failed to start async runtime: {message}")]
    Runtime {
        /// Human-readable error message
        message: String,
    },
}

impl AuthError {
    /// Create a new provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new unexpected-response error
    pub fn response(message: impl Into<String>) -> Self {
        Self::Response {
            message: message.into(),
        }
    }

    /// Create a new incomplete-operation error
    pub fn incomplete(status: impl Into<String>) -> Self {
        Self::Incomplete {
            status: status.into(),
        }
    }

    /// The message a screen should display for this error, given the
    /// screen's generic fallback. Provider and network errors carry text
    /// worth showing verbatim; everything else falls back.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Provider { message } => message.clone(),
            AuthError::Network { message } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::response(format!("JSON error: {}", err))
    }
}
