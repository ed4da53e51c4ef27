//! Mock identity-provider helpers
//!
//! Wiremock-backed stand-in for the hosted identity provider, plus JSON
//! builders for its response shapes.

use anteroom::app::Config;
use anteroom::shared::config::AppConfig;
use serde_json::json;
use uuid::Uuid;
use wiremock::MockServer;

/// Publishable key used by every test configuration.
pub const TEST_PUBLISHABLE_KEY: &str = "pk_test_123";

/// Start a mock provider server.
pub async fn provider_server() -> MockServer {
    MockServer::start().await
}

/// A configuration pointing at the mock provider.
pub fn config_for(server: &MockServer) -> Config {
    Config::with_builder(
        AppConfig::builder()
            .provider_url(server.uri())
            .publishable_key(TEST_PUBLISHABLE_KEY.to_string()),
    )
    .expect("test config is valid")
}

/// A unique email address per test run.
pub fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, Uuid::new_v4())
}

/// Provider user payload.
pub fn user_json(email: &str) -> serde_json::Value {
    json!({
        "id": format!("usr_{}", Uuid::new_v4().simple()),
        "email_address": email,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "username": "ada",
        "email_verified": true,
        "created_at": "2024-03-01T12:00:00Z",
        "last_sign_in_at": "2025-07-30T08:30:00Z"
    })
}

/// A completed session response carrying a token and user.
pub fn complete_session_json(token: &str, email: &str) -> serde_json::Value {
    json!({
        "status": "complete",
        "token": token,
        "user": user_json(email)
    })
}

/// A structured provider error body.
pub fn provider_error_json(
    code: &str,
    message: &str,
    long_message: Option<&str>,
) -> serde_json::Value {
    json!({
        "errors": [{
            "code": code,
            "message": message,
            "long_message": long_message
        }]
    })
}
