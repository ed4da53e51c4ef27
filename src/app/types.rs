//! Shared Types Module
//!
//! Wire types for the hosted identity provider plus the user snapshot the
//! screens render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which tab of the main app is active. Tab selection is screen-local
/// state, not a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Home,
    Profile,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl UserInfo {
    /// First and last name joined, when either is present.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        }
    }

    /// Name used in greetings: first name, else full name, else "User".
    pub fn display_name(&self) -> String {
        self.first_name
            .clone()
            .or_else(|| self.full_name())
            .unwrap_or_else(|| "User".to_string())
    }
}

/// Sign-in request: email identifier and password, or a reset-password
/// strategy that makes the provider email a reset code instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

/// Sign-up creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email_address: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request to send the email verification code for a pending sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareVerificationRequest {
    pub strategy: String,
}

/// Verification attempt for a pending sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub code: String,
}

/// Password update for the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// User payload as the provider returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email_address: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl From<UserResponse> for UserInfo {
    fn from(value: UserResponse) -> Self {
        Self {
            id: value.id,
            email: value.email_address,
            first_name: value.first_name,
            last_name: value.last_name,
            username: value.username,
            email_verified: value.email_verified,
            created_at: value.created_at,
            last_sign_in_at: value.last_sign_in_at,
        }
    }
}

/// Response to operations that may yield an active session. `status` is
/// "complete" once the provider has issued a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: String,
    pub token: Option<String>,
    pub user: Option<UserResponse>,
}

/// Response to a sign-up creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub id: String,
    pub status: String,
}

/// One structured error in a provider error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderErrorDetail {
    pub code: Option<String>,
    pub message: String,
    pub long_message: Option<String>,
}

/// Provider error response body: a list of structured errors, or a bare
/// message when the failure has no structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub errors: Vec<ProviderErrorDetail>,
    pub message: Option<String>,
}
