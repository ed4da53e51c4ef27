/**
 * Identity Provider Client
 *
 * HTTP client functions for the hosted identity provider: sign-in,
 * sign-up with email-code verification, password reset, password update,
 * user fetch and sign-out. All authentication logic lives on the provider
 * side; these functions forward input and translate responses.
 */

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::app::config::Config;
use crate::app::types::{
    PrepareVerificationRequest, ProviderErrorBody, SessionResponse, SignInRequest, SignUpRequest,
    SignUpResponse, UpdatePasswordRequest, UserInfo, UserResponse, VerifyEmailRequest,
};
use crate::shared::error::AuthError;

/// Verification strategy used for sign-up email codes.
const STRATEGY_EMAIL_CODE: &str = "email_code";
/// Sign-in strategy that makes the provider email a password-reset code.
const STRATEGY_RESET_PASSWORD: &str = "reset_password_email_code";

/// Session status meaning a token has been issued.
const STATUS_COMPLETE: &str = "complete";

fn http_client() -> Result<Client, AuthError> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| AuthError::network(format!("failed to create HTTP client: {}", e)))
}

/// Attach the headers every provider request carries: the publishable key
/// identifying the application and the per-process client instance id.
fn client_headers(builder: RequestBuilder, config: &Config) -> RequestBuilder {
    builder
        .header("X-Publishable-Key", config.publishable_key())
        .header("X-Client-Instance", config.client_instance().to_string())
}

/// Pick the single message for a failed response: first structured error
/// (long message over message), then the bare body message, then the raw
/// status line.
fn map_error_body(status: StatusCode, body: &str) -> AuthError {
    if let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(body) {
        if let Some(first) = parsed.errors.first() {
            let message = first
                .long_message
                .clone()
                .unwrap_or_else(|| first.message.clone());
            return AuthError::provider(message);
        }
        if let Some(message) = parsed.message {
            return AuthError::provider(message);
        }
    }
    let trimmed: String = body.chars().take(200).collect();
    AuthError::response(format!("{} - {}", status, trimmed))
}

async fn error_from_response(response: reqwest::Response) -> AuthError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    map_error_body(status, &body)
}

/// A completed session response must carry a token and a user; anything
/// else is reported as incomplete with the provider's status.
fn session_outcome(response: SessionResponse) -> Result<(String, UserInfo), AuthError> {
    if response.status != STATUS_COMPLETE {
        return Err(AuthError::incomplete(response.status));
    }
    match (response.token, response.user) {
        (Some(token), Some(user)) => Ok((token, user.into())),
        _ => Err(AuthError::response(
            "complete session without token or user".to_string(),
        )),
    }
}

/// Sign in with email and password. Returns the session token and user on
/// a completed sign-in.
pub async fn sign_in(
    config: &Config,
    identifier: String,
    password: String,
) -> Result<(String, UserInfo), AuthError> {
    let client = http_client()?;
    let request = SignInRequest {
        identifier,
        password: Some(password),
        strategy: None,
    };

    let response = client_headers(
        client.post(config.api_url("/v1/client/sign_ins")),
        config,
    )
    .json(&request)
    .send()
    .await
    .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    let session: SessionResponse = response
        .json()
        .await
        .map_err(|e| AuthError::response(format!("failed to parse response: {}", e)))?;
    session_outcome(session)
}

/// Create a sign-up and ask the provider to email the verification code.
/// Returns the pending sign-up id for the verification attempt.
pub async fn create_sign_up(
    config: &Config,
    email_address: String,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<String, AuthError> {
    let client = http_client()?;
    let request = SignUpRequest {
        email_address,
        password,
        first_name,
        last_name,
    };

    let response = client_headers(
        client.post(config.api_url("/v1/client/sign_ups")),
        config,
    )
    .json(&request)
    .send()
    .await
    .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    let sign_up: SignUpResponse = response
        .json()
        .await
        .map_err(|e| AuthError::response(format!("failed to parse response: {}", e)))?;

    // Send the verification email before handing control back to the
    // code-entry step.
    let prepare = PrepareVerificationRequest {
        strategy: STRATEGY_EMAIL_CODE.to_string(),
    };
    let path = format!("/v1/client/sign_ups/{}/prepare_verification", sign_up.id);
    let response = client_headers(client.post(config.api_url(&path)), config)
        .json(&prepare)
        .send()
        .await
        .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(sign_up.id)
}

/// Attempt email verification for a pending sign-up. On success the
/// provider completes the sign-up and issues a session.
pub async fn verify_email(
    config: &Config,
    sign_up_id: &str,
    code: String,
) -> Result<(String, UserInfo), AuthError> {
    let client = http_client()?;
    let path = format!("/v1/client/sign_ups/{}/attempt_verification", sign_up_id);
    let response = client_headers(client.post(config.api_url(&path)), config)
        .json(&VerifyEmailRequest { code })
        .send()
        .await
        .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    let session: SessionResponse = response
        .json()
        .await
        .map_err(|e| AuthError::response(format!("failed to parse response: {}", e)))?;
    session_outcome(session)
}

/// Ask the provider to email a password-reset code to `identifier`.
pub async fn request_password_reset(config: &Config, identifier: String) -> Result<(), AuthError> {
    let client = http_client()?;
    let request = SignInRequest {
        identifier,
        password: None,
        strategy: Some(STRATEGY_RESET_PASSWORD.to_string()),
    };

    let response = client_headers(
        client.post(config.api_url("/v1/client/sign_ins")),
        config,
    )
    .json(&request)
    .send()
    .await
    .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Update the signed-in user's password.
pub async fn update_password(
    config: &Config,
    current_password: String,
    new_password: String,
) -> Result<(), AuthError> {
    let token = config
        .get_token()
        .ok_or_else(|| AuthError::response("no active session".to_string()))?;
    let client = http_client()?;

    let response = client_headers(
        client.post(config.api_url("/v1/me/change_password")),
        config,
    )
    .bearer_auth(token)
    .json(&UpdatePasswordRequest {
        current_password,
        new_password,
    })
    .send()
    .await
    .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Fetch the user behind a session token. Used to validate a cached token
/// during session restore.
pub async fn fetch_user(config: &Config, token: &str) -> Result<UserInfo, AuthError> {
    let client = http_client()?;

    let response = client_headers(client.get(config.api_url("/v1/me")), config)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    let user: UserResponse = response
        .json()
        .await
        .map_err(|e| AuthError::response(format!("failed to parse response: {}", e)))?;
    Ok(user.into())
}

/// Revoke the session behind `token`. Callers treat this as
/// fire-and-forget; the local session is cleared regardless.
pub async fn sign_out(config: &Config, token: &str) -> Result<(), AuthError> {
    let client = http_client()?;

    let response = client_headers(client.post(config.api_url("/v1/client/sign_out")), config)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| AuthError::network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}
