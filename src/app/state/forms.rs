//! Per-screen form state.
//!
//! Each screen owns its inputs, its one displayed error, and its loading
//! flag. Validation here is the local, pre-provider kind; everything the
//! provider rejects comes back through the operation result instead.

/// Sign-in screen inputs.
#[derive(Debug, Default, Clone)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sign-up screen inputs, including the email-code verification step.
#[derive(Debug, Default, Clone)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// True once the account is created and the provider has emailed a
    /// verification code; the screen then shows the code-entry step.
    pub pending_verification: bool,
    pub code: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Forgot-password screen inputs.
#[derive(Debug, Default, Clone)]
pub struct ForgotPasswordForm {
    pub email: String,
    /// True once the provider accepted the reset request; the screen then
    /// shows the check-your-email confirmation.
    pub email_sent: bool,
    pub error: Option<String>,
    pub loading: bool,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email address is required".to_string());
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Change-password screen inputs.
#[derive(Debug, Default, Clone)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl ChangePasswordForm {
    /// Validation order matters: the first failing rule is the one shown.
    pub fn validate(&self) -> Result<(), String> {
        if self.current_password.trim().is_empty() {
            return Err("Please enter your current password".to_string());
        }
        if self.new_password.trim().is_empty() {
            return Err("Please enter a new password".to_string());
        }
        if self.new_password.len() < 8 {
            return Err("New password must be at least 8 characters long".to_string());
        }
        if self.new_password != self.confirm_password {
            return Err("New passwords do not match".to_string());
        }
        if self.current_password == self.new_password {
            return Err("New password must be different from current password".to_string());
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
