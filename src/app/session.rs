//! Session state: the authentication side of the route guard's inputs.
//!
//! `Session` tracks whether bootstrapping has finished (`loaded`) and
//! whether a user session is active. It starts Uninitialized; once the
//! token-cache restore settles it becomes either Unauthenticated or
//! Authenticated, and from then on only provider-backed operations
//! (sign-in, verification, sign-out) move it between the two. Observers
//! watch the generation counter, which bumps on every change.

use crate::app::guard::AuthStateProvider;
use crate::app::types::UserInfo;

#[derive(Debug, Clone)]
pub struct Session {
    loaded: bool,
    token: Option<String>,
    user: Option<UserInfo>,
    epoch: u64,
}

impl Session {
    /// A session that has not finished bootstrapping.
    pub fn new() -> Self {
        Self {
            loaded: false,
            token: None,
            user: None,
            epoch: 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_signed_in(&self) -> bool {
        self.loaded && self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Generation counter; bumps on every state change.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Complete bootstrapping. `restored` carries the cached token and its
    /// validated user when the restore succeeded; `None` starts signed out.
    pub fn finish_load(&mut self, restored: Option<(String, UserInfo)>) {
        self.loaded = true;
        match restored {
            Some((token, user)) => {
                tracing::info!(user = %user.email, "session restored from cache");
                self.token = Some(token);
                self.user = Some(user);
            }
            None => {
                tracing::info!("no restorable session, starting signed out");
                self.token = None;
                self.user = None;
            }
        }
        self.epoch += 1;
    }

    /// Activate a session after a completed sign-in or verification.
    pub fn activate(&mut self, token: String, user: UserInfo) {
        tracing::info!(user = %user.email, "session activated");
        self.loaded = true;
        self.token = Some(token);
        self.user = Some(user);
        self.epoch += 1;
    }

    /// Refresh the user snapshot without touching the token.
    pub fn update_user(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.epoch += 1;
    }

    /// Drop the active session (sign-out).
    pub fn clear(&mut self) {
        if self.token.is_some() || self.user.is_some() {
            tracing::info!("session cleared");
        }
        self.token = None;
        self.user = None;
        self.epoch += 1;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStateProvider for Session {
    fn is_loaded(&self) -> bool {
        Session::is_loaded(self)
    }

    fn is_signed_in(&self) -> bool {
        Session::is_signed_in(self)
    }
}
