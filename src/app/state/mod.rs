use std::sync::mpsc::{channel, Receiver};

use crate::app::auth;
use crate::app::config::Config;
use crate::app::debug::{DebugCategory, DebugLogger};
use crate::app::guard::{Redirect, RouteGuard, Splash};
use crate::app::router::{Router, PATH_SIGN_IN, PATH_TABS};
use crate::app::session::Session;
use crate::app::token_cache::{TokenCache, SESSION_TOKEN_KEY};
use crate::app::types::{ActiveTab, UserInfo};
use crate::shared::error::AuthError;

pub mod forms;

use forms::{ChangePasswordForm, ForgotPasswordForm, SignInForm, SignUpForm};

const FALLBACK_SIGN_IN: &str = "An error occurred during sign-in. Please try again.";
const FALLBACK_SIGN_UP: &str = "An error occurred during sign-up. Please try again.";
const FALLBACK_VERIFY: &str = "Invalid verification code. Please try again.";
const FALLBACK_RESET: &str = "An error occurred while sending reset email. Please try again.";
const FALLBACK_CHANGE_PASSWORD: &str =
    "An error occurred while changing password. Please try again.";

const INCOMPLETE_SIGN_IN: &str = "Sign-in incomplete. Please try again.";
const INCOMPLETE_VERIFY: &str = "Verification incomplete. Please try again.";

/// Central application state shared across views.
///
/// Provider operations run on worker threads and deliver their results
/// over mpsc channels; `check_results` drains them once per frame, and
/// `run_route_guard` re-evaluates the redirect decision whenever the
/// session or router generation moved.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub router: Router,
    pub active_tab: ActiveTab,
    pub splash: Splash,
    pub debug_logger: DebugLogger,
    pub debug_view_open: bool,
    pub debug_filter_category: Option<DebugCategory>,

    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub forgot_password: ForgotPasswordForm,
    pub change_password: ChangePasswordForm,

    guard: RouteGuard,
    guard_seen: Option<(u64, u64)>,
    token_cache: TokenCache,
    pending_sign_up_id: Option<String>,

    restore_result: Option<Receiver<Option<(String, UserInfo)>>>,
    sign_in_result: Option<Receiver<Result<(String, UserInfo), AuthError>>>,
    sign_up_result: Option<Receiver<Result<String, AuthError>>>,
    verify_result: Option<Receiver<Result<(String, UserInfo), AuthError>>>,
    reset_request_result: Option<Receiver<Result<(), AuthError>>>,
    change_password_result: Option<Receiver<Result<(), AuthError>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_token_cache(config, TokenCache::new())
    }

    /// Build with an explicit token cache location. Used by tests.
    pub fn with_token_cache(config: Config, token_cache: TokenCache) -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::Other, "AppState initialized");

        Self {
            config,
            session: Session::new(),
            router: Router::new(PATH_TABS),
            active_tab: ActiveTab::Home,
            splash: Splash::new(),
            debug_logger,
            debug_view_open: false,
            debug_filter_category: None,
            sign_in: SignInForm::default(),
            sign_up: SignUpForm::default(),
            forgot_password: ForgotPasswordForm::default(),
            change_password: ChangePasswordForm::default(),
            guard: RouteGuard::new(),
            guard_seen: None,
            token_cache,
            pending_sign_up_id: None,
            restore_result: None,
            sign_in_result: None,
            sign_up_result: None,
            verify_result: None,
            reset_request_result: None,
            change_password_result: None,
        }
    }

    /// Kick off session restore: read the cached token and validate it
    /// against the provider. The session stays unloaded (splash up) until
    /// the result lands, successful or not.
    pub fn begin_session_restore(&mut self) {
        let (tx, rx) = channel();
        let config = self.config.clone();
        let cache = self.token_cache.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(_) => {
                    let _ = tx.send(None);
                    return;
                }
            };
            let restored = rt.block_on(async {
                let bytes = cache.get(SESSION_TOKEN_KEY).await?;
                let token = String::from_utf8(bytes).ok()?;
                match auth::fetch_user(&config, &token).await {
                    Ok(user) => Some((token, user)),
                    Err(_) => None,
                }
            });
            let _ = tx.send(restored);
        });

        self.restore_result = Some(rx);
    }

    /// Drain every pending worker result. Called once per frame.
    pub fn check_results(&mut self) {
        self.check_restore_result();
        self.check_sign_in_result();
        self.check_sign_up_result();
        self.check_verify_result();
        self.check_reset_request_result();
        self.check_change_password_result();
    }

    fn check_restore_result(&mut self) {
        if let Some(ref rx) = self.restore_result {
            if let Ok(restored) = rx.try_recv() {
                self.restore_result = None;
                if let Some((ref token, _)) = restored {
                    self.config.set_token(Some(token.clone()));
                }
                let outcome = if restored.is_some() {
                    "restored"
                } else {
                    "signed out"
                };
                self.debug_logger
                    .info(DebugCategory::Auth, format!("session load: {}", outcome));
                self.session.finish_load(restored);
            }
        }
    }

    fn check_sign_in_result(&mut self) {
        if let Some(ref rx) = self.sign_in_result {
            if let Ok(result) = rx.try_recv() {
                self.sign_in_result = None;
                self.sign_in.loading = false;

                match result {
                    Ok((token, user)) => {
                        self.debug_logger
                            .info(DebugCategory::Auth, format!("sign-in ok: {}", user.email));
                        self.sign_in.reset();
                        self.activate_session(token, user);
                        self.router.replace(PATH_TABS);
                    }
                    Err(err) => {
                        self.debug_logger
                            .error(DebugCategory::Auth, format!("sign-in failed: {}", err));
                        self.sign_in.error = Some(match err {
                            AuthError::Incomplete { .. } => INCOMPLETE_SIGN_IN.to_string(),
                            other => other.user_message(FALLBACK_SIGN_IN),
                        });
                    }
                }
            }
        }
    }

    fn check_sign_up_result(&mut self) {
        if let Some(ref rx) = self.sign_up_result {
            if let Ok(result) = rx.try_recv() {
                self.sign_up_result = None;
                self.sign_up.loading = false;

                match result {
                    Ok(sign_up_id) => {
                        self.debug_logger.info(
                            DebugCategory::Auth,
                            format!("sign-up created, verification code sent to {}", self.sign_up.email),
                        );
                        self.pending_sign_up_id = Some(sign_up_id);
                        self.sign_up.pending_verification = true;
                        self.sign_up.error = None;
                    }
                    Err(err) => {
                        self.debug_logger
                            .error(DebugCategory::Auth, format!("sign-up failed: {}", err));
                        self.sign_up.error = Some(err.user_message(FALLBACK_SIGN_UP));
                    }
                }
            }
        }
    }

    fn check_verify_result(&mut self) {
        if let Some(ref rx) = self.verify_result {
            if let Ok(result) = rx.try_recv() {
                self.verify_result = None;
                self.sign_up.loading = false;

                match result {
                    Ok((token, user)) => {
                        self.debug_logger.info(
                            DebugCategory::Auth,
                            format!("email verified, signed up: {}", user.email),
                        );
                        self.sign_up.reset();
                        self.pending_sign_up_id = None;
                        self.activate_session(token, user);
                        self.router.replace(PATH_TABS);
                    }
                    Err(err) => {
                        self.debug_logger
                            .error(DebugCategory::Auth, format!("verification failed: {}", err));
                        self.sign_up.error = Some(match err {
                            AuthError::Incomplete { .. } => INCOMPLETE_VERIFY.to_string(),
                            other => other.user_message(FALLBACK_VERIFY),
                        });
                    }
                }
            }
        }
    }

    fn check_reset_request_result(&mut self) {
        if let Some(ref rx) = self.reset_request_result {
            if let Ok(result) = rx.try_recv() {
                self.reset_request_result = None;
                self.forgot_password.loading = false;

                match result {
                    Ok(()) => {
                        self.debug_logger.info(
                            DebugCategory::Auth,
                            format!("reset email sent to {}", self.forgot_password.email),
                        );
                        self.forgot_password.email_sent = true;
                        self.forgot_password.error = None;
                    }
                    Err(err) => {
                        self.debug_logger
                            .error(DebugCategory::Auth, format!("reset request failed: {}", err));
                        self.forgot_password.error = Some(err.user_message(FALLBACK_RESET));
                    }
                }
            }
        }
    }

    fn check_change_password_result(&mut self) {
        if let Some(ref rx) = self.change_password_result {
            if let Ok(result) = rx.try_recv() {
                self.change_password_result = None;
                self.change_password.loading = false;

                match result {
                    Ok(()) => {
                        self.debug_logger
                            .info(DebugCategory::Auth, "password updated");
                        self.change_password.reset();
                        self.router.back();
                    }
                    Err(err) => {
                        self.debug_logger
                            .error(DebugCategory::Auth, format!("password update failed: {}", err));
                        self.change_password.error =
                            Some(err.user_message(FALLBACK_CHANGE_PASSWORD));
                    }
                }
            }
        }
    }

    pub fn handle_sign_in(&mut self) {
        if self.sign_in.loading {
            return;
        }
        if let Err(message) = self.sign_in.validate() {
            self.sign_in.error = Some(message);
            return;
        }

        self.sign_in.loading = true;
        self.sign_in.error = None;

        let email = self.sign_in.email.clone();
        let password = self.sign_in.password.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(AuthError::Runtime {
                        message: e.to_string(),
                    }));
                    return;
                }
            };
            let result = rt.block_on(auth::sign_in(&config, email, password));
            let _ = tx.send(result);
        });

        self.sign_in_result = Some(rx);
    }

    pub fn handle_sign_up(&mut self) {
        if self.sign_up.loading {
            return;
        }
        if let Err(message) = self.sign_up.validate() {
            self.sign_up.error = Some(message);
            return;
        }

        self.sign_up.loading = true;
        self.sign_up.error = None;

        let email = self.sign_up.email.clone();
        let password = self.sign_up.password.clone();
        let first_name = self.sign_up.first_name.clone();
        let last_name = self.sign_up.last_name.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(AuthError::Runtime {
                        message: e.to_string(),
                    }));
                    return;
                }
            };
            let result = rt.block_on(auth::create_sign_up(
                &config, email, password, first_name, last_name,
            ));
            let _ = tx.send(result);
        });

        self.sign_up_result = Some(rx);
    }

    pub fn handle_verify_email(&mut self) {
        if self.sign_up.loading {
            return;
        }
        let Some(sign_up_id) = self.pending_sign_up_id.clone() else {
            self.sign_up.error = Some(FALLBACK_VERIFY.to_string());
            return;
        };
        if self.sign_up.code.trim().is_empty() {
            self.sign_up.error = Some("Verification code is required".to_string());
            return;
        }

        self.sign_up.loading = true;
        self.sign_up.error = None;

        let code = self.sign_up.code.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(AuthError::Runtime {
                        message: e.to_string(),
                    }));
                    return;
                }
            };
            let result = rt.block_on(auth::verify_email(&config, &sign_up_id, code));
            let _ = tx.send(result);
        });

        self.verify_result = Some(rx);
    }

    pub fn handle_reset_request(&mut self) {
        if self.forgot_password.loading {
            return;
        }
        if let Err(message) = self.forgot_password.validate() {
            self.forgot_password.error = Some(message);
            return;
        }

        self.forgot_password.loading = true;
        self.forgot_password.error = None;

        let email = self.forgot_password.email.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(AuthError::Runtime {
                        message: e.to_string(),
                    }));
                    return;
                }
            };
            let result = rt.block_on(auth::request_password_reset(&config, email));
            let _ = tx.send(result);
        });

        self.reset_request_result = Some(rx);
    }

    pub fn handle_change_password(&mut self) {
        if self.change_password.loading {
            return;
        }
        if let Err(message) = self.change_password.validate() {
            self.change_password.error = Some(message);
            return;
        }

        self.change_password.loading = true;
        self.change_password.error = None;

        let current = self.change_password.current_password.clone();
        let new = self.change_password.new_password.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(AuthError::Runtime {
                        message: e.to_string(),
                    }));
                    return;
                }
            };
            let result = rt.block_on(auth::update_password(&config, current, new));
            let _ = tx.send(result);
        });

        self.change_password_result = Some(rx);
    }

    /// Sign out: revoke the provider session (fire-and-forget), clear the
    /// local session and cached token, and return to the sign-in screen.
    pub fn sign_out(&mut self) {
        if let Some(token) = self.session.token().map(str::to_string) {
            let config = self.config.clone();
            let cache = self.token_cache.clone();
            std::thread::spawn(move || {
                if let Ok(rt) = tokio::runtime::Runtime::new() {
                    rt.block_on(async {
                        if let Err(err) = auth::sign_out(&config, &token).await {
                            tracing::warn!(%err, "sign-out revoke failed");
                        }
                        cache.clear(SESSION_TOKEN_KEY).await;
                    });
                }
            });
        }

        self.debug_logger.info(DebugCategory::Auth, "signed out");
        self.config.clear_token();
        self.session.clear();
        self.sign_in.reset();
        self.sign_up.reset();
        self.forgot_password.reset();
        self.change_password.reset();
        self.pending_sign_up_id = None;
        self.active_tab = ActiveTab::Home;
        self.router.replace(PATH_SIGN_IN);
    }

    fn activate_session(&mut self, token: String, user: UserInfo) {
        self.config.set_token(Some(token.clone()));
        self.session.activate(token.clone(), user);

        // Persist off the UI thread; a failed write just means no restore
        // next launch.
        let cache = self.token_cache.clone();
        std::thread::spawn(move || {
            if let Ok(rt) = tokio::runtime::Runtime::new() {
                rt.block_on(cache.set(SESSION_TOKEN_KEY, token.as_bytes()));
            }
        });
    }

    /// Re-run the route guard if the session or router changed since the
    /// last evaluation. The guard's own replace bumps the router epoch, so
    /// the follow-up evaluation happens next frame and settles on
    /// `Redirect::None` (decisions are idempotent).
    pub fn run_route_guard(&mut self) -> Redirect {
        let current = (self.session.epoch(), self.router.epoch());
        if self.guard_seen == Some(current) {
            return Redirect::None;
        }
        self.guard_seen = Some(current);

        let decision = self
            .guard
            .on_change(&self.session, &mut self.router, &mut self.splash);
        if decision != Redirect::None {
            self.debug_logger.info(
                DebugCategory::Nav,
                format!("redirect {:?} -> {}", decision, self.router.current_path()),
            );
        }
        decision
    }
}
