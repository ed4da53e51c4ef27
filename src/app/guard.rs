//! Route guard: auth-gated navigation.
//!
//! Classifies the current screen into auth-only (sign-in, sign-up,
//! forgot-password), protected (tabs, change-password) or other, and keeps
//! users on the side of the fence their session state allows: signed-out
//! users never observe protected screens, signed-in users are steered away
//! from the auth screens. While the session is still loading no decision
//! is made and the loading splash stays up.
//!
//! The decision itself is a pure function of `(loaded, signed_in,
//! segment)`; the [`RouteGuard`] driver is invoked on every session or
//! router change and issues at most one `replace` navigation per change.
//! Re-running it with unchanged inputs always yields the same decision, so
//! a redirect can never loop.

use crate::app::router::{PATH_SIGN_IN, PATH_TABS};

/// Classification of the first path segment into the closed set of screens
/// the guard knows about. Unknown or absent segments are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `/sign-in`
    SignIn,
    /// `/sign-up`
    SignUp,
    /// `/forgot-password`
    ForgotPassword,
    /// `/tabs` - the main tabbed app
    TabsRoot,
    /// `/change-password` - modal over the profile tab
    ChangePassword,
    /// Anything else, including an empty location
    Other,
}

impl Segment {
    /// Classify a raw top-level path segment.
    pub fn classify(segment: Option<&str>) -> Self {
        match segment {
            Some("sign-in") => Segment::SignIn,
            Some("sign-up") => Segment::SignUp,
            Some("forgot-password") => Segment::ForgotPassword,
            Some("tabs") => Segment::TabsRoot,
            Some("change-password") => Segment::ChangePassword,
            _ => Segment::Other,
        }
    }

    /// Screens reserved for signed-out users.
    pub fn is_auth_only(self) -> bool {
        matches!(
            self,
            Segment::SignIn | Segment::SignUp | Segment::ForgotPassword
        )
    }

    /// Screens that require an active session.
    pub fn is_protected(self) -> bool {
        matches!(self, Segment::TabsRoot | Segment::ChangePassword)
    }
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Stay where we are
    None,
    /// Replace the current location with the tabs root
    ToTabs,
    /// Replace the current location with the sign-in screen
    ToSignIn,
}

/// Decide whether the current location needs a redirect.
///
/// Rules, in order:
/// 1. Session not loaded yet: no decision.
/// 2. Signed in on an auth-only screen: go to tabs.
/// 3. Signed in anywhere that is neither protected nor auth-only
///    (unknown/root locations included): go to tabs.
/// 4. Signed in on a protected screen: stay.
/// 5. Signed out on a protected screen: go to sign-in.
/// 6. Signed out elsewhere: stay. Auth screens and unknown segments are
///    left alone when signed out.
pub fn decide(auth_loaded: bool, signed_in: bool, segment: Segment) -> Redirect {
    if !auth_loaded {
        return Redirect::None;
    }

    if signed_in {
        if segment.is_auth_only() {
            return Redirect::ToTabs;
        }
        if !segment.is_protected() {
            return Redirect::ToTabs;
        }
        Redirect::None
    } else if segment.is_protected() {
        Redirect::ToSignIn
    } else {
        Redirect::None
    }
}

/// Read-only view of the authentication state the guard reacts to.
pub trait AuthStateProvider {
    /// Whether session bootstrapping has completed.
    fn is_loaded(&self) -> bool;
    /// Whether a user session is active. Meaningless until loaded.
    fn is_signed_in(&self) -> bool;
}

/// The navigation surface the guard drives.
pub trait Navigator {
    /// Classification of the current top-level segment.
    fn active_segment(&self) -> Segment;
    /// Replace the current location, superseding the current stack entry
    /// without pushing history. Fire-and-forget; the guard never awaits or
    /// retries it.
    fn replace(&mut self, path: &str);
}

/// One-shot loading splash. Starts visible and can only be hidden once;
/// hiding again is a no-op.
#[derive(Debug)]
pub struct Splash {
    visible: bool,
}

impl Splash {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            tracing::debug!("loading splash hidden");
        }
    }
}

impl Default for Splash {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver around [`decide`]. The owner invokes [`RouteGuard::on_change`]
/// on every session or router change notification; the guard recomputes
/// the decision and, when it is not [`Redirect::None`], issues a single
/// replace navigation. The first time the session reports loaded it also
/// hides the splash, exactly once for the lifetime of the guard.
#[derive(Debug)]
pub struct RouteGuard {
    splash_hidden: bool,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            splash_hidden: false,
        }
    }

    /// React to one state-change notification. Returns the decision that
    /// was applied so callers can log it.
    pub fn on_change<A, N>(&mut self, auth: &A, nav: &mut N, splash: &mut Splash) -> Redirect
    where
        A: AuthStateProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        if auth.is_loaded() && !self.splash_hidden {
            splash.hide();
            self.splash_hidden = true;
        }

        let decision = decide(auth.is_loaded(), auth.is_signed_in(), nav.active_segment());
        match decision {
            Redirect::ToTabs => nav.replace(PATH_TABS),
            Redirect::ToSignIn => nav.replace(PATH_SIGN_IN),
            Redirect::None => {}
        }
        decision
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}
