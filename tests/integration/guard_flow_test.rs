//! Route-guard driver flows: session and router changes feeding the guard,
//! redirects applied through the real Router, splash one-shot behavior,
//! and the full restore-at-startup path against a mock provider.

use anteroom::app::guard::{Redirect, RouteGuard, Segment, Splash};
use anteroom::app::router::{
    Router, PATH_CHANGE_PASSWORD, PATH_FORGOT_PASSWORD, PATH_SIGN_IN, PATH_TABS,
};
use anteroom::app::session::Session;
use anteroom::app::state::AppState;
use anteroom::app::token_cache::{TokenCache, SESSION_TOKEN_KEY};
use anteroom::app::types::UserInfo;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{config_for, provider_server, unique_email, user_json};

fn test_user() -> UserInfo {
    UserInfo {
        id: "usr_1".to_string(),
        email: "ada@example.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
        username: None,
        email_verified: true,
        created_at: None,
        last_sign_in_at: None,
    }
}

/// Run the guard until it stops moving the router; returns the number of
/// evaluations that produced a redirect.
fn settle(guard: &mut RouteGuard, session: &Session, router: &mut Router, splash: &mut Splash) -> usize {
    let mut redirects = 0;
    for _ in 0..4 {
        match guard.on_change(session, router, splash) {
            Redirect::None => return redirects,
            _ => redirects += 1,
        }
    }
    panic!("guard did not settle: redirect loop");
}

#[test]
fn test_scenario_unloaded_protected_segment() {
    // authLoaded=false, signedIn=false, segment=tabs-root -> no action.
    let session = Session::new();
    let mut router = Router::new(PATH_TABS);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::None
    );
    assert_eq!(router.current_path(), PATH_TABS);
    assert!(splash.is_visible());
}

#[test]
fn test_scenario_signed_out_on_tabs() {
    // authLoaded=true, signedIn=false, segment=tabs-root -> sign-in.
    let mut session = Session::new();
    session.finish_load(None);
    let mut router = Router::new(PATH_TABS);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::ToSignIn
    );
    assert_eq!(router.current_path(), PATH_SIGN_IN);
    assert!(!splash.is_visible());
}

#[test]
fn test_scenario_signed_in_on_sign_in() {
    // authLoaded=true, signedIn=true, segment=sign-in -> tabs.
    let mut session = Session::new();
    session.finish_load(Some(("tok_1".to_string(), test_user())));
    let mut router = Router::new(PATH_SIGN_IN);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::ToTabs
    );
    assert_eq!(router.current_path(), PATH_TABS);
}

#[test]
fn test_scenario_signed_in_on_change_password() {
    // authLoaded=true, signedIn=true, segment=change-password -> stay.
    let mut session = Session::new();
    session.finish_load(Some(("tok_1".to_string(), test_user())));
    let mut router = Router::new(PATH_TABS);
    router.push(PATH_CHANGE_PASSWORD);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::None
    );
    assert_eq!(router.current_path(), PATH_CHANGE_PASSWORD);
}

#[test]
fn test_scenario_signed_out_on_forgot_password() {
    // authLoaded=true, signedIn=false, segment=forgot-password -> stay.
    let mut session = Session::new();
    session.finish_load(None);
    let mut router = Router::new(PATH_FORGOT_PASSWORD);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::None
    );
    assert_eq!(router.current_path(), PATH_FORGOT_PASSWORD);
}

#[test]
fn test_signed_in_unknown_segment_redirects_to_tabs() {
    let mut session = Session::new();
    session.finish_load(Some(("tok_1".to_string(), test_user())));
    let mut router = Router::new("/somewhere/odd");
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::ToTabs
    );
    assert_eq!(router.current_path(), PATH_TABS);
}

#[test]
fn test_signed_out_unknown_segment_passes_through() {
    let mut session = Session::new();
    session.finish_load(None);
    let mut router = Router::new("/somewhere/odd");
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    assert_eq!(
        guard.on_change(&session, &mut router, &mut splash),
        Redirect::None
    );
    assert_eq!(router.current_path(), "/somewhere/odd");
}

#[test]
fn test_guard_settles_after_redirect() {
    let mut session = Session::new();
    session.finish_load(None);
    let mut router = Router::new(PATH_TABS);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    let redirects = settle(&mut guard, &session, &mut router, &mut splash);
    assert_eq!(redirects, 1);
    assert_eq!(router.current_path(), PATH_SIGN_IN);
}

#[test]
fn test_full_sign_in_sign_out_cycle() {
    let mut session = Session::new();
    let mut router = Router::new(PATH_TABS);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    // Boot signed out: pushed to sign-in.
    session.finish_load(None);
    settle(&mut guard, &session, &mut router, &mut splash);
    assert_eq!(router.current_path(), PATH_SIGN_IN);

    // Sign-in completes: steered into the app.
    session.activate("tok_1".to_string(), test_user());
    settle(&mut guard, &session, &mut router, &mut splash);
    assert_eq!(router.current_path(), PATH_TABS);

    // Sign-out: kicked back to sign-in.
    session.clear();
    settle(&mut guard, &session, &mut router, &mut splash);
    assert_eq!(router.current_path(), PATH_SIGN_IN);
}

#[test]
fn test_splash_hides_exactly_once() {
    let mut session = Session::new();
    let mut router = Router::new(PATH_TABS);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    guard.on_change(&session, &mut router, &mut splash);
    assert!(splash.is_visible());

    session.finish_load(None);
    guard.on_change(&session, &mut router, &mut splash);
    assert!(!splash.is_visible());

    // Later sign-in / sign-out churn must not resurrect or re-fire it.
    session.activate("tok_1".to_string(), test_user());
    guard.on_change(&session, &mut router, &mut splash);
    session.clear();
    guard.on_change(&session, &mut router, &mut splash);
    assert!(!splash.is_visible());
}

#[test]
fn test_burst_of_changes_last_write_wins() {
    let mut session = Session::new();
    let mut router = Router::new(PATH_SIGN_IN);
    let mut guard = RouteGuard::new();
    let mut splash = Splash::new();

    // Several state changes land before the guard runs again; only the
    // final state matters for the decision.
    session.finish_load(None);
    session.activate("tok_1".to_string(), test_user());
    session.clear();
    router.replace(PATH_TABS);

    settle(&mut guard, &session, &mut router, &mut splash);
    assert_eq!(router.current_path(), PATH_SIGN_IN);
}

#[test]
fn test_app_state_restores_session_from_cache() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(provider_server());
    let email = unique_email("restore");

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(&email)))
            .mount(&server),
    );

    let cache_dir = tempfile::tempdir().unwrap();
    std::fs::write(cache_dir.path().join(SESSION_TOKEN_KEY), b"tok_cached").unwrap();

    let config = config_for(&server);
    let cache = TokenCache::with_dir(cache_dir.path().to_path_buf());
    let mut state = AppState::with_token_cache(config, cache);
    state.begin_session_restore();

    // Poll like the frame loop does until the restore lands.
    for _ in 0..200 {
        state.check_results();
        state.run_route_guard();
        if state.session.is_loaded() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(25));
    }

    assert!(state.session.is_loaded());
    assert!(state.session.is_signed_in());
    assert_eq!(state.session.token(), Some("tok_cached"));
    assert_eq!(state.session.user().unwrap().email, email);
    assert!(!state.splash.is_visible());
    assert_eq!(state.router.current_path(), PATH_TABS);
}

#[test]
fn test_app_state_restore_with_rejected_token_starts_signed_out() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(provider_server());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "errors": [{ "code": "session_expired", "message": "Session expired." }]
            })))
            .mount(&server),
    );

    let cache_dir = tempfile::tempdir().unwrap();
    std::fs::write(cache_dir.path().join(SESSION_TOKEN_KEY), b"tok_stale").unwrap();

    let config = config_for(&server);
    let cache = TokenCache::with_dir(cache_dir.path().to_path_buf());
    let mut state = AppState::with_token_cache(config, cache);
    state.begin_session_restore();

    for _ in 0..200 {
        state.check_results();
        state.run_route_guard();
        if state.session.is_loaded() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(25));
    }

    assert!(state.session.is_loaded());
    assert!(!state.session.is_signed_in());
    // The guard walked the signed-out user off the tabs root.
    state.run_route_guard();
    assert_eq!(state.router.current_path(), PATH_SIGN_IN);
}

#[test]
fn test_app_state_restore_with_empty_cache_starts_signed_out() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(provider_server());

    let cache_dir = tempfile::tempdir().unwrap();
    let config = config_for(&server);
    let cache = TokenCache::with_dir(cache_dir.path().to_path_buf());
    let mut state = AppState::with_token_cache(config, cache);
    state.begin_session_restore();

    for _ in 0..200 {
        state.check_results();
        if state.session.is_loaded() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(25));
    }

    assert!(state.session.is_loaded());
    assert!(!state.session.is_signed_in());
    assert_eq!(state.router.active_segment(), Segment::TabsRoot);
    state.run_route_guard();
    assert_eq!(state.router.active_segment(), Segment::SignIn);
}
