//! Property-based tests for the route-guard decision function.

use anteroom::app::guard::{decide, Redirect, Segment};
use proptest::prelude::*;

fn any_segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        Just(Segment::SignIn),
        Just(Segment::SignUp),
        Just(Segment::ForgotPassword),
        Just(Segment::TabsRoot),
        Just(Segment::ChangePassword),
        Just(Segment::Other),
    ]
}

proptest! {
    #[test]
    fn test_no_decision_until_loaded(signed_in in any::<bool>(), segment in any_segment()) {
        prop_assert_eq!(decide(false, signed_in, segment), Redirect::None);
    }

    #[test]
    fn test_decide_is_pure(loaded in any::<bool>(), signed_in in any::<bool>(), segment in any_segment()) {
        let first = decide(loaded, signed_in, segment);
        let second = decide(loaded, signed_in, segment);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_signed_in_never_sent_to_sign_in(segment in any_segment()) {
        prop_assert_ne!(decide(true, true, segment), Redirect::ToSignIn);
    }

    #[test]
    fn test_signed_in_stays_only_on_protected(segment in any_segment()) {
        let decision = decide(true, true, segment);
        if segment.is_protected() {
            prop_assert_eq!(decision, Redirect::None);
        } else {
            prop_assert_eq!(decision, Redirect::ToTabs);
        }
    }

    #[test]
    fn test_signed_out_never_sent_to_tabs(segment in any_segment()) {
        prop_assert_ne!(decide(true, false, segment), Redirect::ToTabs);
    }

    #[test]
    fn test_signed_out_redirected_only_from_protected(segment in any_segment()) {
        let decision = decide(true, false, segment);
        if segment.is_protected() {
            prop_assert_eq!(decision, Redirect::ToSignIn);
        } else {
            prop_assert_eq!(decision, Redirect::None);
        }
    }

    #[test]
    fn test_classify_arbitrary_strings(segment in "[a-z-]{0,24}") {
        let classified = Segment::classify(Some(&segment));
        let expected = match segment.as_str() {
            "sign-in" => Segment::SignIn,
            "sign-up" => Segment::SignUp,
            "forgot-password" => Segment::ForgotPassword,
            "tabs" => Segment::TabsRoot,
            "change-password" => Segment::ChangePassword,
            _ => Segment::Other,
        };
        prop_assert_eq!(classified, expected);
    }

    #[test]
    fn test_redirect_target_never_redirects_again(loaded in any::<bool>(), signed_in in any::<bool>(), segment in any_segment()) {
        // Wherever the guard sends the user, re-evaluating at the target
        // must be a no-op: redirects cannot chain.
        let follow_up = match decide(loaded, signed_in, segment) {
            Redirect::ToTabs => decide(loaded, signed_in, Segment::TabsRoot),
            Redirect::ToSignIn => decide(loaded, signed_in, Segment::SignIn),
            Redirect::None => Redirect::None,
        };
        prop_assert_eq!(follow_up, Redirect::None);
    }
}
