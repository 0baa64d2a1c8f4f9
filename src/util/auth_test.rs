use super::*;

#[test]
fn should_redirect_unauth_when_settled_and_logged_out() {
    let state = AuthState {
        authenticated: false,
        initializing: false,
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_initializing() {
    // Deciding to redirect before verification resolves is the race this
    // guard exists to prevent.
    let state = AuthState {
        authenticated: false,
        initializing: true,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = AuthState {
        authenticated: true,
        initializing: false,
    };
    assert!(!should_redirect_unauth(&state));
}
