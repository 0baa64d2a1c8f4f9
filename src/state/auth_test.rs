use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn default_state_is_unauthenticated_and_initializing() {
    let state = AuthState::default();
    assert!(!state.authenticated);
    assert!(state.initializing);
}

// =============================================================
// Verification outcomes
// =============================================================

#[test]
fn verify_success_applies_server_reported_value() {
    let mut state = AuthState::default();
    apply_verify_result(&mut state, Some(true));
    assert!(state.authenticated);
    assert!(!state.initializing);
}

#[test]
fn verify_reporting_logged_out_clears_initializing() {
    let mut state = AuthState::default();
    apply_verify_result(&mut state, Some(false));
    assert!(!state.authenticated);
    assert!(!state.initializing);
}

#[test]
fn verify_failure_fails_closed() {
    let mut state = AuthState {
        authenticated: true,
        initializing: true,
    };
    apply_verify_result(&mut state, None);
    assert!(!state.authenticated);
    assert!(!state.initializing);
}

// =============================================================
// Logout transitions
// =============================================================

#[test]
fn logout_success_emits_success_toast_and_routes_home() {
    let (severity, _, route) = logout_transition(true);
    assert_eq!(severity, Severity::Success);
    assert_eq!(route, "/");
}

#[test]
fn logout_failure_still_warns_and_routes_to_login() {
    let (severity, message, route) = logout_transition(false);
    assert_eq!(severity, Severity::Warning);
    assert!(message.contains("Logged out locally"));
    assert_eq!(route, "/login");
}
