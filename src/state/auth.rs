//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and auth-aware components read this to decide between
//! protected content and a login redirect. The state is resolved exactly once
//! per page load by a credentialed verification call; it is never persisted,
//! so a full reload starts over in the initializing phase.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::toast::{self, Severity, ToastState};

/// Login status shared across the component tree.
///
/// Provided as a context `RwSignal`; operations take the signal explicitly so
/// every call site shows its dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Whether the backend considers this session logged in.
    pub authenticated: bool,
    /// True until the first verification round-trip resolves. Consumers must
    /// not make access-control decisions while this holds.
    pub initializing: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            initializing: true,
        }
    }
}

/// Fold the outcome of the verification call into the state.
///
/// `None` means the call failed (network error or non-2xx) and fails closed
/// to logged-out. `initializing` clears on every path.
pub fn apply_verify_result(state: &mut AuthState, verified: Option<bool>) {
    state.authenticated = verified.unwrap_or(false);
    state.initializing = false;
}

/// Toast severity, toast text, and destination route for a finished logout
/// attempt. A failed server call still logs the client out locally.
pub fn logout_transition(server_ok: bool) -> (Severity, &'static str, &'static str) {
    if server_ok {
        (Severity::Success, "Logged out.", "/")
    } else {
        (
            Severity::Warning,
            "Logged out locally; the server could not be reached.",
            "/login",
        )
    }
}

/// Verify the session against the backend. Invoked once at application mount.
pub async fn initialize(auth: RwSignal<AuthState>) {
    let verified = crate::net::api::verify_session().await;
    auth.try_update(|state| apply_verify_result(state, verified));
}

/// Record a confirmed login. Called by the login page after the backend
/// accepts credentials.
pub fn mark_logged_in(auth: RwSignal<AuthState>) {
    auth.try_update(|state| state.authenticated = true);
}

/// Log out against the backend, then force the local session closed whether
/// or not the server call succeeded. Emits a toast describing the outcome and
/// navigates to the transition route. No retries; the user may trigger logout
/// again manually.
pub async fn log_out<F>(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, navigate: F)
where
    F: Fn(&str),
{
    let server_ok = crate::net::api::logout().await;
    auth.try_update(|state| state.authenticated = false);
    let (severity, message, route) = logout_transition(server_ok);
    toast::notify(toasts, message, severity);
    navigate(route);
}
