//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! including the message stashed for the login page to surface.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::toast::Severity;
use crate::util::redirect_stash;

/// True when the session has settled and nobody is logged in. Never true
/// while the first verification round-trip is still in flight.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.initializing && !state.authenticated
}

/// Redirect to `/login` whenever auth has settled with no user, stashing a
/// notice for the login page to show after the navigation.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            redirect_stash::stash_for_next_page("Sign in to continue.", Severity::Warning);
            navigate("/login", NavigateOptions::default());
        }
    });
}
