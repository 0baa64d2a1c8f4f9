//! Login page with email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Unauthenticated redirects land here with a stashed notice, so this page
//! drains the redirect stash on mount. On a confirmed login it marks the
//! session, stashes a success notice, and navigates home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::{self, Severity, ToastState};
use crate::util::redirect_stash;

/// Validate login form input, trimming whitespace.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page — authenticates against the backend and redirects home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let go = Callback::new(move |path: String| navigate(&path, NavigateOptions::default()));

    redirect_stash::install_drain(toasts);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    toast::notify(toasts, message, Severity::Warning);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(()) => {
                    crate::state::auth::mark_logged_in(auth);
                    redirect_stash::stash_for_next_page("Signed in.", Severity::Success);
                    go.run("/".to_owned());
                }
                Err(message) => {
                    toast::notify(toasts, message, Severity::Error);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, auth, go);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Dypocrypha"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
