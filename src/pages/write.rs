//! Write page — post composition form for one board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route: waits for the session to settle, then redirects to login
//! with a stashed notice if nobody is logged in. Renders nothing until the
//! guard has an answer.

#[cfg(test)]
#[path = "write_test.rs"]
mod write_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::AuthState;
use crate::state::toast::{self, Severity, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::redirect_stash;

/// Validate post form input, trimming whitespace.
fn validate_post_input(title: &str, content: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the post a title.");
    }
    let content = content.trim();
    if content.is_empty() {
        return Err("The post needs some content.");
    }
    Ok((title.to_owned(), content.to_owned()))
}

/// Write page — creates a post on the board named in the route.
#[component]
pub fn WritePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let go = Callback::new({
        let navigate = navigate.clone();
        move |path: String| navigate(&path, NavigateOptions::default())
    });

    redirect_stash::install_drain(toasts);
    install_unauth_redirect(auth, navigate);

    let board_name = move || params.read().get("name").unwrap_or_default();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (title_value, content_value) =
            match validate_post_input(&title.get_untracked(), &content.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    toast::notify(toasts, message, Severity::Warning);
                    return;
                }
            };
        let board = board_name();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_post(&board, &title_value, &content_value).await {
                Ok(post_id) => {
                    redirect_stash::stash_for_next_page("Post published.", Severity::Success);
                    go.run(format!("/post/{post_id}"));
                }
                Err(message) => {
                    toast::notify(toasts, format!("Publish failed: {message}"), Severity::Error);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (board, title_value, content_value, go);
    };

    view! {
        <Show when=move || {
            let state = auth.get();
            !state.initializing && state.authenticated
        }>
            <div class="write-page">
                <h1>{move || format!("Write to {}", board_name())}</h1>
                <form class="write-form" on:submit=on_submit>
                    <input
                        class="write-form__title"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="write-form__content"
                        placeholder="Write in markdown"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <button class="write-form__submit" type="submit" disabled=move || busy.get()>
                        "Publish"
                    </button>
                </form>
            </div>
        </Show>
    }
}
