//! Post page — full content with comments.
//!
//! ARCHITECTURE
//! ============
//! Fetches the post and its comments from the route id. The comment form is
//! only rendered for an authenticated session; submitting refetches the
//! comment list rather than patching it locally.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_item::CommentItem;
use crate::net::types::{Comment, Post};
use crate::state::auth::AuthState;
use crate::state::toast::{self, Severity, ToastState};
use crate::util::markdown::render_markdown;
use crate::util::redirect_stash;

/// Validate a comment body, trimming whitespace.
fn validate_comment_input(content: &str) -> Result<String, &'static str> {
    let content = content.trim();
    if content.is_empty() {
        return Err("Write a comment first.");
    }
    Ok(content.to_owned())
}

/// Post page — renders one post with its comment thread.
#[component]
pub fn PostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    redirect_stash::install_drain(toasts);

    let post_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };
    let post = RwSignal::new(None::<Post>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let loading = RwSignal::new(true);
    let comment_draft = RwSignal::new(String::new());
    let comment_busy = RwSignal::new(false);
    // Bumped after a successful submit to refetch the thread.
    let comments_rev = RwSignal::new(0_u32);

    Effect::new(move || {
        let Some(id) = post_id() else {
            loading.set(false);
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_post(id).await;
            post.set(fetched);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    Effect::new(move || {
        comments_rev.track();
        let Some(id) = post_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(fetched) = crate::net::api::fetch_comments(id).await {
                comments.set(fetched);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if comment_busy.get_untracked() {
            return;
        }
        let Some(id) = post_id() else {
            return;
        };
        let content = match validate_comment_input(&comment_draft.get_untracked()) {
            Ok(content) => content,
            Err(message) => {
                toast::notify(toasts, message, Severity::Warning);
                return;
            }
        };
        comment_busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_comment(id, &content).await {
                Ok(()) => {
                    comment_draft.set(String::new());
                    comments_rev.update(|rev| *rev += 1);
                }
                Err(message) => {
                    toast::notify(toasts, format!("Comment failed: {message}"), Severity::Error);
                }
            }
            comment_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, content);
    };

    view! {
        <div class="post-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="post-page__loading">"Loading..."</p> }
            >
                {move || match post.get() {
                    Some(post) => {
                        view! {
                            <article class="post-view">
                                <h1 class="post-view__title">{post.title}</h1>
                                <div class="post-view__meta">
                                    <span>{post.author}</span>
                                    <span>{post.created_at}</span>
                                </div>
                                <div
                                    class="post-view__content"
                                    inner_html=render_markdown(&post.content)
                                ></div>
                            </article>
                        }
                            .into_any()
                    }
                    None => view! { <p class="post-page__error">"Post not found."</p> }.into_any(),
                }}
            </Show>

            <section class="post-page__comments">
                <h2>{move || format!("Comments ({})", comments.get().len())}</h2>
                {move || {
                    comments
                        .get()
                        .into_iter()
                        .map(|comment| view! { <CommentItem comment=comment/> })
                        .collect::<Vec<_>>()
                }}

                <Show when=move || auth.get().authenticated>
                    <form class="comment-form" on:submit=on_comment>
                        <textarea
                            class="comment-form__input"
                            placeholder="Write a comment"
                            prop:value=move || comment_draft.get()
                            on:input=move |ev| comment_draft.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            class="comment-form__submit"
                            type="submit"
                            disabled=move || comment_busy.get()
                        >
                            "Comment"
                        </button>
                    </form>
                </Show>
            </section>
        </div>
    }
}
