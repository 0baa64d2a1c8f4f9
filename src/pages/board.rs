//! Board page — paginated post listing for one named board.
//!
//! ARCHITECTURE
//! ============
//! Route-level coordinator between the URL board name, the page selector,
//! and the fetched post list. Viewing is public; the write action gates on
//! the session and stashes a notice when it redirects to login.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::pagination::Pagination;
use crate::components::post_card::PostCard;
use crate::net::types::PostList;
use crate::state::auth::AuthState;
use crate::state::toast::{Severity, ToastState};
use crate::util::redirect_stash;

/// Board display heading from its route name.
fn board_heading(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Route of the write form for `board`.
fn write_route(board: &str) -> String {
    format!("/board/{board}/write")
}

/// Board page — post list, pagination, and a write button.
#[component]
pub fn BoardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let go = Callback::new(move |path: String| navigate(&path, NavigateOptions::default()));

    redirect_stash::install_drain(toasts);

    let board_name = move || params.read().get("name").unwrap_or_default();
    let posts = RwSignal::new(None::<PostList>);
    let loading = RwSignal::new(true);
    let page = RwSignal::new(1_i64);

    Effect::new(move || {
        let name = board_name();
        let page_no = page.get();
        if name.is_empty() {
            return;
        }
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_posts(&name, page_no).await;
            posts.set(fetched);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, page_no);
    });

    let on_write = move |_| {
        if auth.get_untracked().authenticated {
            go.run(write_route(&board_name()));
        } else {
            redirect_stash::stash_for_next_page("Sign in to write a post.", Severity::Warning);
            go.run("/login".to_owned());
        }
    };

    let total_pages = Signal::derive(move || posts.get().map_or(1, |list| list.total_pages));

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1>{move || board_heading(&board_name())}</h1>
                <button class="board-page__write" on:click=on_write>
                    "Write"
                </button>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="board-page__loading">"Loading posts..."</p> }
            >
                {move || match posts.get() {
                    Some(list) if !list.posts.is_empty() => list
                        .posts
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect::<Vec<_>>()
                        .into_any(),
                    Some(_) => view! { <p class="board-page__empty">"No posts yet."</p> }.into_any(),
                    None => {
                        view! { <p class="board-page__error">"Could not load this board."</p> }
                            .into_any()
                    }
                }}
            </Show>

            <Pagination current=page total=total_pages/>
        </div>
    }
}
