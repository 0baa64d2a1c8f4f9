//! Landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Destination of most post-action redirects (login, logout, publish), so it
//! drains the redirect stash before anything else.

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::util::redirect_stash;

/// Landing page with entry points into each section.
#[component]
pub fn HomePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    redirect_stash::install_drain(toasts);

    view! {
        <div class="home-page">
            <h1>"Dypocrypha"</h1>
            <p class="home-page__tagline">"Community boards, shared files, and project tracking."</p>
            <div class="home-page__sections">
                <a class="home-page__section" href="/board/free">
                    <h2>"Boards"</h2>
                    <p>"Posts and discussion."</p>
                </a>
                <a class="home-page__section" href="/archive">
                    <h2>"Archive"</h2>
                    <p>"Shared file storage."</p>
                </a>
                <a class="home-page__section" href="/projects">
                    <h2>"Projects"</h2>
                    <p>"What is being built, and when."</p>
                </a>
            </div>
        </div>
    }
}
