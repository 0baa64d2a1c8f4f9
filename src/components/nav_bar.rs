//! Site-wide navigation header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth-aware chrome: shows a login link until the session settles as logged
//! in, then a logout button. Nothing auth-specific renders while the first
//! verification is still in flight.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::dark_mode;

/// Navigation header with links to every section and session controls.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    // Callback so the logout handler stays Copy for use inside <Show>.
    let go = Callback::new(move |path: String| navigate(&path, NavigateOptions::default()));
    let dark = RwSignal::new(dark_mode::read_preference());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::auth::log_out(auth, toasts, move |route| go.run(route.to_owned())).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (go, toasts);
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Dypocrypha"
            </a>
            <nav class="nav-bar__links">
                <a href="/board/free">"Board"</a>
                <a href="/archive">"Archive"</a>
                <a href="/projects">"Projects"</a>
            </nav>

            <span class="nav-bar__spacer"></span>

            <button
                class="nav-bar__dark-toggle"
                on:click=move |_| {
                    let next = dark_mode::toggle(dark.get_untracked());
                    dark.set(next);
                }
                title="Toggle dark mode"
            >
                {move || if dark.get() { "☀" } else { "☾" }}
            </button>

            <Show when=move || !auth.get().initializing>
                <Show
                    when=move || auth.get().authenticated
                    fallback=|| {
                        view! {
                            <a class="nav-bar__login" href="/login">
                                "Login"
                            </a>
                        }
                    }
                >
                    <button class="nav-bar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </Show>
        </header>
    }
}
