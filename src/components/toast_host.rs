//! Globally mounted toast display.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in `App`, above the router, so every page shares one queue
//! and one display surface. Entries expire on their own timers; the dismiss
//! button removes them early.

use leptos::prelude::*;

use crate::state::toast::{self, ToastState};

/// Renders the transient toast queue in insertion order.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|t| {
                        let class = format!("toast toast--{}", t.severity.css_class());
                        let id = t.id;
                        view! {
                            <div class=class role="status">
                                <span class="toast__text">{t.text}</span>
                                <button
                                    class="toast__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| toast::dismiss(toasts, id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
