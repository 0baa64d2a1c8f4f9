//! Archive page — shared file listing with upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Unlike the write page, the redirect here fires as soon as
//! the session reads logged out, without waiting for the first verification
//! to settle; keep that behavior when touching this page.

#[cfg(test)]
#[path = "archive_test.rs"]
mod archive_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::ArchiveEntry;
use crate::state::auth::AuthState;
use crate::state::toast::{Severity, ToastState};
use crate::util::redirect_stash;

/// Human-readable file size for listing rows.
fn size_label(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        #[allow(clippy::cast_precision_loss)]
        return format!("{:.1} MiB", bytes as f64 / MIB as f64);
    }
    if bytes >= KIB {
        return format!("{} KiB", bytes / KIB);
    }
    format!("{bytes} B")
}

/// Archive page — lists stored files and accepts uploads.
#[component]
pub fn ArchivePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    redirect_stash::install_drain(toasts);

    // Redirects on any logged-out read, including the initializing window.
    Effect::new(move || {
        if !auth.get().authenticated {
            redirect_stash::stash_for_next_page("Sign in to use the archive.", Severity::Warning);
            navigate("/login", NavigateOptions::default());
        }
    });

    let entries = RwSignal::new(Vec::<ArchiveEntry>::new());
    let loading = RwSignal::new(true);
    let uploading = RwSignal::new(false);
    // Bumped after a successful upload to refetch the listing.
    let listing_rev = RwSignal::new(0_u32);
    let file_input = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        listing_rev.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(fetched) = crate::net::api::fetch_archive().await {
                entries.set(fetched);
            }
            loading.set(false);
        });
    });

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                crate::state::toast::notify(toasts, "Choose a file first.", Severity::Warning);
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_archive_file(&file).await {
                    Ok(()) => {
                        crate::state::toast::notify(toasts, "File uploaded.", Severity::Success);
                        listing_rev.update(|rev| *rev += 1);
                    }
                    Err(message) => {
                        crate::state::toast::notify(toasts, format!("Upload failed: {message}"), Severity::Error);
                    }
                }
                uploading.set(false);
            });
        }
    };

    view! {
        <div class="archive-page">
            <header class="archive-page__header">
                <h1>"Archive"</h1>
                <form class="archive-upload" on:submit=on_upload>
                    <input class="archive-upload__file" type="file" node_ref=file_input/>
                    <button
                        class="archive-upload__submit"
                        type="submit"
                        disabled=move || uploading.get()
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="archive-page__loading">"Loading files..."</p> }
            >
                <table class="archive-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Size"</th>
                            <th>"Uploaded by"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            entries
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <tr class="archive-table__row">
                                            <td>{entry.name}</td>
                                            <td>{size_label(entry.size_bytes)}</td>
                                            <td>{entry.uploaded_by}</td>
                                            <td>{entry.created_at}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
