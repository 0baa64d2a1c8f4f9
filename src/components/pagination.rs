//! Page selector for board listings.
//!
//! DESIGN
//! ======
//! Shows a sliding window of page numbers around the current page so long
//! boards never render hundreds of buttons.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// How many page buttons are visible at once.
const WINDOW: i64 = 5;

/// The page numbers to display for `current` out of `total` pages.
///
/// The window is centered on `current` where possible and clamped to the
/// valid range; it never exceeds [`WINDOW`] entries.
pub fn page_window(current: i64, total: i64) -> Vec<i64> {
    if total < 1 {
        return Vec::new();
    }
    let half = WINDOW / 2;
    let mut start = (current - half).max(1);
    let end = (start + WINDOW - 1).min(total);
    start = (end - WINDOW + 1).max(1);
    (start..=end).collect()
}

/// Numbered page buttons with the current page highlighted.
#[component]
pub fn Pagination(current: RwSignal<i64>, total: Signal<i64>) -> impl IntoView {
    view! {
        <nav class="pagination">
            {move || {
                let active = current.get();
                page_window(active, total.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=move || page == current.get()
                                on:click=move |_| current.set(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
