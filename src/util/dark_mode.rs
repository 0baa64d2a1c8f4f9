//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to `localStorage`
//! and updates that attribute. SSR paths safely no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "dypocrypha_dark";

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::read(STORAGE_KEY) {
        return stored == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::write(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
