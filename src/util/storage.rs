//! Browser localStorage access behind hydrate gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes web-sys storage glue so callers never touch `window` directly.
//! Every operation degrades to a no-op when storage is unavailable (SSR,
//! storage disabled, quota errors); nothing here can panic a page.

/// Read the raw string value for `key`. `None` when the key is absent or
/// storage is unavailable.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`. Best-effort; failures are swallowed.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete `key`. Best-effort; failures are swallowed.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
