//! Transient toast queue shared across the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the session holder push user-facing notices here; the globally
//! mounted `ToastHost` renders the queue and each entry expires on its own
//! timer. The durable cross-navigation variant lives in
//! `util::redirect_stash` and feeds back into this queue on page mount.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Most recent entries kept in the queue; older ones are evicted first.
pub const MAX_TOASTS: usize = 5;

/// Display duration before a toast expires on its own.
pub const TOAST_TTL_MS: u64 = 3000;

/// Visual weight of a notification.
///
/// Serialized lowercase because the durable stash stores it as
/// `"success"` / `"warning"` / `"error"` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier suffix used by `ToastHost`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
}

/// Insertion-ordered toast queue capped at [`MAX_TOASTS`].
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast, evicting the oldest entries beyond the cap.
    /// Returns the id assigned to the new entry; ids are monotonic.
    pub fn push(&mut self, text: String, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, text, severity });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove a toast by id. Removing an id that is already gone is a no-op,
    /// so a late expiry timer after a manual dismissal cannot double-remove.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Push a toast and schedule its expiry after [`TOAST_TTL_MS`].
///
/// Each toast gets an independent timer; timers are never coalesced or
/// cancelled by later calls. The timer dismisses by id only.
pub fn notify(toasts: RwSignal<ToastState>, text: impl Into<String>, severity: Severity) {
    let text = text.into();
    let id = toasts.try_update(|state| state.push(text, severity));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
            toasts.try_update(|state| state.remove(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Remove a toast by id. Safe to call on an already-dismissed id.
pub fn dismiss(toasts: RwSignal<ToastState>, id: u64) {
    toasts.try_update(|state| state.remove(id));
}
