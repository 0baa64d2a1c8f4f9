//! One-shot notification relay that survives a full page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page about to redirect writes its message to a single localStorage slot;
//! the destination page drains the slot into the transient toast queue on
//! mount. The slot holds at most one message: a second stash before the first
//! is drained overwrites it. Several flows depend on only the newest message
//! surviving, so this must stay a last-write-wins slot and not grow into a
//! queue.

#[cfg(test)]
#[path = "redirect_stash_test.rs"]
mod redirect_stash_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::toast::{self, Severity, ToastState};
use crate::util::storage;

/// Fixed localStorage key for the durable slot.
const STASH_KEY: &str = "redirectToast";

/// Wire shape of the stashed message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StashedToast {
    pub status: Severity,
    pub message: String,
}

/// Serialize a message for the slot.
fn encode_stash(message: &str, severity: Severity) -> Option<String> {
    serde_json::to_string(&StashedToast {
        status: severity,
        message: message.to_owned(),
    })
    .ok()
}

/// Parse a raw slot value. `None` for malformed data.
fn decode_stash(raw: &str) -> Option<StashedToast> {
    serde_json::from_str(raw).ok()
}

/// Outcome of consuming the slot's raw value.
#[derive(Clone, Debug, PartialEq)]
enum Drained {
    /// Valid message; surface it as a toast.
    Toast(StashedToast),
    /// Malformed value; log and drop it.
    Discarded(String),
    /// Nothing stashed.
    Empty,
}

/// Decide what a drained slot value means. Any `Some` raw value counts as
/// consumed; the slot must be deleted whether or not it parses.
fn drain_value(raw: Option<String>) -> Drained {
    let Some(raw) = raw else {
        return Drained::Empty;
    };
    match decode_stash(&raw) {
        Some(stashed) => Drained::Toast(stashed),
        None => Drained::Discarded(raw),
    }
}

/// Overwrite the durable slot with a message for the next page.
pub fn stash_for_next_page(message: &str, severity: Severity) {
    if let Some(raw) = encode_stash(message, severity) {
        storage::write(STASH_KEY, &raw);
    }
}

/// Drain the durable slot into the transient queue, if it holds anything.
///
/// The slot is read and deleted exactly once per navigation. Malformed data
/// is logged and discarded without surfacing a toast.
pub fn drain_stashed(toasts: RwSignal<ToastState>) {
    let raw = storage::read(STASH_KEY);
    if raw.is_some() {
        storage::remove(STASH_KEY);
    }
    match drain_value(raw) {
        Drained::Toast(stashed) => toast::notify(toasts, stashed.message, stashed.status),
        Drained::Discarded(raw) => log::warn!("discarding malformed redirect stash: {raw}"),
        Drained::Empty => {}
    }
}

/// Install a mount-time effect that drains the slot.
///
/// Pages call this before rendering content that might stash again for the
/// same navigation cycle; a stash written after the drain simply becomes the
/// next navigation's message.
pub fn install_drain(toasts: RwSignal<ToastState>) {
    Effect::new(move || drain_stashed(toasts));
}
