use super::*;

// =============================================================
// Queue invariants
// =============================================================

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.push("one".to_owned(), Severity::Success);
    let second = state.push("two".to_owned(), Severity::Success);
    assert!(second > first);
}

#[test]
fn queue_caps_at_five_dropping_oldest_first() {
    let mut state = ToastState::default();
    for n in 0..6 {
        state.push(format!("toast {n}"), Severity::Success);
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert!(state.toasts.iter().all(|t| t.text != "toast 0"));
    assert_eq!(state.toasts[0].text, "toast 1");
    assert_eq!(state.toasts[4].text, "toast 5");
}

#[test]
fn remove_deletes_only_the_matching_id() {
    let mut state = ToastState::default();
    let keep = state.push("keep".to_owned(), Severity::Warning);
    let drop = state.push("drop".to_owned(), Severity::Error);
    state.remove(drop);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn remove_is_noop_for_an_already_removed_id() {
    let mut state = ToastState::default();
    let id = state.push("gone".to_owned(), Severity::Success);
    state.remove(id);
    // A late expiry timer firing after manual dismissal hits this path.
    state.remove(id);
    assert!(state.toasts.is_empty());
}

// =============================================================
// Display constants
// =============================================================

#[test]
fn toasts_expire_after_three_seconds() {
    // The expiry timer in `notify` only runs in the browser; this pins the
    // duration it sleeps for, and `remove_is_noop_for_an_already_removed_id`
    // covers the id-keyed removal it performs when it fires.
    assert_eq!(TOAST_TTL_MS, 3000);
}

#[test]
fn severity_css_classes_match_wire_names() {
    assert_eq!(Severity::Success.css_class(), "success");
    assert_eq!(Severity::Warning.css_class(), "warning");
    assert_eq!(Severity::Error.css_class(), "error");
}
