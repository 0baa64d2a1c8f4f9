use super::*;

// =============================================================
// Codec round-trip
// =============================================================

#[test]
fn stash_round_trips_text_and_severity() {
    let raw = encode_stash("X", Severity::Success).expect("encode");
    let stashed = decode_stash(&raw).expect("decode");
    assert_eq!(stashed.message, "X");
    assert_eq!(stashed.status, Severity::Success);
}

#[test]
fn stash_wire_shape_uses_status_and_message_keys() {
    let stashed = decode_stash(r#"{"status":"warning","message":"saved"}"#).expect("decode");
    assert_eq!(stashed.status, Severity::Warning);
    assert_eq!(stashed.message, "saved");
}

// =============================================================
// Drain semantics
// =============================================================

#[test]
fn drain_of_a_stashed_message_yields_exactly_that_toast() {
    let slot = encode_stash("X", Severity::Success);
    let drained = drain_value(slot);
    assert_eq!(
        drained,
        Drained::Toast(StashedToast {
            status: Severity::Success,
            message: "X".to_owned(),
        })
    );
}

#[test]
fn drain_of_a_corrupt_slot_discards_without_a_toast() {
    let drained = drain_value(Some("{not json".to_owned()));
    assert_eq!(drained, Drained::Discarded("{not json".to_owned()));
}

#[test]
fn drain_of_an_empty_slot_is_a_noop() {
    assert_eq!(drain_value(None), Drained::Empty);
}

// =============================================================
// Slot semantics
// =============================================================

#[test]
fn second_stash_overwrites_the_first() {
    let mut slot = encode_stash("first", Severity::Success);
    assert!(slot.is_some());
    slot = encode_stash("second", Severity::Error);
    assert_eq!(
        drain_value(slot),
        Drained::Toast(StashedToast {
            status: Severity::Error,
            message: "second".to_owned(),
        })
    );
}

#[test]
fn corrupt_slot_value_is_discarded() {
    assert!(decode_stash("not json at all").is_none());
    assert!(decode_stash(r#"{"status":"shrug","message":"x"}"#).is_none());
    assert!(decode_stash(r#"{"message":"missing status"}"#).is_none());
}
