//! Wire interchange tests for the `Source` model.
//!
//! Exercises the serialized shape end to end: discriminant always present,
//! absent optionals omitted, camelCase field names, round-trip fidelity, and
//! rejection of maps that claim readiness without their required fields.

use context_source::{PendingSource, ReadySource, Source};
use serde_json::json;

#[test]
fn pending_serializes_to_id_and_ready_only() {
    let source = Source::pending("src-1").unwrap();
    let value = serde_json::to_value(&source).unwrap();
    assert_eq!(value, json!({ "id": "src-1", "ready": false }));

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2, "absent optionals must be omitted, not null");
}

#[test]
fn ready_serializes_with_camel_case_fields() {
    let ready = ReadySource::new("src-1", "web", 42, "Hello world")
        .unwrap()
        .with_title("Example");
    let value = serde_json::to_value(Source::from(ready)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "src-1",
            "ready": true,
            "type": "web",
            "tokenCount": 42,
            "text": "Hello world",
            "title": "Example"
        })
    );
}

#[test]
fn ready_roundtrip_preserves_all_fields() {
    let ready = ReadySource::new("src-9", "file", 128, "full body")
        .unwrap()
        .with_title("Notes")
        .with_file_name("notes.md")
        .with_summary("a summary");
    let source = Source::from(ready);

    let encoded = serde_json::to_string(&source).unwrap();
    let decoded: Source = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, source);
    assert!(decoded.is_ready());
}

#[test]
fn pending_roundtrip_preserves_partial_fields() {
    let pending = PendingSource::new("src-2")
        .unwrap()
        .with_title("Example")
        .with_file_name("draft.txt");
    let source = Source::from(pending);

    let encoded = serde_json::to_string(&source).unwrap();
    let decoded: Source = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, source);
    assert!(!decoded.is_ready());
    // Partial metadata survives, but content stays unknown.
    assert_eq!(decoded.title(), Some("Example"));
    assert_eq!(decoded.text(), None);
}

#[test]
fn ready_without_text_is_rejected() {
    let err = serde_json::from_value::<Source>(json!({
        "id": "src-1",
        "ready": true,
        "type": "web",
        "tokenCount": 42
    }))
    .unwrap_err();
    assert!(err.to_string().contains("text"), "error was: {}", err);
}

#[test]
fn ready_without_type_is_rejected() {
    let err = serde_json::from_value::<Source>(json!({
        "id": "src-1",
        "ready": true,
        "tokenCount": 42,
        "text": "Hello world"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("type"), "error was: {}", err);
}

#[test]
fn ready_without_token_count_is_rejected() {
    let err = serde_json::from_value::<Source>(json!({
        "id": "src-1",
        "ready": true,
        "type": "web",
        "text": "Hello world"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("tokenCount"), "error was: {}", err);
}

#[test]
fn negative_token_count_is_rejected() {
    let err = serde_json::from_value::<Source>(json!({
        "id": "src-1",
        "ready": true,
        "type": "web",
        "tokenCount": -1,
        "text": "Hello world"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("-1"), "error was: {}", err);
}

#[test]
fn empty_id_is_rejected() {
    let err =
        serde_json::from_value::<Source>(json!({ "id": "", "ready": false })).unwrap_err();
    assert!(err.to_string().contains("non-empty"), "error was: {}", err);
}

#[test]
fn pending_with_partial_text_still_pending_on_decode() {
    // A producer flushed in-flight text but had not finished: ready stays
    // false, so the checked accessors keep treating content as unknown.
    let decoded: Source = serde_json::from_value(json!({
        "id": "src-3",
        "ready": false,
        "text": "half-fetched"
    }))
    .unwrap();
    assert!(!decoded.is_ready());
    assert_eq!(decoded.text(), None);
    assert_eq!(decoded.as_pending().unwrap().text(), Some("half-fetched"));
}

#[test]
fn zero_token_count_roundtrips() {
    let source = Source::ready("src-4", "web", 0, "untokenizable text").unwrap();
    let encoded = serde_json::to_string(&source).unwrap();
    let decoded: Source = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.token_count(), Some(0));
}
