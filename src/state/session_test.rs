use super::*;

const NOW: i64 = 1_750_000_000_000;

fn store_with(raw: &str) -> SessionStore<MemoryBackend> {
    SessionStore::new(MemoryBackend::with_raw(raw))
}

// =============================================================
// read
// =============================================================

#[test]
fn read_empty_slot_is_absent() {
    let store = SessionStore::new(MemoryBackend::default());
    assert_eq!(store.load(), StoredSession::Absent);
    assert!(store.read().is_none());
}

#[test]
fn read_well_formed_record() {
    let store = store_with(r#"{"token":"abc","exp":1750000000000}"#);
    assert_eq!(store.read(), Some(SessionRecord { token: "abc".to_owned(), exp: NOW }));
}

#[test]
fn read_malformed_values_behave_like_absent() {
    let cases = [
        "not json",
        "",
        "null",
        "42",
        r#""fake_jwt_token""#,
        r#"{"token":"abc"}"#,
        r#"{"exp":1750000000000}"#,
        r#"{"token":7,"exp":1750000000000}"#,
        r#"{"token":"abc","exp":"soon"}"#,
        r#"{"token":"abc","exp":1.5}"#,
        r#"{"token":"abc","exp":1750000000000,"v":2}"#,
    ];
    for raw in cases {
        let store = store_with(raw);
        assert_eq!(store.load(), StoredSession::Malformed, "raw: {raw}");
        assert!(store.read().is_none(), "raw: {raw}");
    }
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_at_writes_expiry_relative_to_now() {
    let store = SessionStore::new(MemoryBackend::default());
    store.save_at("tok", 60_000, NOW);
    assert_eq!(store.read(), Some(SessionRecord { token: "tok".to_owned(), exp: NOW + 60_000 }));
}

#[test]
fn save_persists_the_two_field_layout() {
    let store = SessionStore::new(MemoryBackend::default());
    store.save_at("tok", 1_000, NOW);
    let raw = store.backend().raw().expect("slot written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value, serde_json::json!({ "token": "tok", "exp": NOW + 1_000 }));
}

#[test]
fn save_overwrites_previous_record() {
    let store = SessionStore::new(MemoryBackend::default());
    store.save_at("first", 1_000, NOW);
    store.save_at("second", 2_000, NOW);
    assert_eq!(store.read().map(|r| r.token), Some("second".to_owned()));
}

#[test]
fn save_uses_wall_clock() {
    let store = SessionStore::new(MemoryBackend::default());
    let before = clock::now_millis();
    store.save("tok", 3_600_000);
    let after = clock::now_millis();
    let exp = store.read().expect("record").exp;
    assert!(exp >= before + 3_600_000 && exp <= after + 3_600_000);
}

#[test]
fn clear_is_idempotent() {
    let store = store_with(r#"{"token":"abc","exp":1}"#);
    store.clear();
    store.clear();
    assert_eq!(store.load(), StoredSession::Absent);
}

#[test]
fn clones_share_the_slot() {
    let store = SessionStore::new(MemoryBackend::default());
    let other = store.clone();
    store.save_at("tok", 1_000, NOW);
    assert!(other.read().is_some());
    other.clear();
    assert!(store.read().is_none());
}

// =============================================================
// expiry
// =============================================================

#[test]
fn record_expires_at_exact_boundary() {
    let record = SessionRecord { token: "t".to_owned(), exp: NOW };
    assert!(record.is_expired(NOW));
    assert!(record.is_expired(NOW + 1));
    assert!(!record.is_expired(NOW - 1));
}

#[test]
fn is_authenticated_requires_unexpired_record_and_never_clears() {
    let store = store_with(r#"{"token":"abc","exp":1750000000000}"#);
    assert!(store.is_authenticated_at(NOW - 1));
    assert!(!store.is_authenticated_at(NOW));
    assert!(store.read().is_some());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_the_browser() {
    let store = SessionStore::browser(&ConsoleConfig::default());
    store.save("tok", 1_000);
    assert!(store.read().is_none());
    assert!(!store.is_authenticated());
}
