#![cfg(feature = "serde")]

//! Integration tests for serde support in keyset.
//!
//! Sets serialize as sequences in unspecified order and deserialize from any
//! sequence, collapsing duplicates.

use std::collections::BTreeMap;

use keyset::{Set, Value};
use rstest::rstest;

// =============================================================================
// Set Integration Tests
// =============================================================================

#[rstest]
fn test_set_json_roundtrip() {
    let set: Set<i32> = (1..=10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_set_serializes_as_sequence() {
    let set = Set::from([7_u8]);
    assert_eq!(serde_json::to_string(&set).unwrap(), "[7]");

    let empty: Set<u8> = Set::new();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
}

#[rstest]
fn test_set_deserialize_collapses_duplicates() {
    let restored: Set<String> = serde_json::from_str(r#"["a", "b", "a", "a"]"#).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.list(), vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn test_set_deserialize_rejects_non_sequence() {
    let result: Result<Set<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_nested_sets_inside_vec() {
    let nested = vec![Set::from([1, 2]), Set::from([3])];
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Vec<Set<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

// =============================================================================
// Value Integration Tests
// =============================================================================

#[rstest]
fn test_value_set_json_roundtrip() {
    let set = Set::from([
        Value::from(-3_i64),
        Value::from(3_u64),
        Value::from("three"),
        Value::List(vec![Value::from(true), Value::from(vec![0_u8, 255])]),
    ]);
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_value_is_externally_tagged() {
    let json = serde_json::to_string(&Value::from("x")).unwrap();
    assert_eq!(json, r#"{"Str":"x"}"#);
}

#[rstest]
fn test_value_map_serializes_as_pairs() {
    let map = Value::Map(BTreeMap::from([(Value::from(1_i64), Value::from("one"))]));
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"Map":[[{"Int":1},{"Str":"one"}]]}"#);
}

#[rstest]
fn test_value_set_with_maps_json_roundtrip() {
    let set = Set::from([
        Value::Map(BTreeMap::from([
            (Value::from(1_i64), Value::from("one")),
            (Value::List(vec![Value::from(false)]), Value::from(vec![7_u8])),
        ])),
        Value::Map(BTreeMap::new()),
        Value::from("plain"),
    ]);
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
    assert_eq!(
        Set::<Value>::from_mapping(restored.list()[2].clone()).len(),
        2
    );
}
