//! Tests for heterogeneous sets of `Value`.

use std::collections::BTreeMap;

use keyset::{NotAMappingError, OrderedSet, ReverseOrder, Set, Value};
use rstest::rstest;

fn sample_map() -> Value {
    Value::Map(BTreeMap::from([
        (Value::from(1_i64), Value::from("1")),
        (Value::from(2_i64), Value::from("2")),
        (Value::from(3_i64), Value::from("3")),
    ]))
}

#[rstest]
fn test_mixed_kinds_coexist() {
    let mut set: Set<Value> = Set::new();
    set.insert(Value::from(1_i64))
        .insert(Value::from(1_u64))
        .insert(Value::from("1"))
        .insert(Value::from(1_i64));

    assert_eq!(set.len(), 3);
    assert!(set.contains(&Value::UInt(1)));
}

#[rstest]
fn test_list_orders_by_kind_then_payload() {
    let set = Set::from([
        Value::from("b"),
        Value::from(-5_i64),
        Value::from("a"),
        Value::from(false),
        Value::from(10_i64),
    ]);
    assert_eq!(
        set.list(),
        vec![
            Value::Bool(false),
            Value::Int(-5),
            Value::Int(10),
            Value::from("a"),
            Value::from("b"),
        ]
    );
}

#[rstest]
fn test_from_mapping_keeps_keys() {
    let set = Set::<Value>::from_mapping(sample_map());
    assert_eq!(set.len(), 3);
    assert!(set.contains_all(&[Value::Int(1), Value::Int(2), Value::Int(3)]));
    assert!(!set.contains(&Value::from("1")));
}

#[rstest]
#[case(Value::from(true), "bool")]
#[case(Value::from(vec![1_u8]), "bytes")]
#[case(Value::List(vec![sample_map()]), "list")]
fn test_try_from_mapping_reports_kind(#[case] value: Value, #[case] kind: &'static str) {
    assert_eq!(
        Set::<Value>::try_from_mapping(value),
        Err(NotAMappingError { found: kind })
    );
}

#[rstest]
#[should_panic(expected = "found uint")]
fn test_from_mapping_is_fatal_for_non_map() {
    let _ = Set::<Value>::from_mapping(Value::from(9_u64));
}

#[rstest]
fn test_nested_values_are_elements() {
    let mut set: Set<Value> = Set::new();
    set.insert(sample_map()).insert(sample_map());
    set.insert(Value::List(vec![Value::from(1_i64)]));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_value_set_with_reverse_order() {
    let set: OrderedSet<Value, ReverseOrder> = [Value::from(1_i64), Value::from(true)]
        .into_iter()
        .collect();
    assert_eq!(set.list(), vec![Value::Int(1), Value::Bool(true)]);
}

#[rstest]
fn test_value_set_algebra() {
    let left = Set::from([Value::from(1_i64), Value::from("x")]);
    let right = Set::from([Value::from("x"), Value::from(false)]);

    let diff = left.diff(&right);
    assert_eq!(diff.added.list(), vec![Value::Bool(false)]);
    assert_eq!(diff.removed.list(), vec![Value::Int(1)]);
    assert_eq!(diff.remained.list(), vec![Value::from("x")]);
}
