mod common;

use common::fixtures::*;
use common::{bits, init_logging, render};
use serde_json::json;
use treewalk::{
    Kind, Node, QueryError, Value, none_filter, traverse, traverse_bool, traverse_float,
    traverse_int, traverse_nodes, traverse_string, traverse_uint,
};

#[test]
fn test_traverse_all_strings() {
    init_logging();
    let tree = mixed_tree();
    let found = traverse(&tree, |n| n.kind() == Kind::Str).unwrap();
    assert_same_items!(
        render(&found),
        [
            "\"hello world\"",
            "\"nested value\"",
            "\"array_string\"",
            "\"found me\"",
            "\"Alice\"",
            "\"Bob\"",
        ]
        .map(String::from)
    );
}

#[test]
fn test_traverse_by_key() {
    init_logging();
    let tree = mixed_tree();
    let names = traverse(&tree, |n| n.key == "name").unwrap();
    assert_eq!(names, vec![&Value::from("Alice"), &Value::from("Bob")]);
}

#[test]
fn test_traverse_with_value_condition() {
    init_logging();
    let tree = mixed_tree();
    let rich = traverse(&tree, |n| {
        n.key == "balance" && n.value.as_f64().is_some_and(|b| b > 1000.0)
    })
    .unwrap();
    assert_eq!(rich, vec![&Value::from(1250.50)]);
}

#[test]
fn test_traverse_empty_result_is_not_an_error() {
    init_logging();
    assert_eq!(traverse(&mixed_tree(), |n| n.key == "missing"), Ok(vec![]));
    assert_eq!(traverse(&Value::Null, none_filter), Err(QueryError::NilTree));
}

#[test]
fn test_traverse_collects_whole_composites() {
    init_logging();
    let tree = mixed_tree();
    let users = traverse(&tree, |n| n.key == "users").unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].kind(), Kind::Seq);
    assert_eq!(users[0].as_seq().map(<[Value]>::len), Some(2));
}

#[test]
fn test_traverse_string() {
    init_logging();
    let tree = mixed_tree();
    let strings = traverse_string(&tree, none_filter).unwrap();
    assert_same_items!(
        strings,
        ["hello world", "nested value", "array_string", "found me", "Alice", "Bob"]
    );

    let a_names = traverse_string(&tree, |n| n.key == "name").unwrap();
    assert_eq!(a_names, vec!["Alice", "Bob"]);

    assert_eq!(traverse_string(&tree, |n| n.key == "int_val"), Err(QueryError::NotFound));
    assert_eq!(traverse_string(&Value::Null, none_filter), Err(QueryError::NilTree));
}

#[test]
fn test_traverse_int() {
    init_logging();
    let tree = mixed_tree();
    let ints = traverse_int(&tree, none_filter).unwrap();
    assert_same_items!(ints, [42i64, 32, 64, 100, 123, 999, 30, 25]);

    let ages = traverse_int(&tree, |n| n.key == "age").unwrap();
    assert_eq!(ages, vec![30, 25]);

    assert_eq!(traverse_int(&tree, |n| n.key == "nope"), Err(QueryError::NotFound));
}

#[test]
fn test_traverse_uint() {
    init_logging();
    let tree = mixed_tree();
    let uints = traverse_uint(&tree, none_filter).unwrap();
    assert_same_items!(uints, [10u64, 64, 200, 88, 888, 1001, 1002]);
    assert_eq!(traverse_uint(&Value::Null, none_filter), Err(QueryError::NilTree));
}

#[test]
fn test_traverse_float() {
    init_logging();
    let tree = mixed_tree();
    let floats = traverse_float(&tree, none_filter).unwrap();
    assert_same_items!(
        bits(&floats),
        bits(&[3.14f32 as f64, 6.28, 99.99, 45.67, 123.456, 1250.50, 750.25])
    );
}

#[test]
fn test_traverse_bool() {
    init_logging();
    let tree = mixed_tree();
    let bools = traverse_bool(&tree, none_filter).unwrap();
    assert_same_items!(bools, [true, false, false, true, true, false]);

    let active = traverse_bool(&tree, |n| n.key == "active").unwrap();
    assert_eq!(active, vec![true, false]);
}

#[test]
fn test_traverse_nodes_report_paths() {
    init_logging();
    let tree = Value::from(json!({ "matrix": [[1, 2], [3]] }));
    let nodes = traverse_nodes(&tree, |n| n.kind().is_int()).unwrap();
    let paths: Vec<_> = nodes.iter().map(|n| n.full_key.as_str()).collect();
    assert_eq!(paths, vec!["matrix[0][0]", "matrix[0][1]", "matrix[1][0]"]);
    assert!(nodes.iter().all(|n: &Node<'_>| n.key.starts_with('[')));
}

#[test]
fn test_traverse_descends_into_unmatched_composites_only() {
    init_logging();
    let tree = Value::from(json!({
        "groups": [
            { "tag": "keep", "items": [{ "tag": "inner" }] },
            { "items": [{ "tag": "deep" }] }
        ]
    }));
    let mut seen = Vec::new();
    let found = traverse(&tree, |n| {
        seen.push(n.full_key.clone());
        n.kind() == Kind::Map && n.value.get("tag").is_some()
    })
    .unwrap();

    assert_eq!(found.len(), 2);
    assert!(!seen.iter().any(|p| p.starts_with("groups[0].")));
    assert!(seen.contains(&"groups[1].items".to_string()));
    assert!(seen.contains(&"groups[1].items[0]".to_string()));
}
