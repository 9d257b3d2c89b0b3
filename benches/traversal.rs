//! Traversal engine micro-benchmarks
//!
//! Measures the three query modes over wide and deep trees.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use treewalk::{Kind, Value, find, has, none_filter, traverse, traverse_int};

/// A list of `count` user records, each with a few scalar fields.
fn wide_tree(count: usize) -> Value {
    let users: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("User {}", i),
                "active": i % 2 == 0,
                "balance": i as f64 * 1.5,
                "tags": ["a", "b", "c"]
            })
        })
        .collect();
    Value::from(json!({ "users": users }))
}

/// A chain of single-key mappings `depth` levels deep ending in a leaf.
fn deep_tree(depth: usize) -> Value {
    (0..depth).fold(Value::from("leaf"), |inner, level| {
        Value::Map(vec![(format!("level{}", level), inner)])
    })
}

fn benchmark_wide_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tree");

    for user_count in [10, 100, 1000] {
        let tree = wide_tree(user_count);

        group.bench_with_input(BenchmarkId::new("has_miss", user_count), &tree, |b, tree| {
            b.iter(|| has(black_box(tree), |n| n.key == "missing"))
        });

        group.bench_with_input(BenchmarkId::new("find_last", user_count), &tree, |b, tree| {
            let target = format!("users[{}].name", user_count - 1);
            b.iter(|| find(black_box(tree), |n| n.full_key == target))
        });

        group.bench_with_input(BenchmarkId::new("traverse_names", user_count), &tree, |b, tree| {
            b.iter(|| traverse(black_box(tree), |n| n.key == "name" && n.kind() == Kind::Str))
        });

        group.bench_with_input(BenchmarkId::new("traverse_int", user_count), &tree, |b, tree| {
            b.iter(|| traverse_int(black_box(tree), none_filter))
        });
    }

    group.finish();
}

fn benchmark_deep_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_tree");

    for depth in [10, 100, 500] {
        let tree = deep_tree(depth);

        group.bench_with_input(BenchmarkId::new("find_leaf", depth), &tree, |b, tree| {
            b.iter(|| find(black_box(tree), |n| n.kind() == Kind::Str))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_wide_tree, benchmark_deep_tree);
criterion_main!(benches);
