#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initialise logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Multiset comparison: same items with the same multiplicities, in any order.
///
/// Results that cross a mapping boundary have no guaranteed order, so
/// comparisons against them go through this helper.
pub fn same_items<T, U>(actual: &[T], expected: &[U]) -> bool
where
    T: Hash + Eq + Debug,
    U: Into<T> + Clone,
{
    if actual.len() != expected.len() {
        return false;
    }
    let mut counts: HashMap<&T, isize> = HashMap::new();
    for item in actual {
        *counts.entry(item).or_default() += 1;
    }
    let expected: Vec<T> = expected.iter().cloned().map(Into::into).collect();
    for item in &expected {
        match counts.get_mut(item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

/// Asserts two collections hold the same items regardless of order.
#[macro_export]
macro_rules! assert_same_items {
    ($actual:expr, $expected:expr) => {
        let actual = &$actual;
        let expected = &$expected;
        assert!(
            $crate::common::same_items(&actual[..], &expected[..]),
            "Expected the same items in any order.\n  actual: {:?}\nexpected: {:?}",
            actual,
            expected
        );
    };
}

/// Floats are compared by their bit patterns so they can go through the
/// hash-based multiset helper.
pub fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|f| f.to_bits()).collect()
}

/// Renders untyped results as compact JSON so they can be compared as a multiset.
pub fn render(values: &[&treewalk::Value]) -> Vec<String> {
    values.iter().map(|v| v.to_json().to_string()).collect()
}

/// Follows a rendered path (`users[1].name`) from the root. Test-only: the
/// library emits paths but never reads them back.
pub fn resolve<'a>(tree: &'a treewalk::Value, path: &str) -> Option<&'a treewalk::Value> {
    let mut current = tree;
    let mut rest = path;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('[') {
            let close = after.find(']')?;
            let index: usize = after[..close].parse().ok()?;
            current = current.as_seq()?.get(index)?;
            rest = &after[close + 1..];
        } else {
            let rest_key = rest.strip_prefix('.').unwrap_or(rest);
            let end = rest_key.find(['.', '[']).unwrap_or(rest_key.len());
            current = current.get(&rest_key[..end])?;
            rest = &rest_key[end..];
        }
    }
    Some(current)
}
