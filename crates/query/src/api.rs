//! The public query surface: existence, first-match and collect, each in an
//! untyped flavor and five typed flavors.
//!
//! A tree that is `Value::Null` is a nil tree. Existence queries answer
//! `false` for it; first-match and collect queries report
//! [`QueryError::NilTree`]. A walk without matches is
//! [`QueryError::NotFound`] for first-match and typed collect queries, and an
//! empty `Vec` for the untyped [`traverse`].
use crate::engine::{Reduction, Walker};
use crate::error::QueryError;
use crate::filter;
use crate::node::Node;
use crate::scalar::Scalar;
use std::ops::ControlFlow;
use treewalk_value::Value;

fn check_tree(tree: &Value) -> Result<(), QueryError> {
    if tree.is_null() {
        Err(QueryError::NilTree)
    } else {
        Ok(())
    }
}

// --- Existence ---

/// Returns `true` if any node in the tree satisfies `filter`. Stops at the
/// first match.
pub fn has<P>(tree: &Value, mut filter: P) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    if tree.is_null() {
        return false;
    }
    log::debug!("has: walking {} tree", tree.kind());
    Walker::new(&mut filter, Reduction::Stop)
        .run(tree)
        .is_break()
}

/// Existence restricted to scalars of `T`'s kind.
pub fn has_as<'a, T, P>(tree: &'a Value, filter: P) -> bool
where
    T: Scalar<'a>,
    P: FnMut(&Node<'_>) -> bool,
{
    has(tree, filter::kind_set(T::accepts, filter))
}

pub fn has_string<P>(tree: &Value, filter: P) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    has(tree, filter::string(filter))
}

pub fn has_bool<P>(tree: &Value, filter: P) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    has(tree, filter::bool(filter))
}

pub fn has_int<P>(tree: &Value, filter: P) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    has(tree, filter::int(filter))
}

pub fn has_uint<P>(tree: &Value, filter: P) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    has(tree, filter::uint(filter))
}

pub fn has_float<P>(tree: &Value, filter: P) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    has(tree, filter::float(filter))
}

// --- First match ---

/// Returns the first node (depth-first, pre-order) that satisfies `filter`,
/// with its path.
pub fn find_node<'a, P>(tree: &'a Value, mut filter: P) -> Result<Node<'a>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    check_tree(tree)?;
    log::debug!("find: walking {} tree", tree.kind());
    match Walker::new(&mut filter, Reduction::Stop).run(tree) {
        ControlFlow::Break(node) => Ok(node),
        ControlFlow::Continue(()) => Err(QueryError::NotFound),
    }
}

/// Returns the first value that satisfies `filter`.
pub fn find<'a, P>(tree: &'a Value, filter: P) -> Result<&'a Value, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    find_node(tree, filter).map(|node| node.interface())
}

/// Returns the first scalar of `T`'s kind that satisfies `filter`, widened to `T`.
pub fn find_as<'a, T, P>(tree: &'a Value, filter: P) -> Result<T, QueryError>
where
    T: Scalar<'a>,
    P: FnMut(&Node<'_>) -> bool,
{
    let node = find_node(tree, filter::kind_set(T::accepts, filter))?;
    T::project(node.interface()).ok_or(QueryError::NotFound)
}

pub fn find_string<'a, P>(tree: &'a Value, filter: P) -> Result<&'a str, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    find_as(tree, filter)
}

pub fn find_bool<P>(tree: &Value, filter: P) -> Result<bool, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    find_as(tree, filter)
}

pub fn find_int<P>(tree: &Value, filter: P) -> Result<i64, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    find_as(tree, filter)
}

pub fn find_uint<P>(tree: &Value, filter: P) -> Result<u64, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    find_as(tree, filter)
}

pub fn find_float<P>(tree: &Value, filter: P) -> Result<f64, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    find_as(tree, filter)
}

// --- Collect ---

/// Returns every node that satisfies `filter`, in visit order.
///
/// A matching mapping, sequence or record is returned whole and its
/// descendants are not visited.
pub fn traverse_nodes<'a, P>(tree: &'a Value, mut filter: P) -> Result<Vec<Node<'a>>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    check_tree(tree)?;
    log::debug!("traverse: walking {} tree", tree.kind());
    let mut walker = Walker::new(&mut filter, Reduction::Collect);
    let _ = walker.run(tree);
    let nodes = walker.into_matches();
    log::debug!("traverse: collected {} nodes", nodes.len());
    Ok(nodes)
}

/// Returns every value that satisfies `filter`. An empty result is `Ok`.
pub fn traverse<'a, P>(tree: &'a Value, filter: P) -> Result<Vec<&'a Value>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    let nodes = traverse_nodes(tree, filter)?;
    Ok(nodes.iter().map(Node::interface).collect())
}

/// Returns every scalar of `T`'s kind that satisfies `filter`. An empty
/// result is [`QueryError::NotFound`].
pub fn traverse_as<'a, T, P>(tree: &'a Value, filter: P) -> Result<Vec<T>, QueryError>
where
    T: Scalar<'a>,
    P: FnMut(&Node<'_>) -> bool,
{
    let nodes = traverse_nodes(tree, filter::kind_set(T::accepts, filter))?;
    if nodes.is_empty() {
        return Err(QueryError::NotFound);
    }
    Ok(nodes
        .iter()
        .filter_map(|node| T::project(node.interface()))
        .collect())
}

pub fn traverse_string<'a, P>(tree: &'a Value, filter: P) -> Result<Vec<&'a str>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    traverse_as(tree, filter)
}

pub fn traverse_bool<P>(tree: &Value, filter: P) -> Result<Vec<bool>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    traverse_as(tree, filter)
}

pub fn traverse_int<P>(tree: &Value, filter: P) -> Result<Vec<i64>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    traverse_as(tree, filter)
}

pub fn traverse_uint<P>(tree: &Value, filter: P) -> Result<Vec<u64>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    traverse_as(tree, filter)
}

pub fn traverse_float<P>(tree: &Value, filter: P) -> Result<Vec<f64>, QueryError>
where
    P: FnMut(&Node<'_>) -> bool,
{
    traverse_as(tree, filter)
}

/// The untyped queries as methods on [`Value`].
pub trait TreeQuery {
    fn has<P>(&self, filter: P) -> bool
    where
        P: FnMut(&Node<'_>) -> bool;

    fn find<P>(&self, filter: P) -> Result<&Value, QueryError>
    where
        P: FnMut(&Node<'_>) -> bool;

    fn traverse<P>(&self, filter: P) -> Result<Vec<&Value>, QueryError>
    where
        P: FnMut(&Node<'_>) -> bool;
}

impl TreeQuery for Value {
    fn has<P>(&self, filter: P) -> bool
    where
        P: FnMut(&Node<'_>) -> bool,
    {
        has(self, filter)
    }

    fn find<P>(&self, filter: P) -> Result<&Value, QueryError>
    where
        P: FnMut(&Node<'_>) -> bool,
    {
        find(self, filter)
    }

    fn traverse<P>(&self, filter: P) -> Result<Vec<&Value>, QueryError>
    where
        P: FnMut(&Node<'_>) -> bool,
    {
        traverse(self, filter)
    }
}
