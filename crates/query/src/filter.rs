//! Kind filter combinators.
//!
//! Each combinator gates a predicate on a kind-set: the wrapped predicate is
//! only invoked for nodes whose kind belongs to the set.
use crate::node::Node;
use treewalk_value::Kind;

/// Matches every node. Layered under a typed query it selects every scalar of
/// that query's kind.
pub fn none_filter(_node: &Node<'_>) -> bool {
    true
}

/// Gates `filter` on an arbitrary kind-set.
pub fn kind_set<P>(accepts: fn(Kind) -> bool, mut filter: P) -> impl FnMut(&Node<'_>) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    move |node: &Node<'_>| accepts(node.kind()) && filter(node)
}

pub(crate) fn is_string(kind: Kind) -> bool {
    kind == Kind::Str
}

pub(crate) fn is_bool(kind: Kind) -> bool {
    kind == Kind::Bool
}

pub fn string<P>(filter: P) -> impl FnMut(&Node<'_>) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    kind_set(is_string, filter)
}

pub fn bool<P>(filter: P) -> impl FnMut(&Node<'_>) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    kind_set(is_bool, filter)
}

/// Signed integers of any width.
pub fn int<P>(filter: P) -> impl FnMut(&Node<'_>) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    kind_set(Kind::is_int, filter)
}

/// Unsigned integers of any width.
pub fn uint<P>(filter: P) -> impl FnMut(&Node<'_>) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    kind_set(Kind::is_uint, filter)
}

/// Floats of either width.
pub fn float<P>(filter: P) -> impl FnMut(&Node<'_>) -> bool
where
    P: FnMut(&Node<'_>) -> bool,
{
    kind_set(Kind::is_float, filter)
}
