//! The recursive walker behind every query.
//!
//! The walk is depth-first and pre-order: each child is offered to the
//! predicate before its own children are visited. What happens after a match
//! depends on the [`Reduction`]:
//!
//! - [`Reduction::Stop`] breaks out of the whole walk with the matching node
//!   (existence and first-match queries). Non-matching composites are
//!   descended into.
//! - [`Reduction::Collect`] records the matching node and does not descend
//!   into it, so a matched composite hides its descendants. Non-matching
//!   composites are descended into.
//!
//! The root is never offered to the predicate unless it is a scalar, in which
//! case it is the only node of the tree and is evaluated with an empty path.
use crate::node::Node;
use std::ops::ControlFlow;
use treewalk_value::{Segment, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reduction {
    /// Stop at the first match.
    Stop,
    /// Record every match, pruning matched composites.
    Collect,
}

/// Walk state shared across the recursion.
pub(crate) struct Walker<'a, 'p, P> {
    filter: &'p mut P,
    reduction: Reduction,
    matches: Vec<Node<'a>>,
}

impl<'a, 'p, P> Walker<'a, 'p, P>
where
    P: FnMut(&Node<'_>) -> bool,
{
    pub(crate) fn new(filter: &'p mut P, reduction: Reduction) -> Self {
        Walker {
            filter,
            reduction,
            matches: Vec::new(),
        }
    }

    /// Walks `tree`. Breaks with the first match under [`Reduction::Stop`].
    pub(crate) fn run(&mut self, tree: &'a Value) -> ControlFlow<Node<'a>> {
        let root = Node::root(tree);
        if tree.kind().is_composite() {
            self.descend(&root)
        } else {
            self.visit(root)
        }
    }

    /// The nodes recorded under [`Reduction::Collect`], in visit order.
    pub(crate) fn into_matches(self) -> Vec<Node<'a>> {
        self.matches
    }

    fn visit(&mut self, node: Node<'a>) -> ControlFlow<Node<'a>> {
        log::trace!("visit '{}' ({})", node.full_key, node.kind());
        let matched = (self.filter)(&node);
        match (self.reduction, matched) {
            (Reduction::Stop, true) => ControlFlow::Break(node),
            (Reduction::Collect, true) => {
                self.matches.push(node);
                ControlFlow::Continue(())
            }
            (_, false) => self.descend(&node),
        }
    }

    fn descend(&mut self, node: &Node<'a>) -> ControlFlow<Node<'a>> {
        for (segment, value) in node.value.children() {
            let (full_key, key) = child_path(&node.full_key, segment);
            self.visit(Node::new(full_key, key, value))?;
        }
        ControlFlow::Continue(())
    }
}

/// Renders a child's `(full_key, key)` from its parent's full key.
///
/// Keys join with `.` unless the parent is the root; indices append `[i]`
/// with no separator.
pub(crate) fn child_path(parent_full: &str, segment: Segment<'_>) -> (String, String) {
    match segment {
        Segment::Key(name) => {
            let full_key = if parent_full.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", parent_full, name)
            };
            (full_key, name.to_string())
        }
        Segment::Index(i) => {
            let key = format!("[{}]", i);
            (format!("{}{}", parent_full, key), key)
        }
    }
}
