use treewalk_value::{Kind, Value};

/// The context handed to every predicate invocation.
///
/// Nodes are built on descent and dropped on return; they borrow the tree
/// and never outlive the query that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    /// Path from the root to this node (e.g. `users[1].name`).
    pub full_key: String,
    /// Immediate segment: a mapping key, a record field name, or `[i]` for a
    /// sequence index. Empty for the root.
    pub key: String,
    /// The datum at this position.
    pub value: &'a Value,
}

impl<'a> Node<'a> {
    pub(crate) fn new(full_key: String, key: String, value: &'a Value) -> Self {
        Node {
            full_key,
            key,
            value,
        }
    }

    pub(crate) fn root(tree: &'a Value) -> Self {
        Self::new(String::new(), String::new(), tree)
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// The underlying value with the tree's lifetime, for returning out of a query.
    pub fn interface(&self) -> &'a Value {
        self.value
    }

    pub fn is_root(&self) -> bool {
        self.full_key.is_empty() && self.key.is_empty()
    }
}
