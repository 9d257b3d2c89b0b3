//! Predicate-driven queries over dynamically-shaped value trees.
//!
//! Every query walks a [`Value`] depth-first and hands each reachable position
//! to a caller-supplied predicate as a [`Node`] carrying its path, its
//! immediate key and the value itself. Three reductions are built on that
//! walk: existence ([`has`]), first match ([`find`]) and collect
//! ([`traverse`]), each with typed flavors that only consider one scalar kind.

pub mod api;
mod engine;
pub mod error;
pub mod filter;
pub mod node;
pub mod scalar;

// --- Public API ---
pub use api::{
    TreeQuery, find, find_as, find_bool, find_float, find_int, find_node, find_string, find_uint,
    has, has_as, has_bool, has_float, has_int, has_string, has_uint, traverse, traverse_as,
    traverse_bool, traverse_float, traverse_int, traverse_nodes, traverse_string, traverse_uint,
};
pub use error::QueryError;
pub use filter::none_filter;
pub use node::Node;
pub use scalar::Scalar;
pub use treewalk_value::{Kind, Value};
