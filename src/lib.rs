//! # treewalk
//!
//! Query heterogeneous, dynamically-shaped nested data by running predicates
//! over every reachable node.
//!
//! ```
//! use serde_json::json;
//! use treewalk::{Value, find_string, traverse};
//!
//! let data = Value::from(json!({
//!     "users": [{ "name": "Alice" }, { "name": "Bob" }]
//! }));
//!
//! assert_eq!(find_string(&data, |n| n.full_key == "users[1].name"), Ok("Bob"));
//!
//! let names = traverse(&data, |n| n.key == "name").unwrap();
//! assert_eq!(names.len(), 2);
//! ```
//!
//! Arbitrary Rust data can be queried through [`to_value`], which exposes
//! structs as records:
//!
//! ```
//! use serde::Serialize;
//! use treewalk::{find_uint, to_value};
//!
//! #[derive(Serialize)]
//! struct Server { host: String, port: u16 }
//!
//! let tree = to_value(&Server { host: "localhost".into(), port: 8080 }).unwrap();
//! assert_eq!(find_uint(&tree, |n| n.key == "port"), Ok(8080));
//! ```

pub use treewalk_query::{
    Node, QueryError, Scalar, TreeQuery, filter, find, find_as, find_bool, find_float, find_int,
    find_node, find_string, find_uint, has, has_as, has_bool, has_float, has_int, has_string,
    has_uint, none_filter, traverse, traverse_as, traverse_bool, traverse_float, traverse_int,
    traverse_nodes, traverse_string, traverse_uint,
};
pub use treewalk_value::{
    Field, FloatWidth, IntWidth, Kind, Record, Segment, Value, ValueError, Visibility, to_value,
};

/// Parses a JSON document into a walkable [`Value`].
pub fn from_json_str(json: &str) -> Result<Value, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    log::debug!("parsed {} document", value.kind());
    Ok(value)
}
