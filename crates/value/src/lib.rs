//! The value model walked by the treewalk query engine.
//!
//! A [`Value`] is a fully materialized, dynamically-shaped tree: mappings,
//! sequences, records and scalars. It can be built by hand, converted from a
//! `serde_json::Value`, deserialized from any self-describing serde format, or
//! produced from any `T: Serialize` through [`to_value`].

pub mod convert;
pub mod de;
pub mod error;
pub mod kind;
pub mod ser;
pub mod value;

// --- Public API ---
pub use error::ValueError;
pub use kind::{FloatWidth, IntWidth, Kind};
pub use ser::{ValueSerializer, to_value};
pub use value::{Field, Record, Segment, Value, Visibility};
