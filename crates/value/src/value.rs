//! The walkable tree model.
//!
//! `Value` is a closed tagged union: every shape the query engine can meet is
//! one of its variants, so dispatch is a plain `match` on the tag. Scalars
//! remember the width they were produced with; composites own their children.
use crate::kind::{FloatWidth, IntWidth, Kind};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

/// A dynamically-shaped, fully materialized tree node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64, IntWidth),
    UInt(u64, IntWidth),
    Float(f64, FloatWidth),
    Str(String),
    Seq(Vec<Value>),
    /// Mapping entries in iteration order. Keys are already stringified.
    Map(Vec<(String, Value)>),
    Record(Record),
}

/// A named, record-like value with fields in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Whether a record field is part of the record's public interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
    pub visibility: Visibility,
}

impl Field {
    pub fn public(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            visibility: Visibility::Public,
        }
    }

    /// A field that is never enumerated by [`Value::children`].
    pub fn private(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            visibility: Visibility::Private,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

impl Record {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Public fields in declaration order.
    pub fn public_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_public())
    }
}

/// How a child is addressed from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A mapping key or a record field name.
    Key(&'a str),
    /// A sequence index.
    Index(usize),
}

impl Value {
    /// Builds a [`Value::Record`].
    pub fn record(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Value::Record(Record::new(name, fields))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_, w) => Kind::Int(*w),
            Value::UInt(_, w) => Kind::UInt(*w),
            Value::Float(_, w) => Kind::Float(*w),
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// An iterator over the direct children of this value.
    ///
    /// - Mappings yield their entries in stored order.
    /// - Sequences yield their elements by index.
    /// - Records yield their public fields in declaration order.
    ///
    /// The iterator is empty for scalars and null.
    pub fn children(&self) -> Box<dyn Iterator<Item = (Segment<'_>, &Value)> + '_> {
        match self {
            Value::Map(entries) => Box::new(
                entries
                    .iter()
                    .map(|(k, v)| (Segment::Key(k.as_str()), v)),
            ),
            Value::Seq(items) => Box::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (Segment::Index(i), v)),
            ),
            Value::Record(record) => Box::new(
                record
                    .public_fields()
                    .map(|f| (Segment::Key(f.name.as_str()), &f.value)),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The signed integer widened to 64 bits. `None` for every other kind.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n, _) => Some(*n),
            _ => None,
        }
    }

    /// The unsigned integer widened to 64 bits. `None` for every other kind.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n, _) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n, _) => Some(*n),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a mapping entry or a public record field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            Value::Record(record) => record
                .public_fields()
                .find(|f| f.name == key)
                .map(|f| &f.value),
            _ => None,
        }
    }

    /// Converts to a `serde_json::Value`.
    ///
    /// Records become objects of their public fields. Non-finite floats become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(n, _) => JsonValue::Number((*n).into()),
            Value::UInt(n, _) => JsonValue::Number((*n).into()),
            Value::Float(n, _) => Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Seq(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<JsonMap<_, _>>(),
            ),
            Value::Record(record) => JsonValue::Object(
                record
                    .public_fields()
                    .map(|f| (f.name.clone(), f.value.to_json()))
                    .collect::<JsonMap<_, _>>(),
            ),
        }
    }
}
