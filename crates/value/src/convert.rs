//! `From` conversions into [`Value`].
use crate::kind::{FloatWidth, IntWidth};
use crate::value::{Record, Value};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

macro_rules! from_signed {
    ($($t:ty => $w:expr),* $(,)?) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i64, $w)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty => $w:expr),* $(,)?) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(n as u64, $w)
            }
        })*
    };
}

from_signed! {
    i8 => IntWidth::W8,
    i16 => IntWidth::W16,
    i32 => IntWidth::W32,
    i64 => IntWidth::W64,
    isize => IntWidth::Native,
}

from_unsigned! {
    u8 => IntWidth::W8,
    u16 => IntWidth::W16,
    u32 => IntWidth::W32,
    u64 => IntWidth::W64,
    usize => IntWidth::Native,
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64, FloatWidth::W32)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n, FloatWidth::W64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Display, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k.to_string(), v.into())).collect())
    }
}

impl<K: Display, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k.to_string(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i, IntWidth::W64)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u, IntWidth::W64)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN), FloatWidth::W64)
                }
            }
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Value::from(json.clone())
    }
}
