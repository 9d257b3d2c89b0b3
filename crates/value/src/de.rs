use crate::kind::IntWidth;
use crate::value::Value;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess};
use std::fmt;

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;
        impl<'de> de::Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any self-describing value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i8<E: de::Error>(self, v: i8) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_i16<E: de::Error>(self, v: i16) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_i32<E: de::Error>(self, v: i32) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_u8<E: de::Error>(self, v: u8) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_u16<E: de::Error>(self, v: u16) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_u32<E: de::Error>(self, v: u32) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            // Self-describing formats report every non-negative integer as u64;
            // keep the signed kind whenever the value fits.
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                Ok(match i64::try_from(v) {
                    Ok(n) => Value::Int(n, IntWidth::W64),
                    Err(_) => Value::UInt(v, IntWidth::W64),
                })
            }

            fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_char<E: de::Error>(self, v: char) -> Result<Value, E> {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                Ok(Value::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
                Ok(Value::Str(v))
            }

            fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<Value>()? {
                    items.push(item);
                }
                Ok(Value::Seq(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.push((key, value));
                }
                Ok(Value::Map(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
