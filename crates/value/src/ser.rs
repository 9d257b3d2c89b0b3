//! Serde integration: `Serialize for Value` and [`to_value`], a serializer that
//! turns any `T: Serialize` into a walkable [`Value`].
//!
//! `to_value` is how arbitrary Rust data is exposed to the query engine:
//! structs become [`Record`]s with their fields in declaration order, fields
//! the type does not serialize (`#[serde(skip)]`) never appear, and transparent
//! envelopes (`Some(x)`, newtype structs) are unwrapped to their inner value.
use crate::error::ValueError;
use crate::kind::{FloatWidth, IntWidth};
use crate::value::{Field, Record, Value};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n, width) => match width {
                IntWidth::W8 => serializer.serialize_i8(narrow::<_, i8, S::Error>(*n)?),
                IntWidth::W16 => serializer.serialize_i16(narrow::<_, i16, S::Error>(*n)?),
                IntWidth::W32 => serializer.serialize_i32(narrow::<_, i32, S::Error>(*n)?),
                IntWidth::W64 | IntWidth::Native => serializer.serialize_i64(*n),
            },
            Value::UInt(n, width) => match width {
                IntWidth::W8 => serializer.serialize_u8(narrow::<_, u8, S::Error>(*n)?),
                IntWidth::W16 => serializer.serialize_u16(narrow::<_, u16, S::Error>(*n)?),
                IntWidth::W32 => serializer.serialize_u32(narrow::<_, u32, S::Error>(*n)?),
                IntWidth::W64 | IntWidth::Native => serializer.serialize_u64(*n),
            },
            // A float that does not survive the round trip through f32 keeps its full width.
            Value::Float(n, FloatWidth::W32) if f64::from(*n as f32) == *n || n.is_nan() => {
                serializer.serialize_f32(*n as f32)
            }
            Value::Float(n, _) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Record(record) => {
                let mut map = serializer.serialize_map(None)?;
                for field in record.public_fields() {
                    map.serialize_entry(&field.name, &field.value)?;
                }
                map.end()
            }
        }
    }
}

/// Narrows a stored integer to its declared width, rejecting values that do not fit.
fn narrow<T, U, E>(n: T) -> Result<U, E>
where
    U: TryFrom<T>,
    U::Error: std::fmt::Display,
    E: ser::Error,
{
    U::try_from(n).map_err(E::custom)
}

/// Converts any serializable value into a [`Value`] tree.
///
/// Fails only when a map key is not a scalar, or when a `Serialize` impl
/// reports its own error.
pub fn to_value<T>(value: &T) -> Result<Value, ValueError>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// The serializer behind [`to_value`].
pub struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ValueError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = VariantSeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = RecordBuilder;
    type SerializeStructVariant = VariantRecordBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, ValueError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, ValueError> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, ValueError> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, ValueError> {
        Ok(Value::Seq(v.iter().copied().map(Value::from).collect()))
    }

    fn serialize_none(self) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, ValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, ValueError> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value, ValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, ValueError>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(ValueSerializer)?;
        Ok(Value::Map(vec![(variant.to_string(), inner)]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, ValueError> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, ValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, ValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqBuilder, ValueError> {
        Ok(VariantSeqBuilder {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, ValueError> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<RecordBuilder, ValueError> {
        Ok(RecordBuilder {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantRecordBuilder, ValueError> {
        Ok(VariantRecordBuilder {
            record: RecordBuilder {
                name: variant,
                fields: Vec::with_capacity(len),
            },
        })
    }
}

/// Renders a serialized map key as the segment string the engine emits.
fn key_string(key: Value) -> Result<String, ValueError> {
    match key {
        Value::Str(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(n, _) => Ok(n.to_string()),
        Value::UInt(n, _) => Ok(n.to_string()),
        Value::Float(n, _) => Ok(n.to_string()),
        other => Err(ValueError::KeyMustBeScalar(other.kind())),
    }
}

pub struct SeqBuilder {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        ser::SerializeSeq::end(self)
    }
}

pub struct VariantSeqBuilder {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for VariantSeqBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Map(vec![(
            self.variant.to_string(),
            Value::Seq(self.items),
        )]))
    }
}

pub struct MapBuilder {
    entries: Vec<(String, Value)>,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(key_string(key.serialize(ValueSerializer)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| ValueError::Custom("serialize_value called before serialize_key".into()))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Map(self.entries))
    }
}

pub struct RecordBuilder {
    name: &'static str,
    fields: Vec<Field>,
}

impl ser::SerializeStruct for RecordBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        self.fields
            .push(Field::public(key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Record(Record::new(self.name, self.fields)))
    }
}

pub struct VariantRecordBuilder {
    record: RecordBuilder,
}

impl ser::SerializeStructVariant for VariantRecordBuilder {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), ValueError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.record, key, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        let variant = self.record.name.to_string();
        let record = ser::SerializeStruct::end(self.record)?;
        Ok(Value::Map(vec![(variant, record)]))
    }
}
