//! The runtime category of a [`Value`](crate::Value).
use std::fmt;

/// Storage width of an integer scalar as it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    /// Pointer-sized (`isize` / `usize`).
    Native,
}

/// Storage width of a floating-point scalar as it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    W32,
    W64,
}

/// The kind of a value, as seen by predicates and kind filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Map,
    Seq,
    Record,
    Str,
    Bool,
    Int(IntWidth),
    UInt(IntWidth),
    Float(FloatWidth),
    Null,
}

impl Kind {
    /// Mappings, sequences and records: the kinds the engine descends into.
    pub fn is_composite(self) -> bool {
        matches!(self, Kind::Map | Kind::Seq | Kind::Record)
    }

    /// Any signed integer width.
    pub fn is_int(self) -> bool {
        matches!(self, Kind::Int(_))
    }

    /// Any unsigned integer width.
    pub fn is_uint(self) -> bool {
        matches!(self, Kind::UInt(_))
    }

    /// Any floating-point width.
    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float(_))
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntWidth::W8 => write!(f, "8"),
            IntWidth::W16 => write!(f, "16"),
            IntWidth::W32 => write!(f, "32"),
            IntWidth::W64 => write!(f, "64"),
            IntWidth::Native => Ok(()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Map => write!(f, "map"),
            Kind::Seq => write!(f, "seq"),
            Kind::Record => write!(f, "record"),
            Kind::Str => write!(f, "string"),
            Kind::Bool => write!(f, "bool"),
            Kind::Int(w) => write!(f, "int{}", w),
            Kind::UInt(w) => write!(f, "uint{}", w),
            Kind::Float(FloatWidth::W32) => write!(f, "float32"),
            Kind::Float(FloatWidth::W64) => write!(f, "float64"),
            Kind::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_carries_width() {
        assert_eq!(Kind::Int(IntWidth::W32).to_string(), "int32");
        assert_eq!(Kind::UInt(IntWidth::Native).to_string(), "uint");
        assert_eq!(Kind::Float(FloatWidth::W64).to_string(), "float64");
        assert_eq!(Kind::Record.to_string(), "record");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Kind::Map.is_composite());
        assert!(Kind::Record.is_composite());
        assert!(!Kind::Str.is_composite());
        assert!(Kind::Int(IntWidth::W8).is_int());
        assert!(!Kind::UInt(IntWidth::W8).is_int());
        assert!(Kind::UInt(IntWidth::W64).is_uint());
        assert!(Kind::Float(FloatWidth::W32).is_float());
        assert!(!Kind::Null.is_float());
    }
}
