//! Typed projections for the typed query flavors.
use crate::filter::{is_bool, is_string};
use treewalk_value::{Kind, Value};

/// A scalar type a typed query can return.
///
/// Pairs the kind-set a node must belong to with the projection of such a
/// node into the canonical wide representation. Projection never narrows or
/// reinterprets: it succeeds exactly for the kinds [`Scalar::accepts`] admits.
pub trait Scalar<'a>: Sized {
    fn accepts(kind: Kind) -> bool;

    fn project(value: &'a Value) -> Option<Self>;
}

impl<'a> Scalar<'a> for &'a str {
    fn accepts(kind: Kind) -> bool {
        is_string(kind)
    }

    fn project(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> Scalar<'a> for bool {
    fn accepts(kind: Kind) -> bool {
        is_bool(kind)
    }

    fn project(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> Scalar<'a> for i64 {
    fn accepts(kind: Kind) -> bool {
        kind.is_int()
    }

    fn project(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> Scalar<'a> for u64 {
    fn accepts(kind: Kind) -> bool {
        kind.is_uint()
    }

    fn project(value: &'a Value) -> Option<Self> {
        value.as_u64()
    }
}

impl<'a> Scalar<'a> for f64 {
    fn accepts(kind: Kind) -> bool {
        kind.is_float()
    }

    fn project(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}
