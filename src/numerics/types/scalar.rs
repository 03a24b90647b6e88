// src/numerics/types/scalar.rs
// Scalar coordinate values and the dynamically typed arguments they are
// validated from.

use core::fmt;

use super::vector::{Vector2, Vector3};

/// A coordinate value: either an integer or a floating point number.
///
/// Equality is numeric and exact across kinds, so `Int(1) == Float(1.0)`.
#[derive(Copy, Clone, Debug)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Numeric value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    pub fn is_float(self) -> bool {
        matches!(self, Scalar::Float(_))
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Int(0)
    }
}

// i64 range bounds expressed exactly in f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn int_equals_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(&f) && f as i64 == i
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Int(i), Scalar::Float(f)) | (Scalar::Float(f), Scalar::Int(i)) => {
                int_equals_float(i, f)
            }
        }
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        *self == Scalar::Int(*other)
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        *self == Scalar::Float(*other)
    }
}

/// Integers print plainly; floats always carry a fractional part (`5.0`).
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) if v.is_nan() => f.write_str("nan"),
            Scalar::Float(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "inf" } else { "-inf" })
            }
            // Debug gives the shortest round-trip form and keeps the ".0".
            Scalar::Float(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::Int(i64::from(value))
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

/// Any value a caller may hand to a vector operation.
///
/// Only [`Value::Int`] and [`Value::Float`] are accepted as coordinates;
/// everything else is rejected at runtime with a descriptive error.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Seq(Vec<Value>),
    Vector2(Vector2),
    Vector3(Vector3),
}

impl Value {
    /// Short name of the held kind, used in log events.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Seq(_) => "sequence",
            Value::Vector2(_) => "Vector2",
            Value::Vector3(_) => "Vector3",
        }
    }
}

/// Booleans are not scalars; the rejected value is handed back.
impl TryFrom<Value> for Scalar {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(Scalar::Int(i)),
            Value::Float(f) => Ok(Scalar::Float(f)),
            other => Err(other),
        }
    }
}

impl TryFrom<&Value> for Scalar {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match *value {
            Value::Int(i) => Ok(Scalar::Int(i)),
            Value::Float(f) => Ok(Scalar::Float(f)),
            _ => Err(()),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Int(i) => Value::Int(i),
            Scalar::Float(f) => Value::Float(f),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Seq(values)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from(pair: (A, B)) -> Self {
        Value::Seq(vec![pair.0.into(), pair.1.into()])
    }
}

impl From<Vector2> for Value {
    fn from(vector: Vector2) -> Self {
        Value::Vector2(vector)
    }
}

impl From<Vector3> for Value {
    fn from(vector: Vector3) -> Self {
        Value::Vector3(vector)
    }
}
