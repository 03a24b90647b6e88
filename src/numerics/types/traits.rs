// src/numerics/types/traits.rs
// Behavior shared by every vector dimensionality.

use core::iter::FusedIterator;

use tracing::debug;

use super::error::VectorError;
use super::scalar::{Scalar, Value};
use super::vector::VectorKind;

/// Vector is the common interface of the fixed-dimension vector types.
///
/// Implementors provide storage access (`from_coordinates`, `coordinate`,
/// `named`) and the downcast out of a [`Value`]; construction from loose
/// arguments, iteration, keyed lookup, magnitude and checked comparison are
/// provided on top of those.
pub trait Vector: Copy + Sized {
    /// Number of coordinates; also the value of [`Vector::len`].
    const DIMENSION: usize;
    const KIND: VectorKind;

    /// Builds the vector from exactly `DIMENSION` validated coordinates.
    fn from_coordinates(coordinates: &[Scalar]) -> Self;

    /// Coordinate at `index`, or `None` past the last one.
    fn coordinate(&self, index: usize) -> Option<Scalar>;

    /// Value published under a string key.
    fn named(&self, key: &str) -> Option<Scalar>;

    /// Extracts a vector of the same dimensionality from `value`.
    fn downcast(value: &Value) -> Option<Self>;

    /// Construct from zero, one or `DIMENSION` positional arguments.
    ///
    /// No arguments gives the integer zero vector and a single argument is
    /// broadcast to every coordinate. The argument count is checked before
    /// any argument type.
    fn from_args(args: &[Value]) -> Result<Self, VectorError> {
        let count = args.len();
        if count > 1 && count != Self::DIMENSION {
            debug!(kind = %Self::KIND, given = count, "rejected vector arity");
            return Err(VectorError::WrongArity { kind: Self::KIND, given: count });
        }

        let mut coordinates = Vec::with_capacity(Self::DIMENSION);
        for (position, arg) in args.iter().enumerate() {
            let scalar = Scalar::try_from(arg).map_err(|_| {
                debug!(
                    kind = %Self::KIND,
                    position,
                    found = arg.type_name(),
                    "rejected vector coordinate"
                );
                VectorError::IncorrectCoordinatesType
            })?;
            coordinates.push(scalar);
        }

        if count <= 1 {
            let fill = coordinates.first().copied().unwrap_or_default();
            coordinates = vec![fill; Self::DIMENSION];
        }

        Ok(Self::from_coordinates(&coordinates))
    }

    fn len(&self) -> usize {
        Self::DIMENSION
    }

    fn is_empty(&self) -> bool {
        false
    }

    /// A fresh cursor over the coordinates, in axis order.
    fn iter(&self) -> Coordinates<'_, Self> {
        Coordinates { vector: self, cursor: 0 }
    }

    /// Euclidean norm, recomputed on every call.
    fn magnitude(&self) -> f64 {
        self.iter().map(Scalar::as_f64).fold(0.0, f64::hypot)
    }

    /// Indexed or keyed lookup.
    ///
    /// Integers address coordinates by position, strings address the named
    /// fields; any other key kind is a type error.
    fn get(&self, key: impl Into<Value>) -> Result<Scalar, VectorError> {
        match key.into() {
            Value::Int(index) => usize::try_from(index)
                .ok()
                .and_then(|index| self.coordinate(index))
                .ok_or_else(|| key_not_found::<Self>(index.to_string())),
            Value::Str(name) => self
                .named(&name)
                .ok_or_else(|| key_not_found::<Self>(name)),
            other => {
                debug!(kind = %Self::KIND, found = other.type_name(), "rejected key type");
                Err(VectorError::InvalidKeyType)
            }
        }
    }

    /// Item assignment is never supported.
    fn set_item(&mut self, _key: impl Into<Value>, _value: impl Into<Value>) -> Result<(), VectorError> {
        debug!(kind = %Self::KIND, "refused item assignment");
        Err(VectorError::UnsupportedAssignment)
    }

    /// Checked equality against an arbitrary value.
    ///
    /// Fails unless `other` is a vector of the same dimensionality.
    fn try_eq(&self, other: &Value) -> Result<bool, VectorError> {
        let other = comparable::<Self>(other)?;
        Ok(self.iter().zip(other.iter()).all(|(a, b)| a == b))
    }

    fn try_ne(&self, other: &Value) -> Result<bool, VectorError> {
        let other = comparable::<Self>(other)?;
        Ok(self.iter().zip(other.iter()).any(|(a, b)| a != b))
    }
}

fn key_not_found<V: Vector>(key: String) -> VectorError {
    debug!(kind = %V::KIND, key = %key, "key not found");
    VectorError::KeyNotFound { key }
}

fn comparable<V: Vector>(other: &Value) -> Result<V, VectorError> {
    V::downcast(other).ok_or_else(|| {
        debug!(kind = %V::KIND, found = other.type_name(), "refused vector comparison");
        VectorError::IncorrectVectorComparison
    })
}

/// Iterator over a vector's coordinates.
///
/// Each cursor owns its position, so several may walk the same vector at once.
#[derive(Clone, Debug)]
pub struct Coordinates<'a, V: Vector> {
    vector: &'a V,
    cursor: usize,
}

impl<V: Vector> Iterator for Coordinates<'_, V> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        let value = self.vector.coordinate(self.cursor)?;
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = V::DIMENSION.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl<V: Vector> ExactSizeIterator for Coordinates<'_, V> {}

impl<V: Vector> FusedIterator for Coordinates<'_, V> {}
