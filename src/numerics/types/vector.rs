// src/numerics/types/vector.rs
// Vector2 and Vector3: strictly validated 2D and 3D coordinate vectors.

use core::fmt;

use tracing::debug;

use super::error::VectorError;
use super::scalar::{Scalar, Value};
use super::traits::{Coordinates, Vector};

/// Which dimensionality a vector has.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Vector2,
    Vector3,
}

impl VectorKind {
    pub fn dimension(self) -> usize {
        match self {
            VectorKind::Vector2 => Vector2::DIMENSION,
            VectorKind::Vector3 => Vector3::DIMENSION,
        }
    }

    /// Axis names as they appear in arity errors.
    pub fn axes(self) -> &'static str {
        match self {
            VectorKind::Vector2 => "X and Y",
            VectorKind::Vector3 => "X, Y and Z",
        }
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VectorKind::Vector2 => "Vector2",
            VectorKind::Vector3 => "Vector3",
        })
    }
}

fn validated(value: Value, axis: &'static str, error: VectorError) -> Result<Scalar, VectorError> {
    Scalar::try_from(value).map_err(|rejected| {
        debug!(axis, found = rejected.type_name(), "rejected coordinate assignment");
        error
    })
}

/// Vector2 is a 2D vector whose coordinates are integers or floats.
///
/// `x` and `y` may be reassigned after construction; every assignment is
/// validated. The zero vector is the `Default`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    x: Scalar,
    y: Scalar,
}

impl Vector2 {
    /// Construct from loose arguments: `[]`, `[v]` or `[x, y]`.
    ///
    /// ```
    /// use vectortypes::{Value, Vector2};
    ///
    /// let v = Vector2::new(&[Value::from(3), Value::from(4.4)]).unwrap();
    /// assert_eq!(v.to_string(), "Vector2(3,4.4)");
    /// assert!(Vector2::new(&[Value::from("a")]).is_err());
    /// ```
    pub fn new(args: &[Value]) -> Result<Self, VectorError> {
        Self::from_args(args)
    }

    pub fn from_xy(x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        Self { x: x.into(), y: y.into() }
    }

    pub fn x(&self) -> Scalar {
        self.x
    }

    pub fn y(&self) -> Scalar {
        self.y
    }

    pub fn set_x(&mut self, value: impl Into<Value>) -> Result<(), VectorError> {
        self.x = validated(value.into(), "x", VectorError::InvalidXValue)?;
        Ok(())
    }

    pub fn set_y(&mut self, value: impl Into<Value>) -> Result<(), VectorError> {
        self.y = validated(value.into(), "y", VectorError::InvalidYValue)?;
        Ok(())
    }

    /// Direction in degrees from the positive x axis, in `(-180, 180]`.
    pub fn angle(&self) -> f64 {
        self.y.as_f64().atan2(self.x.as_f64()).to_degrees()
    }

    /// Key-value listing of every field and derived property.
    pub fn long_form(&self) -> String {
        format!(
            "{{'x': {}, 'y': {}, 'magnitude': {}, 'angle': {}}}",
            self.x,
            self.y,
            Scalar::Float(self.magnitude()),
            Scalar::Float(self.angle()),
        )
    }
}

impl Vector for Vector2 {
    const DIMENSION: usize = 2;
    const KIND: VectorKind = VectorKind::Vector2;

    fn from_coordinates(coordinates: &[Scalar]) -> Self {
        Self { x: coordinates[0], y: coordinates[1] }
    }

    fn coordinate(&self, index: usize) -> Option<Scalar> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    fn named(&self, key: &str) -> Option<Scalar> {
        match key {
            "x" => Some(self.x),
            "y" => Some(self.y),
            "magnitude" => Some(Scalar::Float(self.magnitude())),
            "angle" => Some(Scalar::Float(self.angle())),
            _ => None,
        }
    }

    fn downcast(value: &Value) -> Option<Self> {
        match value {
            Value::Vector2(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({},{})", self.x, self.y)
    }
}

impl<'a> IntoIterator for &'a Vector2 {
    type Item = Scalar;
    type IntoIter = Coordinates<'a, Vector2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Vector3 is a 3D vector whose coordinates are integers or floats.
///
/// `x` and `y` may be reassigned after construction; `z` is fixed once the
/// vector is built, and is reachable by index `2` but not by a string key.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    x: Scalar,
    y: Scalar,
    z: Scalar,
}

impl Vector3 {
    /// Construct from loose arguments: `[]`, `[v]` or `[x, y, z]`.
    pub fn new(args: &[Value]) -> Result<Self, VectorError> {
        Self::from_args(args)
    }

    pub fn from_xyz(x: impl Into<Scalar>, y: impl Into<Scalar>, z: impl Into<Scalar>) -> Self {
        Self { x: x.into(), y: y.into(), z: z.into() }
    }

    pub fn x(&self) -> Scalar {
        self.x
    }

    pub fn y(&self) -> Scalar {
        self.y
    }

    pub fn z(&self) -> Scalar {
        self.z
    }

    pub fn set_x(&mut self, value: impl Into<Value>) -> Result<(), VectorError> {
        self.x = validated(value.into(), "x", VectorError::InvalidXValue)?;
        Ok(())
    }

    pub fn set_y(&mut self, value: impl Into<Value>) -> Result<(), VectorError> {
        self.y = validated(value.into(), "y", VectorError::InvalidYValue)?;
        Ok(())
    }

    pub fn long_form(&self) -> String {
        format!(
            "{{'x': {}, 'y': {}, 'z': {}, 'magnitude': {}}}",
            self.x,
            self.y,
            self.z,
            Scalar::Float(self.magnitude()),
        )
    }
}

impl Vector for Vector3 {
    const DIMENSION: usize = 3;
    const KIND: VectorKind = VectorKind::Vector3;

    fn from_coordinates(coordinates: &[Scalar]) -> Self {
        Self { x: coordinates[0], y: coordinates[1], z: coordinates[2] }
    }

    fn coordinate(&self, index: usize) -> Option<Scalar> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    fn named(&self, key: &str) -> Option<Scalar> {
        match key {
            "x" => Some(self.x),
            "y" => Some(self.y),
            "magnitude" => Some(Scalar::Float(self.magnitude())),
            _ => None,
        }
    }

    fn downcast(value: &Value) -> Option<Self> {
        match value {
            Value::Vector3(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({},{},{})", self.x, self.y, self.z)
    }
}

impl<'a> IntoIterator for &'a Vector3 {
    type Item = Scalar;
    type IntoIter = Coordinates<'a, Vector3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
