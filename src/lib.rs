//! # vectortypes
//!
//! Small, strictly validated 2D and 3D vector value types.
//!
//! Coordinates are integers or floats and nothing else. Vectors are built
//! from loose [`Value`] arguments (zero, one or one per axis), support
//! indexed and keyed lookup, iterate over their coordinates, and expose
//! their magnitude (and, in 2D, their angle) as derived properties.
//!
//! ```rust
//! use vectortypes::prelude::*;
//!
//! # fn main() -> Result<(), VectorError> {
//! let mut v = Vector2::new(&[Value::from(3), Value::from(4)])?;
//! assert_eq!(v.get("magnitude")?, 5.0);
//! assert_eq!(v.get(0)?, 3_i64);
//!
//! v.set_x(1.5)?;
//! assert_eq!(v.to_string(), "Vector2(1.5,4)");
//!
//! let coords: Vec<Scalar> = v.iter().collect();
//! assert_eq!(coords.len(), v.len());
//! # Ok(())
//! # }
//! ```

pub mod numerics;
pub mod prelude;

pub use numerics::types::error::{ErrorKind, VectorError};
pub use numerics::types::scalar::{Scalar, Value};
pub use numerics::types::traits::{Coordinates, Vector};
pub use numerics::types::vector::{Vector2, Vector3, VectorKind};
