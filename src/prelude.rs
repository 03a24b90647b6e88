//! Prelude for vectortypes
//!
//! Re-exports the vector types, the shared `Vector` trait and the value and
//! error types needed to call into them.

pub use crate::numerics::types::error::{ErrorKind, VectorError};
pub use crate::numerics::types::scalar::{Scalar, Value};
pub use crate::numerics::types::traits::{Coordinates, Vector};
pub use crate::numerics::types::vector::{Vector2, Vector3, VectorKind};
