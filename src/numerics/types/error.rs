// src/numerics/types/error.rs
// Errors raised by vector construction, mutation, comparison and lookup.

use super::vector::VectorKind;

/// Errors that can occur while building, mutating or querying a vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    #[error("Vector coords must be type \"int\" or \"float\"")]
    IncorrectCoordinatesType,

    #[error("{kind} only accepts {} values", .kind.axes())]
    WrongArity { kind: VectorKind, given: usize },

    #[error("Value of X must be type \"int\" or \"float\"")]
    InvalidXValue,

    #[error("Value of Y must be type \"int\" or \"float\"")]
    InvalidYValue,

    #[error("Vectors can only be compared with other vectors of same dimensions")]
    IncorrectVectorComparison,

    #[error("Invalid key value \"{key}\"")]
    KeyNotFound { key: String },

    #[error("Key value must be type \"int\" or \"str\"")]
    InvalidKeyType,

    #[error("Vector item assignment is not supported")]
    UnsupportedAssignment,
}

/// Broad category of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CoordinateType,
    WrongArity,
    ComparisonType,
    KeyNotFound,
    KeyType,
    UnsupportedOperation,
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::IncorrectCoordinatesType
            | VectorError::InvalidXValue
            | VectorError::InvalidYValue => ErrorKind::CoordinateType,
            VectorError::WrongArity { .. } => ErrorKind::WrongArity,
            VectorError::IncorrectVectorComparison => ErrorKind::ComparisonType,
            VectorError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            VectorError::InvalidKeyType => ErrorKind::KeyType,
            VectorError::UnsupportedAssignment => ErrorKind::UnsupportedOperation,
        }
    }
}
