//! Error types for echolect

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using echolect's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in echolect operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape mismatch when writing or combining tensors
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Operation requires a tensor of a specific rank
    #[error("'{op}' requires a {expected_ndim}-D tensor, got shape {got:?}")]
    InvalidShape {
        /// The operation name
        op: &'static str,
        /// Required number of dimensions
        expected_ndim: usize,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Expected (destination) dtype
        lhs: DType,
        /// Actual (source) dtype
        rhs: DType,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A grouped row result has a different number of fields than expected
    #[error("Field count mismatch: expected {expected} fields, got {got}")]
    FieldCountMismatch {
        /// Expected number of fields
        expected: usize,
        /// Actual number of fields
        got: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
