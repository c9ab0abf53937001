// ============================================================================
// Vector Errors
// Error types for construction, arithmetic and geometric operations
// ============================================================================

use thiserror::Error;

/// Errors raised by the decimal arithmetic underneath every vector operation.
///
/// Coordinates are unbounded decimals, so addition, subtraction and
/// multiplication never fail; only division and the f64 bridge can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// A floating-point intermediate (NaN, infinity) has no decimal form
    #[error("value is not representable as a decimal")]
    NotRepresentable,
}

/// Which operation ran into a zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ZeroVectorError {
    #[error("Cannot normalize the zero vector")]
    Normalize,
    #[error("Cannot compute an angle with zero vector")]
    Angle,
}

/// Malformed input to a constructor or an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// No coordinates were supplied
    #[error("the coordinates must be nonempty")]
    Empty,
    /// A coordinate could not be converted to a decimal
    #[error("coordinate {index} is not a finite number: {value:?}")]
    NotNumeric { index: usize, value: String },
    /// The operation is only defined for one dimension
    #[error("operation requires dimension {required}, got {found}")]
    UnsupportedDimension { required: usize, found: usize },
    /// Tolerance settings failed validation
    #[error("invalid tolerance: {0}")]
    Tolerance(&'static str),
}

/// Top-level error for every fallible `Vector` operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("the vectors must have the same dimension ({left} != {right})")]
    DimensionMismatch { left: usize, right: usize },

    #[error(transparent)]
    ZeroVector(#[from] ZeroVectorError),

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl VectorError {
    /// Re-tag a zero-vector failure as coming from `op`; other errors pass through.
    pub(crate) fn in_context(self, op: ZeroVectorError) -> Self {
        match self {
            VectorError::ZeroVector(_) => VectorError::ZeroVector(op),
            other => other,
        }
    }
}

/// Result type alias for decimal arithmetic
pub type NumericResult<T> = Result<T, NumericError>;

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
