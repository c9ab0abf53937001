// ============================================================================
// Decimal Vector Library
// Immutable decimal-precision vectors with geometric operations
// ============================================================================

//! # Decimal Vector
//!
//! An immutable, fixed-dimension vector type whose coordinates are
//! `bigdecimal::BigDecimal` values. Arithmetic results keep 30 significant
//! digits and the exponent range is unbounded, so tiny and huge coordinates
//! neither underflow nor overflow.
//!
//! ## Features
//!
//! - **Decimal arithmetic**: add, subtract, scalar multiply, dot product
//! - **Geometry**: magnitude, normalization, angle, projection, 3D cross product
//! - **Precision-aware predicates**: parallel, orthogonal and zero tests with
//!   configurable rounding and tolerance
//! - **Typed errors**: dimension mismatches and zero vectors are returned,
//!   never panicked
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let a = Vector::new([1, 1]).unwrap();
//! let b = Vector::new([1, -1]).unwrap();
//! assert!(a.is_orthogonal(&b).unwrap());
//!
//! let x = Vector::new([1, 0, 0]).unwrap();
//! let y = Vector::new([0, 1, 0]).unwrap();
//! assert_eq!(x.cross_product(&y).unwrap(), Vector::new([0, 0, 1]).unwrap());
//!
//! let zero = Vector::new([0, 0]).unwrap();
//! assert_eq!(
//!     zero.normalized(),
//!     Err(VectorError::ZeroVector(ZeroVectorError::Normalize))
//! );
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Tolerance, Vector};
    pub use crate::numeric::{
        AngleUnit, BigDecimal, InvalidArgument, NumericError, VectorError, VectorResult,
        ZeroVectorError,
    };
}
