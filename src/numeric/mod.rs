// ============================================================================
// Numeric Module
// Decimal arithmetic support for vector operations
// ============================================================================
//
// This module provides:
// - Error types shared by the whole crate
// - The precision context: 30 significant digits, half-even rounding
// - The f64 bridge used for square root and inverse cosine
//
// Design principles:
// - BigDecimal everywhere except the transcendental steps
// - Unbounded exponent range: no underflow to zero, no overflow
// - Fallible operations return Result (no panics)

mod errors;
pub mod float_bridge;
pub mod precision;

pub use bigdecimal::BigDecimal;
pub use errors::{
    InvalidArgument, NumericError, NumericResult, VectorError, VectorResult, ZeroVectorError,
};
pub use float_bridge::AngleUnit;
