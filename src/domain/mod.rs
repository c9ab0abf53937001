// ============================================================================
// Domain Models Module
// The Vector value type, its geometry, and precision settings
// ============================================================================

pub mod config;
mod geometry;
pub mod vector;

pub use config::Tolerance;
pub use vector::Vector;
