// ============================================================================
// Tolerance Configuration
// Precision settings for the approximate geometric predicates
// ============================================================================

use crate::numeric::{InvalidArgument, VectorResult};
use bigdecimal::{BigDecimal, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Finest comparison rounding accepted; the working precision is 30 digits.
const MAX_COMPARISON_PLACES: u32 = 28;

/// Precision settings used by `angle`, `is_parallel`, `is_orthogonal`,
/// `is_zero` and the cross-product shortcut.
///
/// The two fields are independent: `comparison_places` controls rounding of
/// cosines and unit vectors before they are compared, `zero_tolerance` is the
/// magnitude below which a vector counts as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Decimal places kept before inverse cosine and parallel comparison
    pub comparison_places: u32,

    /// Magnitudes strictly below this are treated as zero
    pub zero_tolerance: BigDecimal,
}

impl Tolerance {
    /// Default rounding applied before comparisons
    pub const DEFAULT_COMPARISON_PLACES: u32 = 3;

    /// Default zero tolerance, `1e-10`
    pub fn default_zero_tolerance() -> BigDecimal {
        BigDecimal::new(1.into(), 10)
    }

    pub fn new() -> Self {
        Self {
            comparison_places: Self::DEFAULT_COMPARISON_PLACES,
            zero_tolerance: Self::default_zero_tolerance(),
        }
    }

    /// Builder method: Set comparison rounding
    pub fn with_comparison_places(mut self, places: u32) -> Self {
        self.comparison_places = places;
        self
    }

    /// Builder method: Set zero tolerance
    pub fn with_zero_tolerance(mut self, tolerance: BigDecimal) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VectorResult<()> {
        if self.comparison_places > MAX_COMPARISON_PLACES {
            return Err(InvalidArgument::Tolerance(
                "comparison places cannot exceed 28",
            )
            .into());
        }

        if self.zero_tolerance <= BigDecimal::zero() {
            return Err(InvalidArgument::Tolerance("zero tolerance must be positive").into());
        }

        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::VectorError;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let tolerance = Tolerance::default();
        assert_eq!(tolerance.comparison_places, 3);
        assert_eq!(
            tolerance.zero_tolerance,
            BigDecimal::from_str("0.0000000001").unwrap()
        );
        assert!(tolerance.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let tolerance = Tolerance::new()
            .with_comparison_places(6)
            .with_zero_tolerance(BigDecimal::from_str("1e-4").unwrap());

        assert_eq!(tolerance.comparison_places, 6);
        assert_eq!(
            tolerance.zero_tolerance,
            BigDecimal::from_str("0.0001").unwrap()
        );
    }

    #[test]
    fn test_validation() {
        let too_fine = Tolerance::new().with_comparison_places(29);
        assert!(matches!(
            too_fine.validate(),
            Err(VectorError::InvalidArgument(InvalidArgument::Tolerance(_)))
        ));

        let non_positive = Tolerance::new().with_zero_tolerance(BigDecimal::zero());
        assert!(non_positive.validate().is_err());
    }
}
