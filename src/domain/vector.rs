// ============================================================================
// Vector Domain Model
// Immutable fixed-dimension tuple of decimal coordinates
// ============================================================================

use crate::numeric::float_bridge;
use crate::numeric::precision;
use crate::numeric::{InvalidArgument, VectorError, VectorResult};
use bigdecimal::{BigDecimal, Zero};
use std::fmt;
use std::ops::{Index, Neg};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable vector of high-precision decimal coordinates.
///
/// Coordinates are `BigDecimal`s with an unbounded exponent; arithmetic results
/// carry 30 significant digits. The dimension is fixed at construction and is
/// always at least 1. Every operation returns a new `Vector`; equality is
/// exact, element by element.
///
/// # Example
/// ```
/// use decimal_vector::prelude::*;
///
/// let a = Vector::new([2, 3]).unwrap();
/// let b = Vector::new([-4, -6]).unwrap();
/// assert_eq!(a.add(&b).unwrap(), Vector::new([-2, -3]).unwrap());
/// assert_eq!(a.to_string(), "Vector: (2, 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<BigDecimal>", into = "Vec<BigDecimal>")
)]
pub struct Vector {
    coordinates: Vec<BigDecimal>,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector from any sequence of values convertible to `BigDecimal`.
    /// Values are stored exactly as given.
    ///
    /// # Errors
    /// Returns `InvalidArgument::Empty` if the sequence is empty.
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<BigDecimal>,
    {
        let coordinates: Vec<BigDecimal> = coordinates.into_iter().map(Into::into).collect();
        Self::try_from(coordinates)
    }

    /// Create a vector from floating-point values.
    ///
    /// # Errors
    /// - `InvalidArgument::Empty` if `values` is empty
    /// - `InvalidArgument::NotNumeric` for NaN or infinities
    pub fn from_f64s(values: &[f64]) -> VectorResult<Self> {
        let coordinates = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                float_bridge::from_f64(*value).map_err(|_| InvalidArgument::NotNumeric {
                    index,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(coordinates)
    }

    /// Create a vector from fixed-point `rust_decimal` values.
    ///
    /// This is intended for API boundaries where callers already hold
    /// `rust_decimal::Decimal`s; the conversion is exact.
    pub fn from_fixed<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator<Item = rust_decimal::Decimal>,
    {
        Self::new(coordinates.into_iter().map(precision::from_fixed))
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::try_from(vec![BigDecimal::zero(); dimension])
    }

    /// Wrap coordinates produced from an existing vector, which are never empty.
    #[inline]
    pub(crate) fn from_nonempty(coordinates: Vec<BigDecimal>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self { coordinates }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    /// Number of coordinates; always at least 1.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BigDecimal> {
        self.coordinates.iter()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    pub fn add(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    pub fn subtract(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Every coordinate multiplied by `scalar`.
    pub fn scalar_multiply(&self, scalar: impl Into<BigDecimal>) -> Vector {
        let scalar = scalar.into();
        Self::from_nonempty(
            self.coordinates
                .iter()
                .map(|x| precision::round(x * &scalar))
                .collect(),
        )
    }

    /// Every coordinate rounded to `places` decimal places (half-even).
    pub fn round_to(&self, places: u32) -> Vector {
        Self::from_nonempty(
            self.coordinates
                .iter()
                .map(|x| precision::round_places(x, places))
                .collect(),
        )
    }

    /// Every coordinate rounded to 3 decimal places.
    pub fn round_to_three(&self) -> Vector {
        self.round_to(3)
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            tracing::debug!(
                "Dimension mismatch: {} vs {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: impl Fn(&BigDecimal, &BigDecimal) -> BigDecimal,
    ) -> VectorResult<Vector> {
        self.ensure_same_dimension(other)?;
        Ok(Self::from_nonempty(
            self.coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(a, b)| precision::round(op(a, b)))
                .collect(),
        ))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl TryFrom<Vec<BigDecimal>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<BigDecimal>) -> Result<Self, Self::Error> {
        if coordinates.is_empty() {
            return Err(InvalidArgument::Empty.into());
        }
        Ok(Self { coordinates })
    }
}

impl From<Vector> for Vec<BigDecimal> {
    fn from(vector: Vector) -> Self {
        vector.coordinates
    }
}

impl Index<usize> for Vector {
    type Output = BigDecimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::from_nonempty(self.coordinates.iter().map(|x| -x).collect())
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a BigDecimal;
    type IntoIter = std::slice::Iter<'a, BigDecimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse a comma-separated coordinate list.
    ///
    /// # Examples
    /// - "1, 2.5, -3e-20"
    /// - "(1, 2.5, -3)"
    /// - "Vector: (1, 2.5, -3)"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("Vector:").map(str::trim).unwrap_or(s);
        let s = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s)
            .trim();

        if s.is_empty() {
            return Err(InvalidArgument::Empty.into());
        }

        let coordinates = s
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, token)| {
                BigDecimal::from_str(token).map_err(|_| InvalidArgument::NotNumeric {
                    index,
                    value: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(coordinates)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(values: &[i64]) -> Vector {
        Vector::new(values.iter().copied()).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_construction() {
        let v = vector(&[1, 2, 3]);
        assert_eq!(v.dimension(), 3);
        assert_eq!(
            v.coordinates(),
            &[BigDecimal::from(1), BigDecimal::from(2), BigDecimal::from(3)]
        );
        assert_eq!(v[2], BigDecimal::from(3));
    }

    #[test]
    fn test_construction_keeps_inputs_exact() {
        let long = dec("0.1234567890123456789012345678901234567890");
        let v = Vector::new([long.clone()]).unwrap();
        assert_eq!(v[0], long);
    }

    #[test]
    fn test_construction_empty() {
        let result = Vector::new(Vec::<i32>::new());
        assert_eq!(result, Err(VectorError::InvalidArgument(InvalidArgument::Empty)));
        assert!(Vector::zero(0).is_err());
    }

    #[test]
    fn test_from_f64s() {
        let v = Vector::from_f64s(&[1.5, -2.25, 1e-300]).unwrap();
        assert_eq!(
            v,
            Vector::new([dec("1.5"), dec("-2.25"), dec("1e-300")]).unwrap()
        );

        let result = Vector::from_f64s(&[1.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(VectorError::InvalidArgument(InvalidArgument::NotNumeric { index: 1, .. }))
        ));

        assert!(Vector::from_f64s(&[]).is_err());
    }

    #[test]
    fn test_from_fixed() {
        let v = Vector::from_fixed([
            rust_decimal::Decimal::new(15, 1),
            rust_decimal::Decimal::new(-3, 0),
        ])
        .unwrap();
        assert_eq!(v, Vector::new([dec("1.5"), dec("-3")]).unwrap());
        assert!(Vector::from_fixed(Vec::new()).is_err());
    }

    #[test]
    fn test_zero() {
        let z = Vector::zero(3).unwrap();
        assert_eq!(z, vector(&[0, 0, 0]));
    }

    #[test]
    fn test_add() {
        assert_eq!(vector(&[2, 3]).add(&vector(&[-4, -6])).unwrap(), vector(&[-2, -3]));
        assert_eq!(
            vector(&[1, 2, 3]).add(&vector(&[-4, -6, -8])).unwrap(),
            vector(&[-3, -4, -5])
        );
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let result = vector(&[2, 3]).add(&vector(&[1, 2, 3]));
        assert_eq!(
            result,
            Err(VectorError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_subtract() {
        assert_eq!(
            vector(&[2, 3]).subtract(&vector(&[-4, -6])).unwrap(),
            vector(&[6, 9])
        );
        assert_eq!(
            vector(&[1, 2, 3]).subtract(&vector(&[-4, -6, -8])).unwrap(),
            vector(&[5, 8, 11])
        );
        assert!(vector(&[2, 3]).subtract(&vector(&[1, 2, 3])).is_err());
    }

    #[test]
    fn test_scalar_multiply() {
        assert_eq!(vector(&[2, 3]).scalar_multiply(2), vector(&[4, 6]));
        assert_eq!(vector(&[1, 2, 3]).scalar_multiply(3), vector(&[3, 6, 9]));
        assert_eq!(vector(&[2, 4]).scalar_multiply(dec("0.5")), vector(&[1, 2]));
    }

    #[test]
    fn test_arithmetic_across_extreme_exponents() {
        let huge = Vector::new([dec("1e40"), dec("-7e300")]).unwrap();
        assert_eq!(
            huge.add(&huge).unwrap(),
            Vector::new([dec("2e40"), dec("-1.4e301")]).unwrap()
        );
        assert_eq!(
            huge.scalar_multiply(dec("1e-80")),
            Vector::new([dec("1e-40"), dec("-7e220")]).unwrap()
        );

        let tiny = Vector::new([dec("1e-15"), dec("3e-200")]).unwrap();
        assert_eq!(
            tiny.subtract(&tiny.scalar_multiply(2)).unwrap(),
            Vector::new([dec("-1e-15"), dec("-3e-200")]).unwrap()
        );
    }

    #[test]
    fn test_arithmetic_rounds_to_thirty_digits() {
        // 1 + 1e-40 needs 41 significant digits
        let sum = vector(&[1])
            .add(&Vector::new([dec("1e-40")]).unwrap())
            .unwrap();
        assert_eq!(sum, vector(&[1]));

        // 1 + 1e-29 fits in 30 digits and survives
        let sum = vector(&[1])
            .add(&Vector::new([dec("1e-29")]).unwrap())
            .unwrap();
        assert_eq!(sum[0], dec("1.00000000000000000000000000001"));
    }

    #[test]
    fn test_inputs_unchanged() {
        let a = vector(&[1, 2]);
        let b = vector(&[3, 4]);
        let _ = a.add(&b).unwrap();
        let _ = a.scalar_multiply(10);
        assert_eq!(a, vector(&[1, 2]));
        assert_eq!(b, vector(&[3, 4]));
    }

    #[test]
    fn test_equality_ignores_scale() {
        let a = Vector::new([dec("2.0"), dec("3")]).unwrap();
        assert_eq!(a, vector(&[2, 3]));
        assert_ne!(a, vector(&[2, 4]));
    }

    #[test]
    fn test_round_to_three() {
        let v = Vector::new([dec("1.23456"), dec("-0.98765"), dec("0.0025")]).unwrap();
        assert_eq!(
            v.round_to_three(),
            Vector::new([dec("1.235"), dec("-0.988"), dec("0.002")]).unwrap()
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(-vector(&[1, -2, 0]), vector(&[-1, 2, 0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(vector(&[2, 3]).to_string(), "Vector: (2, 3)");
        assert_eq!(vector(&[7]).to_string(), "Vector: (7)");
    }

    #[test]
    fn test_from_str() {
        let v: Vector = "1, 2.5, -3".parse().unwrap();
        assert_eq!(v, Vector::new([dec("1"), dec("2.5"), dec("-3")]).unwrap());

        let parenthesized: Vector = "(1, 2.5, -3)".parse().unwrap();
        assert_eq!(parenthesized, v);

        let displayed: Vector = v.to_string().parse().unwrap();
        assert_eq!(displayed, v);

        let extreme = Vector::new([dec("1e-15"), dec("4e120")]).unwrap();
        let reparsed: Vector = extreme.to_string().parse().unwrap();
        assert_eq!(reparsed, extreme);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<Vector, _> = "".parse();
        assert_eq!(result, Err(VectorError::InvalidArgument(InvalidArgument::Empty)));

        let result: Result<Vector, _> = "()".parse();
        assert!(result.is_err());

        let result: Result<Vector, _> = "1, x".parse();
        assert_eq!(
            result,
            Err(VectorError::InvalidArgument(InvalidArgument::NotNumeric {
                index: 1,
                value: "x".to_string()
            }))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let v = Vector::new([dec("1"), dec("2.5e-40")]).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let empty: Result<Vector, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
