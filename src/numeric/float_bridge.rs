// ============================================================================
// Float Bridge
// BigDecimal <-> f64 conversions for the transcendental steps
// ============================================================================
//
// Square root and inverse cosine have no closed decimal form. The operand is
// reduced to f64, the function is evaluated natively, and the result is
// promoted straight back to BigDecimal. Nothing else in the crate touches f64.
//
// f64 spans roughly 1e-308..1e308 while a BigDecimal exponent is unbounded, so
// the square root shifts its operand by an even power of ten into [1, 100)
// first and shifts the root back by half of it afterwards.

use super::errors::{NumericError, NumericResult};
use super::precision;
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit an angle is reported in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Reduce a decimal to f64.
#[inline]
pub fn to_f64(value: &BigDecimal) -> NumericResult<f64> {
    value
        .to_f64()
        .filter(|x| x.is_finite())
        .ok_or(NumericError::NotRepresentable)
}

/// Promote an f64 back to decimal through its shortest round-trip form.
/// NaN and infinities are rejected.
pub fn from_f64(value: f64) -> NumericResult<BigDecimal> {
    if !value.is_finite() {
        return Err(NumericError::NotRepresentable);
    }
    BigDecimal::from_str(&format!("{:e}", value)).map_err(|_| NumericError::NotRepresentable)
}

/// Square root evaluated in f64. Defined for non-negative input; sums of
/// squares are never negative, and anything at or below zero maps to zero.
///
/// A positive input always yields a positive root.
pub fn sqrt(value: &BigDecimal) -> BigDecimal {
    if *value <= BigDecimal::zero() {
        return BigDecimal::zero();
    }

    let half_shift = precision::leading_exponent(value).div_euclid(2);
    let mantissa = precision::scale_by_power_of_ten(value, -2 * half_shift);

    let root = match to_f64(&mantissa).and_then(|m| from_f64(m.sqrt())) {
        Ok(root) => root,
        // [1, 100) always fits an f64; fall back to the decimal root regardless
        Err(_) => mantissa.sqrt().unwrap_or_else(|| BigDecimal::from(1)),
    };

    precision::round(precision::scale_by_power_of_ten(&root, half_shift))
}

/// Inverse cosine evaluated in f64.
///
/// The caller is expected to have rounded `cosine` already. A value that still
/// falls outside `[-1, 1]` yields NaN and therefore `NotRepresentable`.
pub fn acos(cosine: &BigDecimal, unit: AngleUnit) -> NumericResult<BigDecimal> {
    let radians = to_f64(cosine)?.acos();
    match unit {
        AngleUnit::Radians => from_f64(radians),
        AngleUnit::Degrees => from_f64(radians.to_degrees()),
    }
}

/// π at the precision `acos` reports it, so `acos(-1) == pi()` holds exactly.
#[inline]
pub fn pi() -> NumericResult<BigDecimal> {
    from_f64(std::f64::consts::PI)
}

/// `1 / value`, rounded to the working precision.
pub fn reciprocal(value: &BigDecimal) -> NumericResult<BigDecimal> {
    if value.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    Ok(precision::round(BigDecimal::from(1) / value))
}

/// `sum(a_i * b_i)` over two equally long slices, each product and partial
/// sum rounded to the working precision.
pub fn sum_of_products(a: &[BigDecimal], b: &[BigDecimal]) -> BigDecimal {
    a.iter().zip(b).fold(BigDecimal::zero(), |acc, (x, y)| {
        precision::round(acc + precision::round(x * y))
    })
}
