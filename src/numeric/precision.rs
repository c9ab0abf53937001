// ============================================================================
// Decimal Precision Context
// Significant-digit rounding applied after every arithmetic step
// ============================================================================
//
// Coordinates are `BigDecimal`s: arbitrary exponent range, so nothing
// underflows to zero or overflows. Results of arithmetic are rounded to
// SIGNIFICANT_DIGITS (half-even) so repeated operations cannot grow the digit
// count without bound. Construction keeps inputs exact.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};
use std::num::NonZeroU64;

/// Significant digits kept by every arithmetic result.
pub const SIGNIFICANT_DIGITS: NonZeroU64 = match NonZeroU64::new(30) {
    Some(digits) => digits,
    None => panic!("precision must be nonzero"),
};

/// Round to `SIGNIFICANT_DIGITS` significant digits, half-even.
#[inline]
pub fn round(value: BigDecimal) -> BigDecimal {
    if value.digits() <= SIGNIFICANT_DIGITS.get() {
        return value;
    }
    value.with_precision_round(SIGNIFICANT_DIGITS, RoundingMode::HalfEven)
}

/// Round to `places` digits after the decimal point, half-even.
#[inline]
pub fn round_places(value: &BigDecimal, places: u32) -> BigDecimal {
    value.with_scale_round(i64::from(places), RoundingMode::HalfEven)
}

/// `value × 10^exponent`, exact.
pub fn scale_by_power_of_ten(value: &BigDecimal, exponent: i64) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale - exponent)
}

/// Decimal exponent of the leading digit: 3 for 1234.5, -15 for 0.000000000000001.
///
/// Zero has no leading digit and reports 0.
pub fn leading_exponent(value: &BigDecimal) -> i64 {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits == BigInt::from(0) {
        return 0;
    }
    value.digits() as i64 - 1 - scale
}

/// Lift a `rust_decimal::Decimal` from an API boundary, exactly.
pub fn from_fixed(value: rust_decimal::Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}
