//! Rounding helpers shared by the withholding and report code.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary results are rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a decimal value to two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(874.8386)), dec!(874.84));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_half_up_to(value, CURRENCY_DECIMAL_PLACES)
}

/// Rounds a decimal value to `decimal_places` using half-up rounding.
pub fn round_half_up_to(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}
