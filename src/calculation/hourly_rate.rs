//! Hourly-rate derivation from a monthly amount.

use rust_decimal::Decimal;

/// Days in the payroll month used when none is configured.
pub const DEFAULT_DAYS_PER_MONTH: u32 = 30;

/// Working hours per day used when none is configured.
pub const DEFAULT_HOURS_PER_DAY: u32 = 8;

/// Derives the hourly rate from a monthly pay amount.
///
/// Returns `monthly_pay / days_per_month / hours_per_day`, or zero when any of
/// the three is not positive. Zero is a defined result here, not an error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{
///     calculate_hourly_rate, DEFAULT_DAYS_PER_MONTH, DEFAULT_HOURS_PER_DAY,
/// };
/// use rust_decimal_macros::dec;
///
/// let rate = calculate_hourly_rate(dec!(3000), DEFAULT_DAYS_PER_MONTH, DEFAULT_HOURS_PER_DAY);
/// assert_eq!(rate, dec!(12.5));
///
/// assert_eq!(calculate_hourly_rate(dec!(3000), 0, 8), dec!(0));
/// ```
pub fn calculate_hourly_rate(
    monthly_pay: Decimal,
    days_per_month: u32,
    hours_per_day: u32,
) -> Decimal {
    if monthly_pay <= Decimal::ZERO || days_per_month == 0 || hours_per_day == 0 {
        return Decimal::ZERO;
    }

    let daily_pay = monthly_pay / Decimal::from(days_per_month);
    daily_pay / Decimal::from(hours_per_day)
}
