//! Overtime valuation.

use rust_decimal::Decimal;

/// Minutes in an hour; overtime minutes are valued at `hourly_rate / 60`.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Values overtime worked at the plain hourly rate.
///
/// Returns `hours x hourly_rate + minutes x hourly_rate / 60`, or zero when the
/// hourly rate is not positive. Minutes are not range-checked here; input
/// validation caps them at 59. Returns `None` when the amount does not fit in
/// a [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// // 2h30 at 12.50/h
/// assert_eq!(calculate_overtime_pay(dec!(12.50), 2, 30), Some(dec!(31.25)));
/// assert_eq!(calculate_overtime_pay(dec!(0), 2, 30), Some(dec!(0)));
/// assert_eq!(calculate_overtime_pay(Decimal::MAX, 2, 0), None);
/// ```
pub fn calculate_overtime_pay(hourly_rate: Decimal, hours: u32, minutes: u32) -> Option<Decimal> {
    if hourly_rate <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let hours_pay = Decimal::from(hours).checked_mul(hourly_rate)?;
    let minutes_pay =
        Decimal::from(minutes).checked_mul(hourly_rate)? / Decimal::from(MINUTES_PER_HOUR);

    hours_pay.checked_add(minutes_pay)
}
