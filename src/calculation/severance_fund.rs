//! Severance-fund (FGTS) deposit.

use rust_decimal::Decimal;

use super::common::round_half_up;

/// Share of gross pay the employer deposits in the severance fund (8%).
pub const SEVERANCE_FUND_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Calculates the employer's monthly severance-fund deposit.
///
/// The deposit is 8% of gross pay rounded to 2 decimal places. It is shown on
/// the report but not deducted from net pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_severance_fund;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_severance_fund(dec!(3031.25)), dec!(242.50));
/// ```
pub fn calculate_severance_fund(gross_pay: Decimal) -> Decimal {
    round_half_up(gross_pay * SEVERANCE_FUND_RATE)
}
