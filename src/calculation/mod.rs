//! Calculation logic for the payroll engine.
//!
//! This module contains the input validators, gross-pay assembly for each
//! worker type, hourly-rate and overtime valuation, the social-security and
//! income-tax withholdings, the severance-fund deposit, and the pipeline that
//! composes them into a payroll summary.

mod common;
mod gross_pay;
mod hourly_rate;
mod income_tax;
mod overtime;
mod payroll;
mod severance_fund;
mod social_security;
mod validation;

pub use common::{CURRENCY_DECIMAL_PLACES, round_half_up, round_half_up_to};
pub use gross_pay::{MAX_OVERTIME_MINUTES, calculate_gross_pay};
pub use hourly_rate::{DEFAULT_DAYS_PER_MONTH, DEFAULT_HOURS_PER_DAY, calculate_hourly_rate};
pub use income_tax::{
    INCOME_TAX_BRACKETS, IncomeTaxBracket, calculate_income_tax, income_tax_bracket,
};
pub use overtime::{MINUTES_PER_HOUR, calculate_overtime_pay};
pub use payroll::{calculate_payroll, calculate_withholdings, summarize_payroll};
pub use severance_fund::{SEVERANCE_FUND_RATE, calculate_severance_fund};
pub use social_security::{
    ContributionBracket, SOCIAL_SECURITY_BRACKETS, SOCIAL_SECURITY_CEILING,
    SOCIAL_SECURITY_CEILING_THRESHOLD, calculate_social_security,
};
pub use validation::{validate_amount, validate_integer};
