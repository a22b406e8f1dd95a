//! Input validation.
//!
//! Converts untyped [`RawValue`]s into non-negative amounts and counts. Every
//! failure is an [`EngineError::InvalidField`] whose message names the field,
//! so it can be shown to the user as is.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollField, RawValue};

pub(super) fn invalid(field: PayrollField) -> EngineError {
    EngineError::InvalidField {
        field: field.label().to_string(),
        message: "inválido.".to_string(),
    }
}

fn negative(field: PayrollField) -> EngineError {
    EngineError::InvalidField {
        field: field.label().to_string(),
        message: "não pode ser negativo.".to_string(),
    }
}

fn above_maximum(field: PayrollField, max: u32) -> EngineError {
    EngineError::InvalidField {
        field: field.label().to_string(),
        message: format!("não pode ser maior que {}.", max),
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Validates a whole, non-negative count such as hours, days or minutes.
///
/// Numbers must have no fractional part; text must be a plain integer once
/// surrounding whitespace is removed. When `max` is given, larger values are
/// rejected.
///
/// # Errors
///
/// Returns [`EngineError::InvalidField`] when the value is not a whole number
/// (or does not fit a `u32`), is negative, or exceeds `max`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_integer;
/// use payroll_engine::models::{PayrollField, RawValue};
///
/// let minutes =
///     validate_integer(&RawValue::from(" 45 "), PayrollField::OvertimeMinutes, Some(59));
/// assert_eq!(minutes.unwrap(), 45);
///
/// let error = validate_integer(&RawValue::from("60"), PayrollField::OvertimeMinutes, Some(59))
///     .unwrap_err();
/// assert_eq!(error.to_string(), "Minutos extras não pode ser maior que 59.");
/// ```
pub fn validate_integer(
    value: &RawValue,
    field: PayrollField,
    max: Option<u32>,
) -> EngineResult<u32> {
    let whole = match value {
        RawValue::Number(number) => {
            if !number.fract().is_zero() {
                return Err(invalid(field));
            }
            number.to_i64().ok_or_else(|| invalid(field))?
        }
        RawValue::Text(text) => text.trim().parse::<i64>().map_err(|_| invalid(field))?,
        RawValue::Other(_) => return Err(invalid(field)),
    };

    if whole < 0 {
        return Err(negative(field));
    }

    let whole = u32::try_from(whole).map_err(|_| invalid(field))?;

    match max {
        Some(max) if whole > max => Err(above_maximum(field, max)),
        _ => Ok(whole),
    }
}

/// Validates a non-negative monetary amount or rate.
///
/// Text may use plain (`"1234.56"`) or scientific (`"1.5e3"`) notation. There
/// is no upper bound.
///
/// # Errors
///
/// Returns [`EngineError::InvalidField`] when the value is not a number or is
/// negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_amount;
/// use payroll_engine::models::{PayrollField, RawValue};
/// use rust_decimal_macros::dec;
///
/// let salary = validate_amount(&RawValue::from("3000.50"), PayrollField::BaseSalary);
/// assert_eq!(salary.unwrap(), dec!(3000.50));
///
/// let error = validate_amount(&RawValue::from("-1"), PayrollField::Benefits).unwrap_err();
/// assert_eq!(error.to_string(), "Benefícios não pode ser negativo.");
/// ```
pub fn validate_amount(value: &RawValue, field: PayrollField) -> EngineResult<Decimal> {
    let amount = match value {
        RawValue::Number(number) => *number,
        RawValue::Text(text) => parse_decimal(text.trim()).ok_or_else(|| invalid(field))?,
        RawValue::Other(_) => return Err(invalid(field)),
    };

    if amount < Decimal::ZERO {
        return Err(negative(field));
    }

    Ok(amount)
}
