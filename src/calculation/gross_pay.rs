//! Gross-pay assembly per worker type.
//!
//! Validates the fields that matter for the worker type, derives base pay and
//! the hourly rate, values overtime, and sums everything into a
//! [`PayBreakdown`].

use rust_decimal::Decimal;

use crate::config::CalendarConfig;
use crate::error::EngineResult;
use crate::models::{PayBreakdown, PayrollField, RawInput, WorkerType};

use super::hourly_rate::calculate_hourly_rate;
use super::overtime::{MINUTES_PER_HOUR, calculate_overtime_pay};
use super::validation::{invalid, validate_amount, validate_integer};

/// Largest accepted value for the overtime minutes field.
pub const MAX_OVERTIME_MINUTES: u32 = MINUTES_PER_HOUR - 1;

/// Base pay and hourly rate for one worker type.
struct BasePay {
    base_pay: Decimal,
    hourly_rate: Decimal,
}

fn salaried_base_pay(input: &RawInput, calendar: &CalendarConfig) -> EngineResult<BasePay> {
    let salary = validate_amount(
        input.value_or_zero(PayrollField::BaseSalary),
        PayrollField::BaseSalary,
    )?;

    Ok(BasePay {
        base_pay: salary,
        hourly_rate: calculate_hourly_rate(
            salary,
            calendar.days_per_month,
            calendar.hours_per_day,
        ),
    })
}

fn hourly_base_pay(input: &RawInput) -> EngineResult<BasePay> {
    let hourly_rate = validate_amount(
        input.value_or_zero(PayrollField::HourlyRate),
        PayrollField::HourlyRate,
    )?;
    let hours_worked = validate_integer(
        input.value_or_zero(PayrollField::HoursWorked),
        PayrollField::HoursWorked,
        None,
    )?;

    let base_pay = hourly_rate
        .checked_mul(Decimal::from(hours_worked))
        .ok_or_else(|| invalid(PayrollField::HourlyRate))?;

    Ok(BasePay {
        base_pay,
        hourly_rate,
    })
}

fn daily_base_pay(input: &RawInput, calendar: &CalendarConfig) -> EngineResult<BasePay> {
    let daily_rate = validate_amount(
        input.value_or_zero(PayrollField::DailyRate),
        PayrollField::DailyRate,
    )?;
    let days_worked = validate_integer(
        input.value_or_zero(PayrollField::DaysWorked),
        PayrollField::DaysWorked,
        None,
    )?;

    let hourly_rate = if daily_rate > Decimal::ZERO && calendar.hours_per_day > 0 {
        daily_rate / Decimal::from(calendar.hours_per_day)
    } else {
        Decimal::ZERO
    };

    let base_pay = daily_rate
        .checked_mul(Decimal::from(days_worked))
        .ok_or_else(|| invalid(PayrollField::DailyRate))?;

    Ok(BasePay {
        base_pay,
        hourly_rate,
    })
}

/// Assembles gross pay for a worker.
///
/// Benefits, overtime hours and overtime minutes (at most 59) are validated
/// the same way for every worker type and default to zero when absent. The
/// type-specific fields are:
///
/// - [`WorkerType::Salaried`]: `salario_base`; the hourly rate is derived from
///   it with the calendar's days per month and hours per day.
/// - [`WorkerType::Hourly`]: `valor_hora` and `horas_trabalhadas`; base pay is
///   their product.
/// - [`WorkerType::Daily`]: `valor_diaria` and `dias_trabalhados`; base pay is
///   their product and the hourly rate is the daily rate over hours per day.
///
/// Overtime is valued at the derived hourly rate.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidField`] for the first field
/// that fails validation. No partial breakdown is produced. Amounts too large
/// to compute are reported as invalid against the field that pushed them over.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::config::CalendarConfig;
/// use payroll_engine::models::{PayrollField, RawInput, WorkerType};
/// use rust_decimal_macros::dec;
///
/// let input = RawInput::new()
///     .with(PayrollField::DailyRate, "100")
///     .with(PayrollField::DaysWorked, "22");
///
/// let breakdown =
///     calculate_gross_pay(&input, WorkerType::Daily, &CalendarConfig::default()).unwrap();
/// assert_eq!(breakdown.base_pay(), dec!(2200));
/// assert_eq!(breakdown.hourly_rate(), dec!(12.5));
/// assert_eq!(breakdown.gross_pay(), dec!(2200));
/// ```
pub fn calculate_gross_pay(
    input: &RawInput,
    worker_type: WorkerType,
    calendar: &CalendarConfig,
) -> EngineResult<PayBreakdown> {
    let benefits = validate_amount(
        input.value_or_zero(PayrollField::Benefits),
        PayrollField::Benefits,
    )?;
    let overtime_hours = validate_integer(
        input.value_or_zero(PayrollField::OvertimeHours),
        PayrollField::OvertimeHours,
        None,
    )?;
    let overtime_minutes = validate_integer(
        input.value_or_zero(PayrollField::OvertimeMinutes),
        PayrollField::OvertimeMinutes,
        Some(MAX_OVERTIME_MINUTES),
    )?;

    let BasePay {
        base_pay,
        hourly_rate,
    } = match worker_type {
        WorkerType::Salaried => salaried_base_pay(input, calendar)?,
        WorkerType::Hourly => hourly_base_pay(input)?,
        WorkerType::Daily => daily_base_pay(input, calendar)?,
    };

    let overtime_pay = calculate_overtime_pay(hourly_rate, overtime_hours, overtime_minutes)
        .ok_or_else(|| invalid(PayrollField::OvertimeHours))?;

    PayBreakdown::new(base_pay, benefits, overtime_pay, hourly_rate).ok_or_else(|| {
        match base_pay.checked_add(benefits) {
            None => invalid(PayrollField::Benefits),
            Some(_) => invalid(PayrollField::OvertimeHours),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn calendar() -> CalendarConfig {
        CalendarConfig::default()
    }

    fn error_message(result: EngineResult<PayBreakdown>) -> String {
        match result {
            Err(error @ EngineError::InvalidField { .. }) => error.to_string(),
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_salaried_without_overtime() {
        let input = RawInput::new()
            .with(PayrollField::BaseSalary, "3000")
            .with(PayrollField::Benefits, "0");

        let breakdown = calculate_gross_pay(&input, WorkerType::Salaried, &calendar()).unwrap();

        assert_eq!(breakdown.base_pay(), dec!(3000));
        assert_eq!(breakdown.hourly_rate(), dec!(12.5));
        assert_eq!(breakdown.overtime_pay(), Decimal::ZERO);
        assert_eq!(breakdown.gross_pay(), dec!(3000));
    }

    #[test]
    fn test_salaried_with_overtime_and_benefits() {
        let input = RawInput::new()
            .with(PayrollField::BaseSalary, "3000")
            .with(PayrollField::Benefits, "150.50")
            .with(PayrollField::OvertimeHours, "2")
            .with(PayrollField::OvertimeMinutes, "30");

        let breakdown = calculate_gross_pay(&input, WorkerType::Salaried, &calendar()).unwrap();

        assert_eq!(breakdown.overtime_pay(), dec!(31.25));
        assert_eq!(breakdown.gross_pay(), dec!(3181.75));
    }

    #[test]
    fn test_salaried_uses_calendar_days() {
        let input = RawInput::new().with(PayrollField::BaseSalary, "3100");
        let calendar = calendar().with_days_per_month(Some(31));

        let breakdown = calculate_gross_pay(&input, WorkerType::Salaried, &calendar).unwrap();

        assert_eq!(breakdown.hourly_rate(), dec!(12.5));
    }

    #[test]
    fn test_hourly_worker() {
        let input = RawInput::new()
            .with(PayrollField::HourlyRate, "20")
            .with(PayrollField::HoursWorked, "160");

        let breakdown = calculate_gross_pay(&input, WorkerType::Hourly, &calendar()).unwrap();

        assert_eq!(breakdown.base_pay(), dec!(3200));
        assert_eq!(breakdown.hourly_rate(), dec!(20));
        assert_eq!(breakdown.gross_pay(), dec!(3200));
    }

    #[test]
    fn test_hourly_worker_overtime_uses_own_rate() {
        let input = RawInput::new()
            .with(PayrollField::HourlyRate, "20")
            .with(PayrollField::HoursWorked, "160")
            .with(PayrollField::OvertimeHours, "10");

        let breakdown = calculate_gross_pay(&input, WorkerType::Hourly, &calendar()).unwrap();

        assert_eq!(breakdown.overtime_pay(), dec!(200));
        assert_eq!(breakdown.gross_pay(), dec!(3400));
    }

    #[test]
    fn test_daily_worker() {
        let input = RawInput::new()
            .with(PayrollField::DailyRate, "100")
            .with(PayrollField::DaysWorked, "22");

        let breakdown = calculate_gross_pay(&input, WorkerType::Daily, &calendar()).unwrap();

        assert_eq!(breakdown.base_pay(), dec!(2200));
        assert_eq!(breakdown.hourly_rate(), dec!(12.5));
    }

    #[test]
    fn test_daily_worker_zero_rate_has_zero_hourly_rate() {
        let input = RawInput::new()
            .with(PayrollField::DailyRate, "0")
            .with(PayrollField::DaysWorked, "22")
            .with(PayrollField::OvertimeHours, "5");

        let breakdown = calculate_gross_pay(&input, WorkerType::Daily, &calendar()).unwrap();

        assert_eq!(breakdown.hourly_rate(), Decimal::ZERO);
        assert_eq!(breakdown.overtime_pay(), Decimal::ZERO);
        assert_eq!(breakdown.gross_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let breakdown =
            calculate_gross_pay(&RawInput::new(), WorkerType::Salaried, &calendar()).unwrap();

        assert_eq!(breakdown.gross_pay(), Decimal::ZERO);
        assert_eq!(breakdown.hourly_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_fields_of_other_types_are_ignored() {
        let input = RawInput::new()
            .with(PayrollField::BaseSalary, "3000")
            .with(PayrollField::HourlyRate, "not read");

        assert!(calculate_gross_pay(&input, WorkerType::Salaried, &calendar()).is_ok());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let input = RawInput::new().with(PayrollField::BaseSalary, "-3000");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Salaried, &calendar())),
            "Salário base não pode ser negativo."
        );
    }

    #[test]
    fn test_non_numeric_hours_are_rejected() {
        let input = RawInput::new()
            .with(PayrollField::HourlyRate, "20")
            .with(PayrollField::HoursWorked, "cento e sessenta");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Hourly, &calendar())),
            "Horas trabalhadas inválido."
        );
    }

    #[test]
    fn test_overtime_minutes_above_59_are_rejected() {
        let input = RawInput::new()
            .with(PayrollField::BaseSalary, "3000")
            .with(PayrollField::OvertimeMinutes, "60");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Salaried, &calendar())),
            "Minutos extras não pode ser maior que 59."
        );
    }

    #[test]
    fn test_invalid_benefits_are_rejected_for_every_type() {
        let input = RawInput::new().with(PayrollField::Benefits, "abc");

        for worker_type in [WorkerType::Salaried, WorkerType::Hourly, WorkerType::Daily] {
            assert_eq!(
                error_message(calculate_gross_pay(&input, worker_type, &calendar())),
                "Benefícios inválido."
            );
        }
    }

    #[test]
    fn test_hourly_base_pay_overflow_is_rejected() {
        let input = RawInput::new()
            .with(PayrollField::HourlyRate, "79228162514264337593543950335")
            .with(PayrollField::HoursWorked, "2");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Hourly, &calendar())),
            "Valor da hora inválido."
        );
    }

    #[test]
    fn test_daily_base_pay_overflow_is_rejected() {
        let input = RawInput::new()
            .with(PayrollField::DailyRate, Decimal::MAX)
            .with(PayrollField::DaysWorked, "22");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Daily, &calendar())),
            "Valor da diária inválido."
        );
    }

    #[test]
    fn test_benefits_overflowing_gross_are_rejected() {
        let input = RawInput::new()
            .with(PayrollField::BaseSalary, Decimal::MAX)
            .with(PayrollField::Benefits, "1");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Salaried, &calendar())),
            "Benefícios inválido."
        );
    }

    #[test]
    fn test_overtime_overflowing_gross_is_rejected() {
        let input = RawInput::new()
            .with(PayrollField::BaseSalary, Decimal::MAX)
            .with(PayrollField::OvertimeHours, "1");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Salaried, &calendar())),
            "Horas extras inválido."
        );
    }

    #[test]
    fn test_overtime_pay_overflow_is_rejected() {
        let input = RawInput::new()
            .with(PayrollField::HourlyRate, Decimal::MAX)
            .with(PayrollField::HoursWorked, "0")
            .with(PayrollField::OvertimeHours, "2");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Hourly, &calendar())),
            "Horas extras inválido."
        );
    }

    #[test]
    fn test_first_failure_is_reported() {
        let input = RawInput::new()
            .with(PayrollField::Benefits, "-1")
            .with(PayrollField::OvertimeHours, "-1");

        assert_eq!(
            error_message(calculate_gross_pay(&input, WorkerType::Salaried, &calendar())),
            "Benefícios não pode ser negativo."
        );
    }
}
