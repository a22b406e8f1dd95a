//! Payroll summary and the full calculation pipeline.
//!
//! [`summarize_payroll`] composes the withholding calculators on top of gross
//! pay. [`calculate_payroll`] runs the whole pipeline for one request and
//! records an [`AuditStep`] per stage.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, PayBreakdown, PayrollCalculation, PayrollSummary, RawInput, WithholdingResult,
    WorkerType,
};

use super::gross_pay::calculate_gross_pay;
use super::income_tax::{calculate_income_tax, income_tax_bracket};
use super::severance_fund::{SEVERANCE_FUND_RATE, calculate_severance_fund};
use super::social_security::{SOCIAL_SECURITY_CEILING_THRESHOLD, calculate_social_security};

/// Calculates both withholdings for a gross pay.
///
/// Income tax is levied on gross pay minus the social-security contribution.
pub fn calculate_withholdings(gross_pay: Decimal) -> WithholdingResult {
    let social_security = calculate_social_security(gross_pay);
    let income_tax = calculate_income_tax(gross_pay - social_security);

    WithholdingResult {
        social_security,
        income_tax,
    }
}

/// Derives withholdings, severance fund and net pay from gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_payroll;
/// use rust_decimal_macros::dec;
///
/// let summary = summarize_payroll(dec!(3000));
/// assert_eq!(summary.social_security(), dec!(260.91));
/// assert_eq!(summary.income_tax(), dec!(47.03));
/// assert_eq!(summary.severance_fund(), dec!(240.00));
/// assert_eq!(summary.net_pay(), dec!(2692.06));
/// ```
pub fn summarize_payroll(gross_pay: Decimal) -> PayrollSummary {
    let withholdings = calculate_withholdings(gross_pay);
    let severance_fund = calculate_severance_fund(gross_pay);

    PayrollSummary::new(gross_pay, withholdings, severance_fund)
}

/// Runs the full payroll pipeline for one worker.
///
/// Validation failures from gross-pay assembly are returned unchanged; the
/// summary stage cannot fail.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::CalendarConfig;
/// use payroll_engine::models::{PayrollField, RawInput, WorkerType};
/// use rust_decimal_macros::dec;
///
/// let input = RawInput::new()
///     .with(PayrollField::HourlyRate, "20")
///     .with(PayrollField::HoursWorked, "160");
///
/// let calculation =
///     calculate_payroll(&input, WorkerType::Hourly, &CalendarConfig::default()).unwrap();
/// assert_eq!(calculation.summary.net_pay(), dec!(2848.23));
/// assert_eq!(calculation.audit_steps.len(), 5);
/// ```
pub fn calculate_payroll(
    input: &RawInput,
    worker_type: WorkerType,
    calendar: &CalendarConfig,
) -> EngineResult<PayrollCalculation> {
    let breakdown = calculate_gross_pay(input, worker_type, calendar)?;
    let summary = summarize_payroll(breakdown.gross_pay());

    debug!(
        worker_type = %worker_type,
        gross_pay = %breakdown.gross_pay(),
        net_pay = %summary.net_pay(),
        "Payroll calculated"
    );

    let audit_steps = vec![
        gross_pay_step(1, worker_type, calendar, &breakdown),
        social_security_step(2, &summary),
        income_tax_step(3, &summary),
        severance_fund_step(4, &summary),
        net_pay_step(5, &summary),
    ];

    Ok(PayrollCalculation {
        worker_type,
        breakdown,
        summary,
        audit_steps,
    })
}

fn gross_pay_step(
    step_number: u32,
    worker_type: WorkerType,
    calendar: &CalendarConfig,
    breakdown: &PayBreakdown,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay Assembly".to_string(),
        legal_ref: "CLT arts. 59, 64 and 457".to_string(),
        input: serde_json::json!({
            "worker_type": worker_type,
            "days_per_month": calendar.days_per_month,
            "hours_per_day": calendar.hours_per_day
        }),
        output: serde_json::json!({
            "base_pay": breakdown.base_pay().normalize().to_string(),
            "benefits": breakdown.benefits().normalize().to_string(),
            "overtime_pay": breakdown.overtime_pay().normalize().to_string(),
            "hourly_rate": breakdown.hourly_rate().normalize().to_string(),
            "gross_pay": breakdown.gross_pay().normalize().to_string()
        }),
        reasoning: format!(
            "{} gross pay: {} base + {} benefits + {} overtime = {}",
            worker_type,
            breakdown.base_pay().normalize(),
            breakdown.benefits().normalize(),
            breakdown.overtime_pay().normalize(),
            breakdown.gross_pay().normalize()
        ),
    }
}

fn social_security_step(step_number: u32, summary: &PayrollSummary) -> AuditStep {
    let gross_pay = summary.gross_pay();
    let at_ceiling = gross_pay > SOCIAL_SECURITY_CEILING_THRESHOLD;

    let reasoning = if at_ceiling {
        format!(
            "Gross pay {} exceeds {}: fixed ceiling of {} applies",
            gross_pay.normalize(),
            SOCIAL_SECURITY_CEILING_THRESHOLD,
            summary.social_security()
        )
    } else {
        format!(
            "Progressive brackets applied to {}: contribution {}",
            gross_pay.normalize(),
            summary.social_security()
        )
    };

    AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security (INSS)".to_string(),
        legal_ref: "Lei 8.212/1991, art. 20; EC 103/2019, art. 28".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "social_security": summary.social_security().to_string(),
            "ceiling_applied": at_ceiling
        }),
        reasoning,
    }
}

fn income_tax_step(step_number: u32, summary: &PayrollSummary) -> AuditStep {
    let base = summary.gross_pay() - summary.social_security();
    let bracket = income_tax_bracket(base);

    AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax (IRRF)".to_string(),
        legal_ref: "Lei 7.713/1988, art. 7".to_string(),
        input: serde_json::json!({
            "taxable_base": base.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": bracket.rate.normalize().to_string(),
            "deduction": bracket.deduction.normalize().to_string(),
            "income_tax": summary.income_tax().to_string()
        }),
        reasoning: format!(
            "{} x {} - {} = {} (floored at zero)",
            base.normalize(),
            bracket.rate.normalize(),
            bracket.deduction.normalize(),
            summary.income_tax()
        ),
    }
}

fn severance_fund_step(step_number: u32, summary: &PayrollSummary) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "Severance Fund (FGTS)".to_string(),
        legal_ref: "Lei 8.036/1990, art. 15".to_string(),
        input: serde_json::json!({
            "gross_pay": summary.gross_pay().normalize().to_string(),
            "rate": SEVERANCE_FUND_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "severance_fund": summary.severance_fund().to_string()
        }),
        reasoning: format!(
            "{} x {} = {} (employer deposit, not deducted)",
            summary.gross_pay().normalize(),
            SEVERANCE_FUND_RATE.normalize(),
            summary.severance_fund()
        ),
    }
}

fn net_pay_step(step_number: u32, summary: &PayrollSummary) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        legal_ref: "CLT art. 462".to_string(),
        input: serde_json::json!({
            "gross_pay": summary.gross_pay().normalize().to_string(),
            "social_security": summary.social_security().to_string(),
            "income_tax": summary.income_tax().to_string()
        }),
        output: serde_json::json!({
            "net_pay": summary.net_pay().normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} - {} = {}",
            summary.gross_pay().normalize(),
            summary.social_security(),
            summary.income_tax(),
            summary.net_pay().normalize()
        ),
    }
}
