//! Calculation result models for the payroll engine.
//!
//! This module contains the [`CalculationResult`] type returned by the HTTP
//! shell, the in-process [`PayrollCalculation`] it is built from, and the
//! audit types that record each rule application.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayBreakdown, PayrollSummary, WorkerType};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute behind this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Everything the pipeline derives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollCalculation {
    /// The classification the calculation was run for.
    pub worker_type: WorkerType,
    /// Gross pay and its components.
    pub breakdown: PayBreakdown,
    /// Withholdings, severance fund and net pay.
    pub summary: PayrollSummary,
    /// One audit step per pipeline stage, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl PayrollCalculation {
    /// Hourly rate divided by 60, or zero when there is no hourly rate.
    pub fn per_minute_rate(&self) -> Decimal {
        let hourly_rate = self.breakdown.hourly_rate();
        if hourly_rate > Decimal::ZERO {
            hourly_rate / Decimal::from(60)
        } else {
            Decimal::ZERO
        }
    }
}

/// The complete result of a payroll calculation, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The classification the calculation was run for.
    pub worker_type: WorkerType,
    /// Gross pay and its components.
    pub breakdown: PayBreakdown,
    /// Withholdings, severance fund and net pay.
    pub summary: PayrollSummary,
    /// Hourly rate divided by 60.
    pub per_minute_rate: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Wraps a pipeline result with an identifier, timestamp and timing.
    pub fn from_calculation(calculation: PayrollCalculation, duration_us: u64) -> Self {
        let per_minute_rate = calculation.per_minute_rate();
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            worker_type: calculation.worker_type,
            breakdown: calculation.breakdown,
            summary: calculation.summary,
            per_minute_rate,
            audit_trace: AuditTrace {
                steps: calculation.audit_steps,
                duration_us,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WithholdingResult;
    use rust_decimal_macros::dec;

    fn create_sample_calculation(hourly_rate: Decimal) -> PayrollCalculation {
        PayrollCalculation {
            worker_type: WorkerType::Salaried,
            breakdown: PayBreakdown::new(dec!(3000), dec!(0), dec!(0), hourly_rate).unwrap(),
            summary: PayrollSummary::new(
                dec!(3000),
                WithholdingResult {
                    social_security: dec!(260.91),
                    income_tax: dec!(47.03),
                },
                dec!(240.00),
            ),
            audit_steps: vec![AuditStep {
                step_number: 1,
                rule_id: "gross_pay".to_string(),
                rule_name: "Gross Pay Assembly".to_string(),
                legal_ref: "CLT art. 457".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: "test".to_string(),
            }],
        }
    }

    #[test]
    fn test_per_minute_rate_divides_by_sixty() {
        let calculation = create_sample_calculation(dec!(12.50));
        assert_eq!(
            calculation.per_minute_rate().round_dp(4),
            dec!(0.2083)
        );
    }

    #[test]
    fn test_per_minute_rate_is_zero_without_hourly_rate() {
        let calculation = create_sample_calculation(Decimal::ZERO);
        assert_eq!(calculation.per_minute_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_result_carries_audit_steps_and_version() {
        let result = CalculationResult::from_calculation(create_sample_calculation(dec!(12.5)), 17);

        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.audit_trace.steps.len(), 1);
        assert_eq!(result.audit_trace.duration_us, 17);
        assert_eq!(result.worker_type, WorkerType::Salaried);
    }

    #[test]
    fn test_result_serialization() {
        let result = CalculationResult::from_calculation(create_sample_calculation(dec!(12.5)), 0);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["worker_type"], "salaried");
        assert_eq!(json["summary"]["net_pay"], "2692.06");
        assert_eq!(json["audit_trace"]["steps"][0]["rule_id"], "gross_pay");
    }
}
