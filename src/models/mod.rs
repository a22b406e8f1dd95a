//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod pay_breakdown;
mod payroll_summary;
mod raw_input;
mod worker_type;

pub use calculation_result::{AuditStep, AuditTrace, CalculationResult, PayrollCalculation};
pub use pay_breakdown::PayBreakdown;
pub use payroll_summary::{PayrollSummary, WithholdingResult};
pub use raw_input::{PayrollField, RawInput, RawValue};
pub use worker_type::WorkerType;
