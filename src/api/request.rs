//! Request types for the payroll engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/report` endpoints.

use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::models::RawInput;

/// Request body for the `/calculate` and `/report` endpoints.
///
/// # Example
///
/// ```
/// use payroll_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{"worker_type": "horista", "fields": {"valor_hora": "20", "horas_trabalhadas": 160}}"#,
/// )
/// .unwrap();
/// assert_eq!(request.worker_type, "horista");
/// assert_eq!(request.fields.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Worker type tag, e.g. "Mensalista" or "hourly".
    pub worker_type: String,
    /// Overrides the configured days per month for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_month: Option<u32>,
    /// Raw field values keyed by field name (`salario_base`, `beneficios`, ...).
    #[serde(default)]
    pub fields: RawInput,
}

impl CalculationRequest {
    /// The calendar for this request: the configured one with any override applied.
    pub fn calendar(&self, configured: &CalendarConfig) -> CalendarConfig {
        configured.with_days_per_month(self.days_per_month)
    }
}
