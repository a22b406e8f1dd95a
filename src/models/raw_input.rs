//! Raw, untyped calculation input.
//!
//! The input collector hands the engine a flat mapping from field key to
//! whatever the user typed. Nothing here is validated; see
//! [`crate::calculation::validate_amount`] and
//! [`crate::calculation::validate_integer`] for that.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recognised input field.
///
/// Each field has a stable key used in [`RawInput`] and a display label used
/// in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayrollField {
    /// Monthly salary of a salaried worker.
    BaseSalary,
    /// Hourly rate of an hourly worker.
    HourlyRate,
    /// Whole hours worked by an hourly worker.
    HoursWorked,
    /// Daily rate of a daily worker.
    DailyRate,
    /// Days worked by a daily worker.
    DaysWorked,
    /// Benefits added on top of base pay.
    Benefits,
    /// Whole overtime hours.
    OvertimeHours,
    /// Overtime minutes beyond the whole hours (0-59).
    OvertimeMinutes,
}

impl PayrollField {
    /// Every field, in form order.
    pub const ALL: [PayrollField; 8] = [
        PayrollField::BaseSalary,
        PayrollField::HourlyRate,
        PayrollField::HoursWorked,
        PayrollField::DailyRate,
        PayrollField::DaysWorked,
        PayrollField::Benefits,
        PayrollField::OvertimeHours,
        PayrollField::OvertimeMinutes,
    ];

    /// The key under which this field appears in a [`RawInput`].
    pub fn key(self) -> &'static str {
        match self {
            PayrollField::BaseSalary => "salario_base",
            PayrollField::HourlyRate => "valor_hora",
            PayrollField::HoursWorked => "horas_trabalhadas",
            PayrollField::DailyRate => "valor_diaria",
            PayrollField::DaysWorked => "dias_trabalhados",
            PayrollField::Benefits => "beneficios",
            PayrollField::OvertimeHours => "horas_extras",
            PayrollField::OvertimeMinutes => "minutos_extras",
        }
    }

    /// The label used when reporting a problem with this field.
    pub fn label(self) -> &'static str {
        match self {
            PayrollField::BaseSalary => "Salário base",
            PayrollField::HourlyRate => "Valor da hora",
            PayrollField::HoursWorked => "Horas trabalhadas",
            PayrollField::DailyRate => "Valor da diária",
            PayrollField::DaysWorked => "Dias trabalhados",
            PayrollField::Benefits => "Benefícios",
            PayrollField::OvertimeHours => "Horas extras",
            PayrollField::OvertimeMinutes => "Minutos extras",
        }
    }
}

/// A single untyped input value: a number, free text, or any other JSON value.
///
/// Numeric strings such as `"3000"` land in [`RawValue::Number`]; other
/// strings stay text. `null`, booleans, arrays and objects are kept as
/// [`RawValue::Other`] so the request still parses and the validators can
/// reject the field by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric value.
    Number(Decimal),
    /// Text as typed by the user.
    Text(String),
    /// Anything that is neither a number nor a string.
    Other(serde_json::Value),
}

impl RawValue {
    /// The value used for an absent optional field.
    pub const ZERO: RawValue = RawValue::Number(Decimal::ZERO);
}

static ABSENT: RawValue = RawValue::ZERO;

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Number(value)
    }
}

macro_rules! raw_value_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::Number(Decimal::from(value))
                }
            }
        )*
    };
}

raw_value_from_integer!(i32, i64, u32);

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// The raw field values for one calculation request.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollField, RawInput, RawValue};
///
/// let input = RawInput::new()
///     .with(PayrollField::BaseSalary, "3000")
///     .with(PayrollField::Benefits, 150);
///
/// assert_eq!(input.get(PayrollField::BaseSalary), Some(&RawValue::from("3000")));
/// assert_eq!(input.value_or_zero(PayrollField::OvertimeHours), &RawValue::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    values: HashMap<String, RawValue>,
}

impl RawInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the input with `field` set to `value`.
    pub fn with(mut self, field: PayrollField, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets `field` to `value`, replacing any previous value.
    pub fn insert(&mut self, field: PayrollField, value: impl Into<RawValue>) {
        self.values.insert(field.key().to_string(), value.into());
    }

    /// Returns the value supplied for `field`, if any.
    pub fn get(&self, field: PayrollField) -> Option<&RawValue> {
        self.values.get(field.key())
    }

    /// Returns the value supplied for `field`, or zero when it is absent.
    pub fn value_or_zero(&self, field: PayrollField) -> &RawValue {
        self.get(field).unwrap_or(&ABSENT)
    }

    /// Number of keys present, recognised or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no keys are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_field_keys_are_unique() {
        let mut keys: Vec<&str> = PayrollField::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), PayrollField::ALL.len());
    }

    #[test]
    fn test_labels_used_in_messages() {
        assert_eq!(PayrollField::Benefits.label(), "Benefícios");
        assert_eq!(PayrollField::OvertimeMinutes.label(), "Minutos extras");
        assert_eq!(PayrollField::DailyRate.label(), "Valor da diária");
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let json = r#"{
            "salario_base": "3000.50",
            "beneficios": 150,
            "horas_extras": "abc"
        }"#;

        let input: RawInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input.get(PayrollField::BaseSalary),
            Some(&RawValue::Number(dec!(3000.50)))
        );
        assert_eq!(
            input.get(PayrollField::Benefits),
            Some(&RawValue::Number(dec!(150)))
        );
        assert_eq!(
            input.get(PayrollField::OvertimeHours),
            Some(&RawValue::Text("abc".to_string()))
        );
    }

    #[test]
    fn test_deserialize_null_and_bool_values() {
        let json = r#"{"beneficios": null, "horas_extras": true}"#;

        let input: RawInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input.get(PayrollField::Benefits),
            Some(&RawValue::Other(serde_json::Value::Null))
        );
        assert_eq!(
            input.get(PayrollField::OvertimeHours),
            Some(&RawValue::Other(serde_json::Value::Bool(true)))
        );
    }

    #[test]
    fn test_absent_field_defaults_to_zero() {
        let input = RawInput::new();
        assert_eq!(input.value_or_zero(PayrollField::Benefits), &RawValue::ZERO);
        assert!(input.get(PayrollField::Benefits).is_none());
    }

    #[test]
    fn test_unknown_keys_are_kept_but_ignored() {
        let input: RawInput = [("salario_base", "3000"), ("apelido", "Zé")]
            .into_iter()
            .collect();
        assert_eq!(input.len(), 2);
        assert_eq!(
            input.get(PayrollField::BaseSalary),
            Some(&RawValue::from("3000"))
        );
    }
}
