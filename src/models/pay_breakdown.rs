//! Gross pay breakdown.

use rust_decimal::Decimal;
use serde::Serialize;

/// The components of gross pay for one worker and month.
///
/// Gross pay is always derived from the other components and is never rounded
/// at this stage.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown::new(
///     Decimal::new(3000, 0),
///     Decimal::new(150, 0),
///     Decimal::new(3125, 2),
///     Decimal::new(1250, 2),
/// )
/// .unwrap();
/// assert_eq!(breakdown.gross_pay(), Decimal::new(318125, 2));
///
/// assert!(PayBreakdown::new(Decimal::MAX, Decimal::ONE, Decimal::ZERO, Decimal::ZERO).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayBreakdown {
    base_pay: Decimal,
    benefits: Decimal,
    overtime_pay: Decimal,
    gross_pay: Decimal,
    hourly_rate: Decimal,
}

impl PayBreakdown {
    /// Builds a breakdown, computing gross pay as base + benefits + overtime.
    ///
    /// Returns `None` when the sum does not fit in a [`Decimal`].
    pub fn new(
        base_pay: Decimal,
        benefits: Decimal,
        overtime_pay: Decimal,
        hourly_rate: Decimal,
    ) -> Option<Self> {
        let gross_pay = base_pay.checked_add(benefits)?.checked_add(overtime_pay)?;

        Some(Self {
            base_pay,
            benefits,
            overtime_pay,
            gross_pay,
            hourly_rate,
        })
    }

    /// Pay before benefits and overtime.
    pub fn base_pay(&self) -> Decimal {
        self.base_pay
    }

    /// Benefits added on top of base pay.
    pub fn benefits(&self) -> Decimal {
        self.benefits
    }

    /// Value of the overtime worked.
    pub fn overtime_pay(&self) -> Decimal {
        self.overtime_pay
    }

    /// Base pay + benefits + overtime pay.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_pay
    }

    /// The hourly rate the overtime was valued at.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }
}
