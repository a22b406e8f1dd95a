//! Withholdings and net pay.

use rust_decimal::Decimal;
use serde::Serialize;

/// The two amounts withheld from gross pay, each rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WithholdingResult {
    /// Social-security contribution (INSS).
    pub social_security: Decimal,
    /// Income-tax withholding (IRRF).
    pub income_tax: Decimal,
}

impl WithholdingResult {
    /// Sum of both withholdings.
    pub fn total(&self) -> Decimal {
        self.social_security + self.income_tax
    }
}

/// The monthly payroll outcome derived from gross pay.
///
/// Only the summary calculation in [`crate::calculation`] can build one, so
/// net pay always equals gross pay minus both withholdings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    gross_pay: Decimal,
    social_security: Decimal,
    income_tax: Decimal,
    severance_fund: Decimal,
    net_pay: Decimal,
}

impl PayrollSummary {
    pub(crate) fn new(
        gross_pay: Decimal,
        withholdings: WithholdingResult,
        severance_fund: Decimal,
    ) -> Self {
        Self {
            gross_pay,
            social_security: withholdings.social_security,
            income_tax: withholdings.income_tax,
            severance_fund,
            net_pay: gross_pay - withholdings.total(),
        }
    }

    /// Total pre-deduction earnings.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_pay
    }

    /// Social-security contribution (INSS).
    pub fn social_security(&self) -> Decimal {
        self.social_security
    }

    /// Income-tax withholding (IRRF).
    pub fn income_tax(&self) -> Decimal {
        self.income_tax
    }

    /// Both withholdings as a pair.
    pub fn withholdings(&self) -> WithholdingResult {
        WithholdingResult {
            social_security: self.social_security,
            income_tax: self.income_tax,
        }
    }

    /// Employer severance-fund deposit (FGTS). Informational, not deducted.
    pub fn severance_fund(&self) -> Decimal {
        self.severance_fund
    }

    /// Gross pay minus both withholdings.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }
}
