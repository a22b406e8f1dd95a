//! Income-tax (IRRF) withholding.
//!
//! Unlike the social-security contribution, exactly one bracket applies: the
//! whole base is taxed at that bracket's rate and the bracket's fixed deduction
//! is subtracted.

use rust_decimal::Decimal;

use super::common::round_half_up;

/// One row of the income-tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTaxBracket {
    /// Upper bound of the bracket (inclusive); `None` for the open top bracket.
    pub upper_bound: Option<Decimal>,
    /// Rate applied to the whole base.
    pub rate: Decimal,
    /// Amount subtracted after applying the rate.
    pub deduction: Decimal,
}

impl IncomeTaxBracket {
    fn contains(&self, base: Decimal) -> bool {
        self.upper_bound.is_none_or(|bound| base <= bound)
    }
}

/// The income-tax table, in ascending order. The last row is open-ended.
pub static INCOME_TAX_BRACKETS: [IncomeTaxBracket; 5] = [
    IncomeTaxBracket {
        upper_bound: Some(Decimal::from_parts(211200, 0, 0, false, 2)),
        rate: Decimal::ZERO,
        deduction: Decimal::ZERO,
    },
    IncomeTaxBracket {
        upper_bound: Some(Decimal::from_parts(282665, 0, 0, false, 2)),
        rate: Decimal::from_parts(75, 0, 0, false, 3),
        deduction: Decimal::from_parts(15840, 0, 0, false, 2),
    },
    IncomeTaxBracket {
        upper_bound: Some(Decimal::from_parts(375105, 0, 0, false, 2)),
        rate: Decimal::from_parts(15, 0, 0, false, 2),
        deduction: Decimal::from_parts(37040, 0, 0, false, 2),
    },
    IncomeTaxBracket {
        upper_bound: Some(Decimal::from_parts(466468, 0, 0, false, 2)),
        rate: Decimal::from_parts(225, 0, 0, false, 3),
        deduction: Decimal::from_parts(65173, 0, 0, false, 2),
    },
    IncomeTaxBracket {
        upper_bound: None,
        rate: Decimal::from_parts(275, 0, 0, false, 3),
        deduction: Decimal::from_parts(88496, 0, 0, false, 2),
    },
];

/// Returns the bracket that applies to `base`.
pub fn income_tax_bracket(base: Decimal) -> &'static IncomeTaxBracket {
    INCOME_TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.contains(base))
        .unwrap_or(&INCOME_TAX_BRACKETS[INCOME_TAX_BRACKETS.len() - 1])
}

/// Calculates the income-tax withholding for a taxable base.
///
/// The base is gross pay minus the social-security contribution. The matching
/// bracket's `rate x base - deduction` is floored at zero and rounded to 2
/// decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_income_tax(dec!(2000)), dec!(0));
/// // 2739.09 x 7.5% - 158.40
/// assert_eq!(calculate_income_tax(dec!(2739.09)), dec!(47.03));
/// ```
pub fn calculate_income_tax(base: Decimal) -> Decimal {
    let bracket = income_tax_bracket(base);
    let tax = bracket.rate * base - bracket.deduction;

    round_half_up(tax.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_only_last_bracket_is_open() {
        let open: Vec<_> = INCOME_TAX_BRACKETS
            .iter()
            .filter(|b| b.upper_bound.is_none())
            .collect();
        assert_eq!(open.len(), 1);
        assert!(INCOME_TAX_BRACKETS[4].upper_bound.is_none());
    }

    #[test]
    fn test_exempt_bracket() {
        assert_eq!(calculate_income_tax(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_income_tax(dec!(2024.68)), Decimal::ZERO);
        assert_eq!(calculate_income_tax(dec!(2112.00)), Decimal::ZERO);
    }

    #[test]
    fn test_just_above_exemption_is_near_zero() {
        // 2112.01 x 7.5% - 158.40 = 0.00075
        assert_eq!(calculate_income_tax(dec!(2112.01)), dec!(0.00));
    }

    #[test]
    fn test_second_bracket_upper_bound() {
        // 2826.65 x 7.5% - 158.40 = 53.59875
        assert_eq!(calculate_income_tax(dec!(2826.65)), dec!(53.60));
    }

    #[test]
    fn test_third_bracket() {
        // 2915.09 x 15% - 370.40 = 66.8635
        assert_eq!(calculate_income_tax(dec!(2915.09)), dec!(66.86));
    }

    #[test]
    fn test_fourth_bracket_upper_bound() {
        // 4664.68 x 22.5% - 651.73 = 397.823
        assert_eq!(calculate_income_tax(dec!(4664.68)), dec!(397.82));
    }

    #[test]
    fn test_open_bracket() {
        // 5000 x 27.5% - 884.96
        assert_eq!(calculate_income_tax(dec!(5000)), dec!(490.04));
        // 9122.76 x 27.5% - 884.96 = 1623.799
        assert_eq!(calculate_income_tax(dec!(9122.76)), dec!(1623.80));
    }

    #[test]
    fn test_exactly_one_bracket_is_selected() {
        assert_eq!(income_tax_bracket(dec!(2826.65)).rate, dec!(0.075));
        assert_eq!(income_tax_bracket(dec!(2826.66)).rate, dec!(0.15));
        assert_eq!(income_tax_bracket(dec!(1000000)).rate, dec!(0.275));
    }

    #[test]
    fn test_never_negative() {
        assert!(calculate_income_tax(dec!(-100)) >= Decimal::ZERO);
        assert!(calculate_income_tax(dec!(0.01)) >= Decimal::ZERO);
    }
}
