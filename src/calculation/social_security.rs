//! Social-security (INSS) withholding.
//!
//! The employee contribution is progressive: each slice of gross pay is taxed
//! at the rate of the bracket it falls in, and the slices are summed. Above the
//! last bracket the contribution is a fixed ceiling.

use rust_decimal::Decimal;

use super::common::round_half_up;

/// One slice of the progressive contribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionBracket {
    /// Upper bound of the slice (inclusive).
    pub upper_bound: Decimal,
    /// Marginal rate applied to the slice.
    pub rate: Decimal,
}

/// The contribution table, in ascending order of upper bound.
pub static SOCIAL_SECURITY_BRACKETS: [ContributionBracket; 4] = [
    ContributionBracket {
        upper_bound: Decimal::from_parts(151200, 0, 0, false, 2),
        rate: Decimal::from_parts(75, 0, 0, false, 3),
    },
    ContributionBracket {
        upper_bound: Decimal::from_parts(254700, 0, 0, false, 2),
        rate: Decimal::from_parts(9, 0, 0, false, 2),
    },
    ContributionBracket {
        upper_bound: Decimal::from_parts(385600, 0, 0, false, 2),
        rate: Decimal::from_parts(12, 0, 0, false, 2),
    },
    ContributionBracket {
        upper_bound: Decimal::from_parts(750749, 0, 0, false, 2),
        rate: Decimal::from_parts(14, 0, 0, false, 2),
    },
];

/// Gross pay above which the contribution is [`SOCIAL_SECURITY_CEILING`].
pub const SOCIAL_SECURITY_CEILING_THRESHOLD: Decimal = Decimal::from_parts(750749, 0, 0, false, 2);

/// Fixed contribution for gross pay above the threshold.
///
/// This is the published ceiling, not the sum of the table at its top bound
/// (which comes to 874.84).
pub const SOCIAL_SECURITY_CEILING: Decimal = Decimal::from_parts(87724, 0, 0, false, 2);

/// Calculates the social-security withholding for a gross monthly pay.
///
/// Walks the bracket table in order, taxing each full slice below `gross_pay`
/// and the partial slice that contains it, then stops. Gross pay above
/// 7507.49 returns the fixed ceiling of 877.24 without walking the table. The
/// result is rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_security;
/// use rust_decimal_macros::dec;
///
/// // 1512.00 x 7.5% + 1035.00 x 9% + 453.00 x 12%
/// assert_eq!(calculate_social_security(dec!(3000)), dec!(260.91));
/// assert_eq!(calculate_social_security(dec!(10000)), dec!(877.24));
/// ```
pub fn calculate_social_security(gross_pay: Decimal) -> Decimal {
    if gross_pay > SOCIAL_SECURITY_CEILING_THRESHOLD {
        return SOCIAL_SECURITY_CEILING;
    }

    let mut contribution = Decimal::ZERO;
    let mut previous_bound = Decimal::ZERO;

    for bracket in &SOCIAL_SECURITY_BRACKETS {
        if gross_pay > bracket.upper_bound {
            contribution += (bracket.upper_bound - previous_bound) * bracket.rate;
            previous_bound = bracket.upper_bound;
        } else {
            contribution += (gross_pay - previous_bound) * bracket.rate;
            break;
        }
    }

    round_half_up(contribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_is_ascending() {
        for pair in SOCIAL_SECURITY_BRACKETS.windows(2) {
            assert!(pair[0].upper_bound < pair[1].upper_bound);
        }
    }

    #[test]
    fn test_table_constants() {
        assert_eq!(SOCIAL_SECURITY_BRACKETS[0].upper_bound, dec!(1512.00));
        assert_eq!(SOCIAL_SECURITY_BRACKETS[0].rate, dec!(0.075));
        assert_eq!(SOCIAL_SECURITY_BRACKETS[3].upper_bound, dec!(7507.49));
        assert_eq!(SOCIAL_SECURITY_BRACKETS[3].rate, dec!(0.14));
        assert_eq!(SOCIAL_SECURITY_CEILING, dec!(877.24));
    }

    #[test]
    fn test_zero_gross_pay() {
        assert_eq!(calculate_social_security(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_first_bracket_only() {
        // 1000.00 x 7.5%
        assert_eq!(calculate_social_security(dec!(1000)), dec!(75.00));
    }

    #[test]
    fn test_values_at_bracket_bounds() {
        assert_eq!(calculate_social_security(dec!(1512.00)), dec!(113.40));
        assert_eq!(calculate_social_security(dec!(2547.00)), dec!(206.55));
        assert_eq!(calculate_social_security(dec!(3856.00)), dec!(363.63));
        assert_eq!(calculate_social_security(dec!(7507.49)), dec!(874.84));
    }

    #[test]
    fn test_second_bracket() {
        // 113.40 + 688.00 x 9%
        assert_eq!(calculate_social_security(dec!(2200)), dec!(175.32));
    }

    #[test]
    fn test_third_bracket() {
        // 206.55 + 653.00 x 12%
        assert_eq!(calculate_social_security(dec!(3200)), dec!(284.91));
    }

    #[test]
    fn test_fourth_bracket() {
        // 363.63 + 1144.00 x 14%
        assert_eq!(calculate_social_security(dec!(5000)), dec!(523.79));
    }

    #[test]
    fn test_just_above_threshold_returns_ceiling() {
        assert_eq!(calculate_social_security(dec!(7507.50)), dec!(877.24));
    }

    #[test]
    fn test_ceiling_differs_from_table_top() {
        assert_ne!(
            calculate_social_security(SOCIAL_SECURITY_CEILING_THRESHOLD),
            SOCIAL_SECURITY_CEILING
        );
    }

    #[test]
    fn test_result_is_rounded_to_cents() {
        // 3031.25: 206.55 + 484.25 x 12% = 264.66
        assert_eq!(calculate_social_security(dec!(3031.25)), dec!(264.66));
        // 1000.01 x 7.5% = 75.00075
        assert_eq!(calculate_social_security(dec!(1000.01)), dec!(75.00));
    }
}
