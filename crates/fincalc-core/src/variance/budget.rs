use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// Budget-vs-actual classification against a tolerance band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VarianceStatus {
    Over,
    Under,
    OnTarget,
}

/// Actual minus budgeted. Positive means overspent.
pub fn variance(actual: Money, budgeted: Money) -> Money {
    actual - budgeted
}

/// Variance as a percentage of budget, or `None` when nothing was budgeted.
pub fn variance_percentage(actual: Money, budgeted: Money) -> Option<Percent> {
    if budgeted.is_zero() {
        return None;
    }
    Some((actual - budgeted) / budgeted * dec!(100))
}

/// Classify a variance. The tolerance boundary is inclusive: a variance whose
/// magnitude equals `tolerance` is still on target.
pub fn variance_status(actual: Money, budgeted: Money, tolerance: Money) -> VarianceStatus {
    let v = variance(actual, budgeted);
    if v.abs() <= tolerance {
        VarianceStatus::OnTarget
    } else if v > Decimal::ZERO {
        VarianceStatus::Over
    } else {
        VarianceStatus::Under
    }
}

/// Share of the budget consumed, as a percentage.
pub fn utilization_rate(spent: Money, budgeted: Money) -> Option<Percent> {
    if budgeted.is_zero() {
        return None;
    }
    Some(spent / budgeted * dec!(100))
}

/// Average spend per elapsed period.
///
/// Unlike the ratio functions above this returns zero, not `None`, when no
/// periods have elapsed. Callers depend on the zero.
pub fn burn_rate(total_spent: Money, periods_elapsed: u32) -> Money {
    if periods_elapsed == 0 {
        return Decimal::ZERO;
    }
    total_spent / Decimal::from(periods_elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_variance_sign() {
        assert_eq!(variance(dec!(120), dec!(100)), dec!(20));
        assert_eq!(variance(dec!(80), dec!(100)), dec!(-20));
    }

    #[test]
    fn test_variance_percentage_exact() {
        assert_eq!(variance_percentage(dec!(110), dec!(100)), Some(dec!(10)));
        assert_eq!(variance_percentage(dec!(75), dec!(300)), Some(dec!(-75)));
    }

    #[test]
    fn test_variance_percentage_zero_budget() {
        assert_eq!(variance_percentage(dec!(50), dec!(0)), None);
        assert_eq!(variance_percentage(dec!(0), dec!(0)), None);
    }

    #[test]
    fn test_variance_status_classification() {
        assert_eq!(variance_status(dec!(100), dec!(100), dec!(0)), VarianceStatus::OnTarget);
        assert_eq!(variance_status(dec!(110), dec!(100), dec!(5)), VarianceStatus::Over);
        assert_eq!(variance_status(dec!(90), dec!(100), dec!(5)), VarianceStatus::Under);
        assert_eq!(variance_status(dec!(103), dec!(100), dec!(5)), VarianceStatus::OnTarget);
    }

    #[test]
    fn test_variance_status_boundary_inclusive() {
        assert_eq!(variance_status(dec!(105), dec!(100), dec!(5)), VarianceStatus::OnTarget);
        assert_eq!(variance_status(dec!(95), dec!(100), dec!(5)), VarianceStatus::OnTarget);
        assert_eq!(variance_status(dec!(105.01), dec!(100), dec!(5)), VarianceStatus::Over);
    }

    #[test]
    fn test_utilization_rate() {
        assert_eq!(utilization_rate(dec!(250), dec!(1000)), Some(dec!(25)));
        assert_eq!(utilization_rate(dec!(250), dec!(0)), None);
    }

    #[test]
    fn test_burn_rate_zero_periods_is_zero() {
        assert_eq!(burn_rate(dec!(900), 0), Decimal::ZERO);
        assert_eq!(burn_rate(dec!(900), 3), dec!(300));
    }
}
