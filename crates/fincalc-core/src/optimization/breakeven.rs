use rust_decimal::Decimal;

use crate::types::Money;

/// Price less variable cost per unit.
pub fn contribution_margin(price: Money, variable_cost_per_unit: Money) -> Money {
    price - variable_cost_per_unit
}

/// Units needed to cover fixed costs. `None` when each unit loses money or
/// breaks even on its own, since no volume can then recover fixed costs.
pub fn break_even_point(fixed_costs: Money, price: Money, variable_cost_per_unit: Money) -> Option<Decimal> {
    let margin = contribution_margin(price, variable_cost_per_unit);
    if margin <= Decimal::ZERO {
        return None;
    }
    Some(fixed_costs / margin)
}

/// Share of revenue left after variable costs, as a ratio.
pub fn contribution_margin_ratio(revenue: Money, variable_costs: Money) -> Option<Decimal> {
    if revenue.is_zero() {
        return None;
    }
    Some((revenue - variable_costs) / revenue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_break_even_point() {
        // CM = 50 - 30 = 20, BE = 10000 / 20 = 500
        assert_eq!(break_even_point(dec!(10000), dec!(50), dec!(30)), Some(dec!(500)));
    }

    #[test]
    fn test_break_even_unreachable() {
        assert_eq!(break_even_point(dec!(1000), dec!(5), dec!(8)), None);
        assert_eq!(break_even_point(dec!(1000), dec!(5), dec!(5)), None);
    }

    #[test]
    fn test_contribution_margin() {
        assert_eq!(contribution_margin(dec!(50), dec!(30)), dec!(20));
    }

    #[test]
    fn test_contribution_margin_ratio() {
        assert_eq!(contribution_margin_ratio(dec!(2000), dec!(1200)), Some(dec!(0.4)));
        assert_eq!(contribution_margin_ratio(dec!(0), dec!(100)), None);
    }
}
