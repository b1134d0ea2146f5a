use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

fn pct(numerator: Decimal, denominator: Decimal) -> Option<Percent> {
    if denominator.is_zero() {
        None
    } else {
        Some(numerator / denominator * dec!(100))
    }
}

/// Return on investment: net gain over cost, as a percentage.
pub fn roi(net_gain: Money, cost: Money) -> Option<Percent> {
    pct(net_gain, cost)
}

/// Return on assets, as a percentage.
pub fn roa(net_income: Money, total_assets: Money) -> Option<Percent> {
    pct(net_income, total_assets)
}

/// Return on equity, as a percentage.
pub fn roe(net_income: Money, equity: Money) -> Option<Percent> {
    pct(net_income, equity)
}

/// Present value of future flows per unit of initial investment.
pub fn profitability_index(pv_of_future_flows: Money, initial_investment: Money) -> Option<Decimal> {
    if initial_investment.is_zero() {
        return None;
    }
    Some(pv_of_future_flows / initial_investment)
}
