use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

/// Reserve of `risk_pct` percent on top of `base`.
pub fn contingency_reserve(base: Money, risk_pct: Percent) -> Money {
    base * risk_pct / dec!(100)
}

/// Sum of task costs plus a contingency reserve on that sum.
pub fn bottom_up_estimate(task_costs: &[Money], contingency_pct: Percent) -> Money {
    let base: Money = task_costs.iter().sum();
    base + contingency_reserve(base, contingency_pct)
}
