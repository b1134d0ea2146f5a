use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Earned Value Management metrics.
///
/// Ratio fields are `None` when their denominator is zero, and absence
/// propagates: no CPI means no EAC, and no EAC means no ETC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvmMetrics {
    pub planned_value: Money,
    pub earned_value: Money,
    pub actual_cost: Money,
    /// EV - PV
    pub schedule_variance: Money,
    /// EV - AC
    pub cost_variance: Money,
    /// EV / PV
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_performance_index: Option<Decimal>,
    /// EV / AC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_performance_index: Option<Decimal>,
    /// BAC / CPI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_at_completion: Option<Money>,
    /// EAC - AC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_to_complete: Option<Money>,
}

/// Schedule and cost performance for a project at a status date.
pub fn evm_metrics(
    planned_value: Money,
    earned_value: Money,
    actual_cost: Money,
    budget_at_completion: Money,
) -> EvmMetrics {
    let spi = (!planned_value.is_zero()).then(|| earned_value / planned_value);
    let cpi = (!actual_cost.is_zero()).then(|| earned_value / actual_cost);
    let eac = cpi
        .filter(|c| !c.is_zero())
        .map(|c| budget_at_completion / c);
    let etc = eac.map(|e| e - actual_cost);

    EvmMetrics {
        planned_value,
        earned_value,
        actual_cost,
        schedule_variance: earned_value - planned_value,
        cost_variance: earned_value - actual_cost,
        schedule_performance_index: spi,
        cost_performance_index: cpi,
        estimate_at_completion: eac,
        estimate_to_complete: etc,
    }
}
