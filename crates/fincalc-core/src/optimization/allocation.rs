use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// A claim on the budget with a minimum need and a priority rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub name: String,
    pub minimum_required: Money,
    /// Lower rank is served first
    pub priority: u32,
}

/// Amount granted to a named request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    pub amount: Money,
}

/// Split `total` in proportion to `weights`.
///
/// A zero weight sum yields an all-zero allocation of the same length.
pub fn proportional_allocation(total: Money, weights: &[Decimal]) -> Vec<Money> {
    let weight_sum: Decimal = weights.iter().sum();
    if weight_sum.is_zero() {
        return vec![Decimal::ZERO; weights.len()];
    }
    weights.iter().map(|w| total * w / weight_sum).collect()
}

/// Fund requests in priority order until the budget runs out.
///
/// Each request receives `min(minimum_required, remaining)`. Ties in priority
/// keep their input order. The result is in priority order, not input order.
pub fn priority_based_allocation(total: Money, items: &[AllocationRequest]) -> Vec<Allocation> {
    let mut ranked: Vec<&AllocationRequest> = items.iter().collect();
    ranked.sort_by_key(|item| item.priority);

    let mut remaining = total;
    ranked
        .into_iter()
        .map(|item| {
            let amount = item.minimum_required.min(remaining);
            remaining -= amount;
            Allocation {
                name: item.name.clone(),
                amount,
            }
        })
        .collect()
}
