use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::allocation::{
    priority_based_allocation, proportional_allocation, Allocation, AllocationRequest,
};
use super::breakeven::{break_even_point, contribution_margin, contribution_margin_ratio};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How the budget is divided among items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AllocationMethod {
    /// Pro rata by weight
    Proportional,
    /// Minimums funded in priority order
    Priority,
}

/// A budget line competing for funds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationItem {
    pub name: String,
    /// Relative weight, used by the proportional method
    #[serde(default)]
    pub weight: Decimal,
    /// Minimum funding need, used by the priority method
    #[serde(default)]
    pub minimum_required: Money,
    /// Rank for the priority method; lower is funded first
    #[serde(default)]
    pub priority: u32,
}

/// Unit economics for the optional break-even block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub fixed_costs: Money,
    pub price: Money,
    pub variable_cost_per_unit: Money,
}

/// Input for a budget allocation plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationInput {
    pub total_budget: Money,
    pub method: AllocationMethod,
    pub items: Vec<AllocationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_economics: Option<UnitEconomics>,
}

/// Break-even figures for the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakevenSummary {
    pub contribution_margin: Money,
    /// Contribution margin over price
    pub contribution_margin_ratio: Option<Decimal>,
    pub break_even_units: Option<Decimal>,
    pub break_even_revenue: Option<Money>,
}

/// Allocation plan output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationOutput {
    /// Proportional plans keep input order; priority plans are in rank order
    pub allocations: Vec<Allocation>,
    pub allocated_total: Money,
    pub unallocated: Money,
    /// Items funded below their stated minimum
    pub underfunded: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakeven: Option<BreakevenSummary>,
}

// ---------------------------------------------------------------------------
// plan_allocation
// ---------------------------------------------------------------------------

/// Divide a budget across competing items and report what is left over.
pub fn plan_allocation(input: &AllocationInput) -> FinCalcResult<ComputationOutput<AllocationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.items.is_empty() {
        return Err(FinCalcError::InsufficientData(
            "Allocation requires at least one item".into(),
        ));
    }
    if input.total_budget < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "total_budget".into(),
            reason: "Budget cannot be negative".into(),
        });
    }
    if let Some(item) = input.items.iter().find(|i| i.weight < Decimal::ZERO) {
        return Err(FinCalcError::InvalidInput {
            field: format!("items[{}].weight", item.name),
            reason: "Weights cannot be negative".into(),
        });
    }
    if let Some(item) = input.items.iter().find(|i| i.minimum_required < Decimal::ZERO) {
        return Err(FinCalcError::InvalidInput {
            field: format!("items[{}].minimum_required", item.name),
            reason: "Minimum required cannot be negative".into(),
        });
    }

    let allocations: Vec<Allocation> = match input.method {
        AllocationMethod::Proportional => {
            let weights: Vec<Decimal> = input.items.iter().map(|i| i.weight).collect();
            if weights.iter().all(|w| w.is_zero()) {
                warnings.push("All weights are zero; nothing allocated".into());
            }
            input
                .items
                .iter()
                .zip(proportional_allocation(input.total_budget, &weights))
                .map(|(item, amount)| Allocation {
                    name: item.name.clone(),
                    amount,
                })
                .collect()
        }
        AllocationMethod::Priority => {
            let requests: Vec<AllocationRequest> = input
                .items
                .iter()
                .map(|i| AllocationRequest {
                    name: i.name.clone(),
                    minimum_required: i.minimum_required,
                    priority: i.priority,
                })
                .collect();
            priority_based_allocation(input.total_budget, &requests)
        }
    };

    let underfunded: Vec<String> = allocations
        .iter()
        .filter(|a| {
            input
                .items
                .iter()
                .find(|i| i.name == a.name)
                .is_some_and(|i| a.amount < i.minimum_required)
        })
        .map(|a| a.name.clone())
        .collect();
    if !underfunded.is_empty() {
        warnings.push(format!(
            "{} item(s) funded below their minimum: {}",
            underfunded.len(),
            underfunded.join(", ")
        ));
    }

    let allocated_total: Money = allocations.iter().map(|a| a.amount).sum();

    let breakeven = input.unit_economics.as_ref().map(|u| {
        let units = break_even_point(u.fixed_costs, u.price, u.variable_cost_per_unit);
        if units.is_none() {
            warnings.push("Price does not exceed variable cost; break-even is unreachable".into());
        }
        BreakevenSummary {
            contribution_margin: contribution_margin(u.price, u.variable_cost_per_unit),
            contribution_margin_ratio: contribution_margin_ratio(u.price, u.variable_cost_per_unit),
            break_even_units: units,
            break_even_revenue: units.map(|q| q * u.price),
        }
    });

    let output = AllocationOutput {
        allocations,
        allocated_total,
        unallocated: input.total_budget - allocated_total,
        underfunded,
        breakeven,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Budget Allocation (proportional or priority-ranked minimums)",
        &serde_json::json!({
            "total_budget": input.total_budget.to_string(),
            "method": input.method,
            "items": input.items.len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
