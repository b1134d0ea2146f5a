use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::optimization::breakeven;
use fincalc_core::optimization::review::{self, AllocationInput};

use crate::input;

/// Arguments for budget allocation
#[derive(Args)]
pub struct AllocationArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for break-even analysis
#[derive(Args)]
pub struct BreakevenArgs {
    /// Total fixed costs for the period
    #[arg(long)]
    pub fixed_costs: Decimal,

    /// Selling price per unit
    #[arg(long)]
    pub price: Decimal,

    /// Variable cost per unit
    #[arg(long)]
    pub variable_cost: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct BreakevenOutput {
    break_even_units: Option<Decimal>,
    contribution_margin: Decimal,
    contribution_margin_ratio: Option<Decimal>,
}

pub fn run_allocation(args: AllocationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let allocation_input: AllocationInput = input::load(args.input.as_deref(), "allocation")?;
    let result = review::plan_allocation(&allocation_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_breakeven(args: BreakevenArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let output = BreakevenOutput {
        break_even_units: breakeven::break_even_point(
            args.fixed_costs,
            args.price,
            args.variable_cost,
        ),
        contribution_margin: breakeven::contribution_margin(args.price, args.variable_cost),
        contribution_margin_ratio: breakeven::contribution_margin_ratio(
            args.price,
            args.variable_cost,
        ),
    };
    Ok(serde_json::to_value(output)?)
}
