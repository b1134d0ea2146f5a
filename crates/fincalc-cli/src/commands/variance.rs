use clap::Args;
use serde_json::Value;

use fincalc_core::variance::review::{self, BudgetReviewInput};

use crate::input;

/// Arguments for a budget-vs-actual review
#[derive(Args)]
pub struct BudgetReviewArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_budget_review(args: BudgetReviewArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let review_input: BudgetReviewInput = input::load(args.input.as_deref(), "budget review")?;
    let result = review::review_budget(&review_input)?;
    Ok(serde_json::to_value(result)?)
}
