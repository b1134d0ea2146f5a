use clap::Args;
use serde_json::Value;

use fincalc_core::cash_flow::review::{self, CashProjectionInput};

use crate::input;

/// Arguments for a cash position projection
#[derive(Args)]
pub struct CashProjectionArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_cash_projection(args: CashProjectionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let projection_input: CashProjectionInput =
        input::load(args.input.as_deref(), "cash projection")?;
    let result = review::project_cash_flows(&projection_input)?;
    Ok(serde_json::to_value(result)?)
}
