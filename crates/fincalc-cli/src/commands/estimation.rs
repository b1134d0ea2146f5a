use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::estimation::pert::{self, ConfidenceInterval};
use fincalc_core::estimation::review::{self, ProjectEstimateInput};

use crate::input;

/// Arguments for a project-level estimate
#[derive(Args)]
pub struct ProjectEstimateArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a single three-point estimate
#[derive(Args)]
pub struct PertArgs {
    /// Best-case value
    #[arg(long)]
    pub optimistic: Decimal,

    /// Most likely value
    #[arg(long)]
    pub most_likely: Decimal,

    /// Worst-case value
    #[arg(long)]
    pub pessimistic: Decimal,

    /// Confidence level for the interval (0.68, 0.95 or 0.99)
    #[arg(long, default_value = "0.95")]
    pub confidence: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct PertOutput {
    expected: Decimal,
    std_dev: Decimal,
    z_score: Decimal,
    interval: ConfidenceInterval,
}

pub fn run_project_estimate(
    args: ProjectEstimateArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let estimate_input: ProjectEstimateInput =
        input::load(args.input.as_deref(), "project estimate")?;
    let result = review::estimate_project(&estimate_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_pert(args: PertArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.optimistic > args.most_likely || args.most_likely > args.pessimistic {
        return Err("expected optimistic <= most-likely <= pessimistic".into());
    }
    let expected = pert::three_point_estimate(args.optimistic, args.most_likely, args.pessimistic);
    let std_dev = pert::three_point_standard_deviation(args.optimistic, args.pessimistic);
    let output = PertOutput {
        expected,
        std_dev,
        z_score: pert::z_score(args.confidence),
        interval: pert::confidence_interval(expected, std_dev, args.confidence),
    };
    Ok(serde_json::to_value(output)?)
}
