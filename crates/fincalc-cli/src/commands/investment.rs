use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::investment::discounting::{self, DEFAULT_IRR_MAX_ITERATIONS, DEFAULT_IRR_TOLERANCE};
use fincalc_core::investment::review::{self, InvestmentInput};

use crate::input;

/// Arguments for a full investment appraisal
#[derive(Args)]
pub struct AppraisalArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for net present value
#[derive(Args)]
pub struct NpvArgs {
    /// Discount rate per period (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: Decimal,

    /// Comma-separated cash flows, period 0 first (e.g. "-1000,300,400,500")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub cash_flows: Vec<Decimal>,
}

/// Arguments for internal rate of return
#[derive(Args)]
pub struct IrrArgs {
    /// Comma-separated cash flows, period 0 first
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub cash_flows: Vec<Decimal>,

    /// Newton-Raphson iteration cap
    #[arg(long, default_value_t = DEFAULT_IRR_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Convergence tolerance on |NPV|
    #[arg(long, default_value_t = DEFAULT_IRR_TOLERANCE)]
    pub tolerance: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct NpvOutput {
    npv: Option<Decimal>,
    discount_rate: Decimal,
    num_periods: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct IrrOutput {
    irr_pct: Option<Decimal>,
    converged: bool,
    num_periods: usize,
}

pub fn run_appraisal(args: AppraisalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let appraisal_input: InvestmentInput = input::load(args.input.as_deref(), "investment")?;
    let result = review::appraise_investment(&appraisal_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_npv(args: NpvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let output = NpvOutput {
        npv: discounting::npv(args.rate, &args.cash_flows),
        discount_rate: args.rate,
        num_periods: args.cash_flows.len(),
    };
    Ok(serde_json::to_value(output)?)
}

pub fn run_irr(args: IrrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.tolerance <= Decimal::ZERO {
        return Err("tolerance must be positive".into());
    }
    let irr_pct = discounting::irr(&args.cash_flows, args.max_iterations, args.tolerance);
    let output = IrrOutput {
        irr_pct,
        converged: irr_pct.is_some(),
        num_periods: args.cash_flows.len(),
    };
    Ok(serde_json::to_value(output)?)
}
