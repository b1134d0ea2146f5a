use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::forecasting::regression::{identify_trend, TrendDirection};
use fincalc_core::forecasting::review::{self, ForecastInput};

use crate::input;

/// Arguments for a multi-method forecast
#[derive(Args)]
pub struct ForecastArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for trend classification
#[derive(Args)]
pub struct TrendArgs {
    /// Comma-separated observations in chronological order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<Decimal>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TrendOutput {
    trend: TrendDirection,
    observations: usize,
}

pub fn run_forecast(args: ForecastArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let forecast_input: ForecastInput = input::load(args.input.as_deref(), "forecast")?;
    let result = review::build_forecast(&forecast_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_trend(args: TrendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let output = TrendOutput {
        trend: identify_trend(&args.values),
        observations: args.values.len(),
    };
    Ok(serde_json::to_value(output)?)
}
