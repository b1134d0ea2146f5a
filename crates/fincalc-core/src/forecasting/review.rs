use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::regression::{identify_trend, linear_forecast, TrendDirection};
use super::smoothing::{exponential_smoothing, moving_average_forecast};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput};
use crate::FinCalcResult;

fn default_window_size() -> usize {
    3
}

fn default_alpha() -> Decimal {
    dec!(0.3)
}

/// Input for a side-by-side forecast of a historical series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInput {
    /// Observations in chronological order
    pub history: Vec<Decimal>,
    pub periods_ahead: usize,
    /// Moving-average window
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Exponential smoothing factor in [0, 1]
    #[serde(default = "default_alpha")]
    pub alpha: Decimal,
}

/// Forecast output from each method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOutput {
    pub trend: TrendDirection,
    pub last_observation: Decimal,
    /// Least-squares extrapolation, one value per future period
    pub linear: Vec<Decimal>,
    /// Flat moving-average level
    pub moving_average: Decimal,
    /// Flat exponentially smoothed level, one value per future period
    pub exponential_smoothing: Vec<Decimal>,
}

/// Run every forecasting method over the same history.
pub fn build_forecast(input: &ForecastInput) -> FinCalcResult<ComputationOutput<ForecastOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let Some(last_observation) = input.history.last().copied() else {
        return Err(FinCalcError::InsufficientData(
            "Forecast requires at least one historical observation".into(),
        ));
    };
    if input.alpha < Decimal::ZERO || input.alpha > Decimal::ONE {
        return Err(FinCalcError::InvalidInput {
            field: "alpha".into(),
            reason: "Smoothing factor must be between 0 and 1".into(),
        });
    }
    if input.periods_ahead == 0 {
        warnings.push("periods_ahead is zero; sequence forecasts are empty".into());
    }

    let linear = linear_forecast(&input.history, input.periods_ahead);
    if input.history.len() < 2 {
        warnings.push("Linear forecast needs at least two observations".into());
    }

    if input.window_size == 0 || input.history.len() < input.window_size {
        warnings.push(format!(
            "History of {} observations is shorter than the {}-period window; moving average reported as zero",
            input.history.len(),
            input.window_size
        ));
    }
    let moving_average =
        moving_average_forecast(&input.history, input.window_size, input.periods_ahead);

    let output = ForecastOutput {
        trend: identify_trend(&input.history),
        last_observation,
        linear,
        moving_average,
        exponential_smoothing: exponential_smoothing(
            &input.history,
            input.alpha,
            input.periods_ahead,
        ),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Linear Regression, Moving Average and Exponential Smoothing Forecast",
        &serde_json::json!({
            "observations": input.history.len(),
            "periods_ahead": input.periods_ahead,
            "window_size": input.window_size,
            "alpha": input.alpha.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
