use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::discounting::{
    irr, npv, payback_period, DEFAULT_IRR_MAX_ITERATIONS, DEFAULT_IRR_TOLERANCE,
};
use super::returns::{profitability_index, roi};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::FinCalcResult;

fn default_max_iterations() -> u32 {
    DEFAULT_IRR_MAX_ITERATIONS
}

fn default_tolerance() -> Decimal {
    DEFAULT_IRR_TOLERANCE
}

/// Input for a capital investment appraisal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Cash flows by period; period 0 is the (negative) initial outlay
    pub cash_flows: Vec<Money>,
    /// Discount rate for NPV (0.08 = 8%)
    pub discount_rate: Rate,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
}

/// Appraisal output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOutput {
    pub initial_investment: Money,
    pub npv: Option<Money>,
    /// Present value of the flows after period 0
    pub pv_of_future_flows: Option<Money>,
    pub irr_pct: Option<Percent>,
    /// Periods after the outlay until it is recovered (undiscounted)
    pub payback_period: Option<u32>,
    pub profitability_index: Option<Decimal>,
    /// Undiscounted net gain over the outlay
    pub roi_pct: Option<Percent>,
    pub total_undiscounted_inflows: Money,
}

/// Appraise a project from its period cash flows: NPV, IRR, payback,
/// profitability index and simple ROI.
pub fn appraise_investment(
    input: &InvestmentInput,
) -> FinCalcResult<ComputationOutput<InvestmentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let Some((first, future)) = input.cash_flows.split_first() else {
        return Err(FinCalcError::InsufficientData(
            "Investment appraisal requires at least one cash flow".into(),
        ));
    };
    if input.discount_rate <= Decimal::NEGATIVE_ONE {
        return Err(FinCalcError::InvalidInput {
            field: "discount_rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }
    if input.tolerance <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "tolerance".into(),
            reason: "IRR tolerance must be positive".into(),
        });
    }
    if *first > Decimal::ZERO {
        warnings.push("Period 0 cash flow is positive; expected an outlay".into());
    }

    let initial_investment = -*first;
    let total_undiscounted_inflows: Money = future.iter().sum();

    let npv_value = npv(input.discount_rate, &input.cash_flows);
    // Period 0 is undiscounted, so backing it out leaves the PV of the rest.
    let pv_of_future_flows = npv_value.map(|v| v - *first);
    if npv_value.is_none() {
        warnings.push("NPV overflowed decimal precision".into());
    }

    let irr_pct = irr(&input.cash_flows, input.max_iterations, input.tolerance);
    if irr_pct.is_none() {
        warnings.push(format!(
            "IRR did not converge within {} iterations",
            input.max_iterations
        ));
    }

    let payback = payback_period(initial_investment, future);
    if payback.is_none() {
        warnings.push("Initial investment is never recovered".into());
    }

    let pi = pv_of_future_flows.and_then(|pv| profitability_index(pv, initial_investment));
    let roi_pct = roi(total_undiscounted_inflows - initial_investment, initial_investment);
    if initial_investment.is_zero() {
        warnings.push("No initial outlay; profitability index and ROI are undefined".into());
    }

    let output = InvestmentOutput {
        initial_investment,
        npv: npv_value,
        pv_of_future_flows,
        irr_pct,
        payback_period: payback,
        profitability_index: pi,
        roi_pct,
        total_undiscounted_inflows,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Capital Investment Appraisal (NPV, Newton-Raphson IRR, Payback, PI)",
        &serde_json::json!({
            "periods": input.cash_flows.len(),
            "discount_rate": input.discount_rate.to_string(),
            "max_iterations": input.max_iterations,
            "tolerance": input.tolerance.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_input() -> InvestmentInput {
        InvestmentInput {
            cash_flows: vec![dec!(-1000), dec!(500), dec!(500), dec!(500)],
            discount_rate: dec!(0.10),
            max_iterations: DEFAULT_IRR_MAX_ITERATIONS,
            tolerance: DEFAULT_IRR_TOLERANCE,
        }
    }

    #[test]
    fn test_appraisal_metrics() {
        let result = appraise_investment(&sample_input()).unwrap();
        let out = &result.result;
        assert_eq!(out.initial_investment, dec!(1000));
        assert_eq!(out.total_undiscounted_inflows, dec!(1500));
        assert_eq!(out.payback_period, Some(2));
        assert_eq!(out.roi_pct, Some(dec!(50)));
        // 500/1.1 + 500/1.21 + 500/1.331 = 1243.4260...
        let pv = out.pv_of_future_flows.unwrap();
        assert!((pv - dec!(1243.4260)).abs() < dec!(0.0001));
        assert_eq!(out.npv.unwrap(), pv - dec!(1000));
        let pi = out.profitability_index.unwrap();
        assert!((pi - dec!(1.2434)).abs() < dec!(0.0001));
        let irr_pct = out.irr_pct.unwrap();
        assert!(irr_pct > dec!(23.3) && irr_pct < dec!(23.4));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_appraisal_never_recovered() {
        let mut input = sample_input();
        input.cash_flows = vec![dec!(-1000), dec!(100), dec!(100)];
        let result = appraise_investment(&input).unwrap();
        assert_eq!(result.result.payback_period, None);
        assert!(result.result.npv.unwrap() < Decimal::ZERO);
        assert!(result.warnings.iter().any(|w| w.contains("never recovered")));
    }

    #[test]
    fn test_appraisal_irr_failure_is_warning() {
        let mut input = sample_input();
        input.max_iterations = 1;
        let result = appraise_investment(&input).unwrap();
        assert_eq!(result.result.irr_pct, None);
        assert!(result.warnings.iter().any(|w| w.contains("IRR did not converge")));
    }

    #[test]
    fn test_appraisal_rejects_total_loss_rate() {
        let mut input = sample_input();
        input.discount_rate = dec!(-1);
        assert!(matches!(
            appraise_investment(&input),
            Err(FinCalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_appraisal_requires_flows() {
        let mut input = sample_input();
        input.cash_flows.clear();
        assert!(matches!(
            appraise_investment(&input),
            Err(FinCalcError::InsufficientData(_))
        ));
    }
}
