use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::flows::{cumulative_cash_flow, free_cash_flow, net_cash_flow, project_cash_position};
use super::ratios::{cash_flow_coverage_ratio, days_of_cash_on_hand, operating_cash_flow_ratio};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Operating figures for the liquidity ratios block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingFigures {
    pub operating_cash_flow: Money,
    pub capex: Money,
    /// Principal and interest due over the same horizon
    pub total_debt_service: Money,
    pub current_liabilities: Money,
    pub annual_operating_expenses: Money,
}

/// Input for a period-by-period cash projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashProjectionInput {
    pub starting_cash: Money,
    /// Inflows per period, in chronological order
    pub inflows: Vec<Money>,
    /// Outflows per period, in chronological order
    pub outflows: Vec<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating: Option<OperatingFigures>,
}

/// One projected period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedPeriod {
    /// 1-based period number
    pub period: usize,
    pub inflow: Money,
    pub outflow: Money,
    pub net: Money,
    pub cumulative_net: Money,
    pub closing_cash: Money,
}

/// Liquidity ratios derived from the operating figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityRatios {
    pub free_cash_flow: Money,
    pub cash_flow_coverage: Option<Decimal>,
    pub operating_cash_flow_ratio: Option<Decimal>,
    /// Based on the starting cash balance
    pub days_of_cash_on_hand: Option<Decimal>,
}

/// Cash projection output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashProjectionOutput {
    pub total_net_cash_flow: Money,
    pub ending_cash: Money,
    pub lowest_cash: Money,
    /// Period in which the lowest closing cash occurs
    pub lowest_cash_period: usize,
    /// First period whose closing cash is negative, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_shortfall_period: Option<usize>,
    pub periods: Vec<ProjectedPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratios: Option<LiquidityRatios>,
}

// ---------------------------------------------------------------------------
// project_cash_flows
// ---------------------------------------------------------------------------

/// Project closing cash period by period and flag any shortfall.
pub fn project_cash_flows(
    input: &CashProjectionInput,
) -> FinCalcResult<ComputationOutput<CashProjectionOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.inflows.is_empty() && input.outflows.is_empty() {
        return Err(FinCalcError::InsufficientData(
            "Cash projection requires at least one period of inflows or outflows".into(),
        ));
    }
    if input.inflows.len() != input.outflows.len() {
        warnings.push(format!(
            "Inflow series has {} periods and outflow series has {}; missing periods read as zero",
            input.inflows.len(),
            input.outflows.len()
        ));
    }

    let closing = project_cash_position(input.starting_cash, &input.inflows, &input.outflows);
    let nets: Vec<Money> = (0..closing.len())
        .map(|i| {
            let inflow = input.inflows.get(i).copied().unwrap_or(Decimal::ZERO);
            let outflow = input.outflows.get(i).copied().unwrap_or(Decimal::ZERO);
            inflow - outflow
        })
        .collect();
    let cumulative = cumulative_cash_flow(&nets);

    let periods: Vec<ProjectedPeriod> = closing
        .iter()
        .zip(cumulative.iter())
        .enumerate()
        .map(|(i, (closing_cash, cumulative_net))| ProjectedPeriod {
            period: i + 1,
            inflow: input.inflows.get(i).copied().unwrap_or(Decimal::ZERO),
            outflow: input.outflows.get(i).copied().unwrap_or(Decimal::ZERO),
            net: nets[i],
            cumulative_net: *cumulative_net,
            closing_cash: *closing_cash,
        })
        .collect();

    // closing is non-empty, guarded above
    let (lowest_idx, lowest_cash) = closing
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, c)| (i, *c))
        .unwrap_or((0, input.starting_cash));

    let first_shortfall_period = closing
        .iter()
        .position(|c| *c < Decimal::ZERO)
        .map(|i| i + 1);
    if let Some(p) = first_shortfall_period {
        warnings.push(format!("Cash balance turns negative in period {p}"));
    }

    let ratios = input.operating.as_ref().map(|op| {
        let ratios = LiquidityRatios {
            free_cash_flow: free_cash_flow(op.operating_cash_flow, op.capex),
            cash_flow_coverage: cash_flow_coverage_ratio(op.operating_cash_flow, op.total_debt_service),
            operating_cash_flow_ratio: operating_cash_flow_ratio(
                op.operating_cash_flow,
                op.current_liabilities,
            ),
            days_of_cash_on_hand: days_of_cash_on_hand(
                input.starting_cash,
                op.annual_operating_expenses,
            ),
        };
        if ratios.cash_flow_coverage.is_none() {
            warnings.push("No debt service; cash flow coverage is undefined".into());
        }
        if ratios.operating_cash_flow_ratio.is_none() {
            warnings.push("No current liabilities; operating cash flow ratio is undefined".into());
        }
        if ratios.days_of_cash_on_hand.is_none() {
            warnings.push("No operating expenses; days of cash on hand is undefined".into());
        }
        ratios
    });

    let output = CashProjectionOutput {
        total_net_cash_flow: net_cash_flow(&input.inflows, &input.outflows),
        ending_cash: closing.last().copied().unwrap_or(input.starting_cash),
        lowest_cash,
        lowest_cash_period: lowest_idx + 1,
        first_shortfall_period,
        periods,
        ratios,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Period-by-Period Cash Position Projection",
        &serde_json::json!({
            "starting_cash": input.starting_cash.to_string(),
            "periods": output.periods.len(),
            "has_operating_figures": input.operating.is_some(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
