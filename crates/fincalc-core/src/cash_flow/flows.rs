use rust_decimal::Decimal;

use crate::types::Money;

/// Total inflows minus total outflows.
pub fn net_cash_flow(inflows: &[Money], outflows: &[Money]) -> Money {
    let total_in: Money = inflows.iter().sum();
    let total_out: Money = outflows.iter().sum();
    total_in - total_out
}

/// Running total of per-period net flows, one value per input period.
pub fn cumulative_cash_flow(net_flows: &[Money]) -> Vec<Money> {
    net_flows
        .iter()
        .scan(Decimal::ZERO, |running, cf| {
            *running += cf;
            Some(*running)
        })
        .collect()
}

/// Operating cash flow left after capital expenditure.
pub fn free_cash_flow(operating_cash_flow: Money, capex: Money) -> Money {
    operating_cash_flow - capex
}

/// Closing cash position per period, starting from `starting_cash`.
///
/// Period `i` nets `inflows[i] - outflows[i]`. When the two series differ in
/// length the shorter one is read as zero for the remaining periods.
pub fn project_cash_position(
    starting_cash: Money,
    inflows: &[Money],
    outflows: &[Money],
) -> Vec<Money> {
    let periods = inflows.len().max(outflows.len());
    let mut position = starting_cash;

    (0..periods)
        .map(|i| {
            let inflow = inflows.get(i).copied().unwrap_or(Decimal::ZERO);
            let outflow = outflows.get(i).copied().unwrap_or(Decimal::ZERO);
            position += inflow - outflow;
            position
        })
        .collect()
}
