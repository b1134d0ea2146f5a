use log::debug;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cash_flow::flows::cumulative_cash_flow;
use crate::time_value::decimal_power;
use crate::types::{Money, Percent, Rate};

/// Default iteration cap for [`irr`].
pub const DEFAULT_IRR_MAX_ITERATIONS: u32 = 100;

/// Default NPV tolerance for [`irr`].
pub const DEFAULT_IRR_TOLERANCE: Decimal = dec!(0.000001);

/// Starting rate for the Newton-Raphson search (10%).
pub const IRR_INITIAL_GUESS: f64 = 0.10;

/// Net present value: `sum(cf_i / (1 + r)^i)` with period 0 undiscounted.
///
/// Discount factors use exact decimal powers. Returns `None` if a discount
/// factor is zero (a rate of -100%), or if a factor or the running total
/// overflows.
pub fn npv(discount_rate: Rate, cash_flows: &[Money]) -> Option<Money> {
    let one_plus_r = Decimal::ONE + discount_rate;
    let mut total = Decimal::ZERO;

    for (t, cf) in cash_flows.iter().enumerate() {
        let discount = decimal_power(one_plus_r, u32::try_from(t).ok()?)?;
        if discount.is_zero() {
            return None;
        }
        total = total.checked_add(cf.checked_div(discount)?)?;
    }

    Some(total)
}

/// Internal rate of return by Newton-Raphson, as a percentage.
///
/// Starts at 10% and iterates in `f64`. Converges when `|NPV| < tolerance`.
/// There is no bracketing fallback: a zero derivative, a non-finite iterate
/// or running out of iterations all give `None`.
pub fn irr(cash_flows: &[Money], max_iterations: u32, tolerance: Decimal) -> Option<Percent> {
    let flows: Vec<f64> = cash_flows
        .iter()
        .map(|cf| cf.to_f64())
        .collect::<Option<Vec<f64>>>()?;
    let tol = tolerance.to_f64()?;

    let mut rate = IRR_INITIAL_GUESS;

    for iteration in 0..max_iterations {
        let one_plus_r = 1.0 + rate;
        let mut npv_val = 0.0_f64;
        let mut dnpv = 0.0_f64;

        for (t, cf) in flows.iter().enumerate() {
            let t = t as f64;
            npv_val += cf / one_plus_r.powf(t);
            if t > 0.0 {
                dnpv -= t * cf / one_plus_r.powf(t + 1.0);
            }
        }

        if !npv_val.is_finite() || !dnpv.is_finite() {
            debug!("irr: non-finite NPV at iteration {iteration} (rate {rate})");
            return None;
        }

        if npv_val.abs() < tol {
            debug!("irr: converged to {rate} after {iteration} iterations");
            return Decimal::from_f64(rate * 100.0);
        }

        if dnpv == 0.0 {
            debug!("irr: zero derivative at iteration {iteration} (rate {rate})");
            return None;
        }

        rate -= npv_val / dnpv;
    }

    debug!("irr: no convergence within {max_iterations} iterations (last rate {rate})");
    None
}

/// First period (1-based) in which cumulative cash flow recovers the initial
/// investment.
pub fn payback_period(initial_investment: Money, cash_flows: &[Money]) -> Option<u32> {
    cumulative_cash_flow(cash_flows)
        .iter()
        .position(|cumulative| *cumulative >= initial_investment)
        .and_then(|i| u32::try_from(i + 1).ok())
}
