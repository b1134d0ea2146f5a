use rust_decimal::Decimal;

use crate::time_value::fractional_power;
use crate::types::{Money, Rate};

/// Compound interest: `principal * (1 + r/n)^(n * years)`.
///
/// `years` may be fractional, so the exponent goes through the float power
/// helper. Returns the accumulated amount (principal plus interest), or `None`
/// when `times_compounded` is zero or the power is not representable.
pub fn compound_interest(
    principal: Money,
    annual_rate: Rate,
    times_compounded: u32,
    years: Decimal,
) -> Option<Money> {
    if times_compounded == 0 {
        return None;
    }
    let n = Decimal::from(times_compounded);
    let factor = fractional_power(Decimal::ONE + annual_rate / n, n * years)?;
    Some(principal * factor)
}

/// Simple interest: `principal * rate * time`.
pub fn simple_interest(principal: Money, rate: Rate, time: Decimal) -> Money {
    principal * rate * time
}

/// Future value of a single amount compounded once per period.
pub fn future_value(present_value: Money, rate: Rate, periods: Decimal) -> Option<Money> {
    let factor = fractional_power(Decimal::ONE + rate, periods)?;
    Some(present_value * factor)
}

/// Present value of a single amount discounted once per period.
pub fn present_value(future_value: Money, rate: Rate, periods: Decimal) -> Option<Money> {
    let factor = fractional_power(Decimal::ONE + rate, periods)?;
    if factor.is_zero() {
        return None;
    }
    Some(future_value / factor)
}
