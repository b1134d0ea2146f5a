use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Integer power by repeated multiplication, exact in decimal arithmetic.
///
/// Used wherever the exponent is a whole number of periods (NPV discount
/// factors, annuity factors) so the result matches decimal accounting.
/// Returns `None` only if the product overflows `Decimal`.
pub fn decimal_power(base: Decimal, exponent: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    for _ in 0..exponent {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

/// Power with a fractional exponent, evaluated in `f64` and converted back.
///
/// Reserved for genuinely non-integral exponents such as compounding over a
/// fractional number of years. Returns `None` when the float result is not
/// finite or cannot be represented as a `Decimal`.
pub fn fractional_power(base: Decimal, exponent: Decimal) -> Option<Decimal> {
    let b = base.to_f64()?;
    let e = exponent.to_f64()?;
    let value = b.powf(e);
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}
