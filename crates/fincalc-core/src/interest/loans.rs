use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::time_value::decimal_power;
use crate::types::{Money, Rate};

/// One row of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based payment number
    pub period: u32,
    pub payment: Money,
    /// Portion of the payment that reduces the balance
    pub principal: Money,
    /// Portion of the payment that pays interest
    pub interest: Money,
    /// Balance after this payment, never negative
    pub balance: Money,
}

const MONTHS_PER_YEAR: Decimal = dec!(12);

fn monthly_rate(annual_rate: Rate) -> Rate {
    annual_rate / MONTHS_PER_YEAR
}

/// Level monthly payment that amortizes `principal` over `number_of_payments`.
///
/// Standard annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)` with
/// `r = annual_rate / 12`. A zero rate falls back to straight division.
/// Returns `None` when the payment does not fit in a `Decimal`.
pub fn loan_payment(principal: Money, annual_rate: Rate, number_of_payments: u32) -> Option<Money> {
    if number_of_payments == 0 {
        return None;
    }
    if annual_rate.is_zero() {
        return Some(principal / Decimal::from(number_of_payments));
    }

    let r = monthly_rate(annual_rate);
    let growth = decimal_power(Decimal::ONE + r, number_of_payments)?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return None;
    }
    let annuity_factor = growth.checked_div(denominator)?;
    principal.checked_mul(r)?.checked_mul(annuity_factor)
}

/// Outstanding balance after `payments_made` level payments.
///
/// `P * ((1+r)^n - (1+r)^k) / ((1+r)^n - 1)`, which is the usual
/// `P(1+r)^k - PMT * ((1+r)^k - 1) / r` without the large intermediate
/// `P(1+r)^k`. Zero once the loan is paid off.
pub fn remaining_balance(
    principal: Money,
    annual_rate: Rate,
    total_payments: u32,
    payments_made: u32,
) -> Option<Money> {
    let payment = loan_payment(principal, annual_rate, total_payments)?;

    let balance = if annual_rate.is_zero() {
        principal.checked_sub(payment.checked_mul(Decimal::from(payments_made))?)?
    } else {
        let r = monthly_rate(annual_rate);
        let growth_term = decimal_power(Decimal::ONE + r, total_payments)?;
        let growth_made = decimal_power(Decimal::ONE + r, payments_made.min(total_payments))?;
        let outstanding = (growth_term - growth_made).checked_div(growth_term - Decimal::ONE)?;
        principal.checked_mul(outstanding)?
    };

    Some(balance.max(Decimal::ZERO))
}

/// Total interest paid over the life of the loan.
pub fn total_interest(principal: Money, annual_rate: Rate, number_of_payments: u32) -> Option<Money> {
    let payment = loan_payment(principal, annual_rate, number_of_payments)?;
    payment
        .checked_mul(Decimal::from(number_of_payments))?
        .checked_sub(principal)
}

/// Full month-by-month amortization schedule.
///
/// Each row charges interest on the opening balance and applies the rest of
/// the level payment to principal. Empty when `number_of_payments` is zero
/// or the payment is not representable.
pub fn generate_amortization_schedule(
    principal: Money,
    annual_rate: Rate,
    number_of_payments: u32,
) -> Vec<AmortizationEntry> {
    let Some(payment) = loan_payment(principal, annual_rate, number_of_payments) else {
        return Vec::new();
    };
    let r = monthly_rate(annual_rate);

    let mut schedule = Vec::with_capacity(number_of_payments as usize);
    let mut balance = principal;

    for period in 1..=number_of_payments {
        let interest = balance * r;
        let principal_portion = payment - interest;
        balance = (balance - principal_portion).max(Decimal::ZERO);

        schedule.push(AmortizationEntry {
            period,
            payment,
            principal: principal_portion,
            interest,
            balance,
        });
    }

    debug!(
        "amortization schedule: {} periods, payment {}, closing balance {}",
        number_of_payments, payment, balance
    );

    schedule
}
