use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::loans::{generate_amortization_schedule, loan_payment, remaining_balance};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

/// Input for a level-payment loan analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Nominal annual rate, compounded monthly
    pub annual_rate: Rate,
    /// Number of monthly payments
    pub number_of_payments: u32,
    /// Date of the first payment; later payments fall on the same day of
    /// each following month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
    /// Report the outstanding balance after this many payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_after_payments: Option<u32>,
}

/// A schedule row with its optional calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Loan analysis output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOutput {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    /// Interest as a share of the principal
    pub interest_to_principal: Rate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_checkpoint: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_payment_date: Option<NaiveDate>,
    pub schedule: Vec<ScheduleRow>,
}

fn nth_payment_date(first: NaiveDate, period: u32) -> FinCalcResult<NaiveDate> {
    first
        .checked_add_months(Months::new(period - 1))
        .ok_or_else(|| {
            FinCalcError::DateError(format!("Payment date for period {period} is out of range"))
        })
}

/// Price a level-payment loan and lay out its full amortization schedule.
pub fn analyze_loan(input: &LoanInput) -> FinCalcResult<ComputationOutput<LoanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.principal <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.number_of_payments == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "number_of_payments".into(),
            reason: "Number of payments must be > 0".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    if input.annual_rate.is_zero() {
        warnings.push("Zero interest rate: payments reduce principal on a straight line".into());
    }

    let monthly_payment =
        loan_payment(input.principal, input.annual_rate, input.number_of_payments).ok_or_else(
            || FinCalcError::InvalidInput {
                field: "annual_rate".into(),
                reason: "Rate and term overflow decimal precision".into(),
            },
        )?;

    let schedule = generate_amortization_schedule(
        input.principal,
        input.annual_rate,
        input.number_of_payments,
    )
    .into_iter()
    .map(|e| -> FinCalcResult<ScheduleRow> {
        let payment_date = input
            .first_payment_date
            .map(|first| nth_payment_date(first, e.period))
            .transpose()?;
        Ok(ScheduleRow {
            period: e.period,
            payment_date,
            payment: e.payment,
            principal: e.principal,
            interest: e.interest,
            balance: e.balance,
        })
    })
    .collect::<FinCalcResult<Vec<ScheduleRow>>>()?;

    let total_paid = monthly_payment
        .checked_mul(Decimal::from(input.number_of_payments))
        .ok_or_else(|| FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "Total of payments overflows decimal precision".into(),
        })?;
    let total_interest = total_paid - input.principal;

    let balance_checkpoint = match input.balance_after_payments {
        Some(k) if k > input.number_of_payments => {
            warnings.push(format!(
                "Checkpoint after {k} payments is beyond the term; loan is fully repaid"
            ));
            Some(Decimal::ZERO)
        }
        Some(k) => remaining_balance(
            input.principal,
            input.annual_rate,
            input.number_of_payments,
            k,
        ),
        None => None,
    };

    let final_payment_date = schedule.last().and_then(|row| row.payment_date);

    let output = LoanOutput {
        monthly_payment,
        total_paid,
        total_interest,
        interest_to_principal: total_interest / input.principal,
        balance_checkpoint,
        final_payment_date,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Level-Payment Loan Amortization (monthly compounding)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate": input.annual_rate.to_string(),
            "number_of_payments": input.number_of_payments,
            "dated": input.first_payment_date.is_some(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
