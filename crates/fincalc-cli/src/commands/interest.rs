use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::interest::loans;
use fincalc_core::interest::review::{self, LoanInput};

use crate::input;

/// Arguments for a full loan analysis with schedule
#[derive(Args)]
pub struct LoanReviewArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a quick loan payment calculation
#[derive(Args)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual rate (e.g. 0.06 for 6%)
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Number of monthly payments
    #[arg(long)]
    pub payments: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoanQuickOutput {
    monthly_payment: Option<Decimal>,
    total_paid: Option<Decimal>,
    total_interest: Option<Decimal>,
    number_of_payments: u32,
}

pub fn run_loan_review(args: LoanReviewArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = input::load(args.input.as_deref(), "loan")?;
    let result = review::analyze_loan(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.principal <= Decimal::ZERO {
        return Err("principal must be positive".into());
    }
    let monthly_payment = loans::loan_payment(args.principal, args.annual_rate, args.payments);
    let total_interest = loans::total_interest(args.principal, args.annual_rate, args.payments);
    let output = LoanQuickOutput {
        monthly_payment,
        total_paid: total_interest.map(|i| i + args.principal),
        total_interest,
        number_of_payments: args.payments,
    };
    Ok(serde_json::to_value(output)?)
}
