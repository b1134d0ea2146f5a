use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::budget::{
    burn_rate, utilization_rate, variance, variance_percentage, variance_status, VarianceStatus,
};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single budget line with its budgeted and actual spend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Line name, e.g. "Marketing", "Cloud hosting"
    pub name: String,
    pub budgeted: Money,
    pub actual: Money,
}

/// Input for a budget-vs-actual review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReviewInput {
    /// Reporting period label, e.g. "Q1 2024"
    pub period_name: String,
    pub lines: Vec<BudgetLine>,
    /// Absolute variance treated as on target, per line
    #[serde(default)]
    pub tolerance: Money,
    /// Periods elapsed so far, used for the burn rate
    #[serde(default)]
    pub periods_elapsed: u32,
}

/// Per-line review detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineReview {
    pub name: String,
    pub budgeted: Money,
    pub actual: Money,
    pub variance: Money,
    pub variance_pct: Option<Percent>,
    pub utilization_pct: Option<Percent>,
    pub status: VarianceStatus,
}

/// Full budget review output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReviewOutput {
    pub total_budgeted: Money,
    pub total_actual: Money,
    pub total_variance: Money,
    pub total_variance_pct: Option<Percent>,
    pub total_utilization_pct: Option<Percent>,
    pub overall_status: VarianceStatus,
    /// Actual spend per elapsed period (zero when no period has elapsed)
    pub burn_rate: Money,
    pub lines_over: usize,
    pub lines_under: usize,
    pub lines_on_target: usize,
    pub line_detail: Vec<LineReview>,
}

// ---------------------------------------------------------------------------
// review_budget
// ---------------------------------------------------------------------------

/// Review every budget line against its actual spend, then roll the lines up
/// into portfolio totals and a burn rate.
pub fn review_budget(
    input: &BudgetReviewInput,
) -> FinCalcResult<ComputationOutput<BudgetReviewOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.lines.is_empty() {
        return Err(FinCalcError::InsufficientData(
            "Budget review requires at least one line".into(),
        ));
    }
    if input.tolerance < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "tolerance".into(),
            reason: "Tolerance cannot be negative".into(),
        });
    }

    let line_detail: Vec<LineReview> = input
        .lines
        .iter()
        .map(|l| {
            let variance_pct = variance_percentage(l.actual, l.budgeted);
            if variance_pct.is_none() {
                warnings.push(format!(
                    "Line '{}' has no budget; variance % and utilization are undefined",
                    l.name
                ));
            }
            LineReview {
                name: l.name.clone(),
                budgeted: l.budgeted,
                actual: l.actual,
                variance: variance(l.actual, l.budgeted),
                variance_pct,
                utilization_pct: utilization_rate(l.actual, l.budgeted),
                status: variance_status(l.actual, l.budgeted, input.tolerance),
            }
        })
        .collect();

    let total_budgeted: Money = input.lines.iter().map(|l| l.budgeted).sum();
    let total_actual: Money = input.lines.iter().map(|l| l.actual).sum();

    let count = |s: VarianceStatus| line_detail.iter().filter(|l| l.status == s).count();
    let lines_over = count(VarianceStatus::Over);
    let lines_under = count(VarianceStatus::Under);
    let lines_on_target = count(VarianceStatus::OnTarget);

    if input.periods_elapsed == 0 {
        warnings.push("No periods elapsed; burn rate reported as zero".into());
    }

    let output = BudgetReviewOutput {
        total_budgeted,
        total_actual,
        total_variance: variance(total_actual, total_budgeted),
        total_variance_pct: variance_percentage(total_actual, total_budgeted),
        total_utilization_pct: utilization_rate(total_actual, total_budgeted),
        overall_status: variance_status(total_actual, total_budgeted, input.tolerance),
        burn_rate: burn_rate(total_actual, input.periods_elapsed),
        lines_over,
        lines_under,
        lines_on_target,
        line_detail,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Budget vs Actual Review with Tolerance Classification",
        &serde_json::json!({
            "period": input.period_name,
            "lines": input.lines.len(),
            "tolerance": input.tolerance.to_string(),
            "periods_elapsed": input.periods_elapsed,
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

    fn line(name: &str, budgeted: Decimal, actual: Decimal) -> BudgetLine {
        BudgetLine {
            name: name.to_string(),
            budgeted,
            actual,
        }
    }

    fn sample_input() -> BudgetReviewInput {
        BudgetReviewInput {
            period_name: "Q1 2024".to_string(),
            lines: vec![
                line("Marketing", dec!(1000), dec!(1200)),
                line("Hosting", dec!(500), dec!(450)),
                line("Travel", dec!(300), dec!(302)),
            ],
            tolerance: dec!(5),
            periods_elapsed: 3,
        }
    }

    #[test]
    fn test_review_totals() {
        let result = review_budget(&sample_input()).unwrap();
        let out = &result.result;
        assert_eq!(out.total_budgeted, dec!(1800));
        assert_eq!(out.total_actual, dec!(1952));
        assert_eq!(out.total_variance, dec!(152));
        assert_eq!(out.overall_status, VarianceStatus::Over);
        // 1952 / 3
        assert_eq!(out.burn_rate, dec!(1952) / dec!(3));
    }

    #[test]
    fn test_review_line_statuses() {
        let result = review_budget(&sample_input()).unwrap();
        let out = &result.result;
        assert_eq!(out.line_detail[0].status, VarianceStatus::Over);
        assert_eq!(out.line_detail[1].status, VarianceStatus::Under);
        assert_eq!(out.line_detail[2].status, VarianceStatus::OnTarget);
        assert_eq!(out.lines_over, 1);
        assert_eq!(out.lines_under, 1);
        assert_eq!(out.lines_on_target, 1);
        assert_eq!(out.line_detail[0].variance_pct, Some(dec!(20)));
        assert_eq!(out.line_detail[1].utilization_pct, Some(dec!(90)));
    }

    #[test]
    fn test_review_zero_budget_line_warns() {
        let mut input = sample_input();
        input.lines.push(line("Unplanned", dec!(0), dec!(40)));
        let result = review_budget(&input).unwrap();
        let unplanned = &result.result.line_detail[3];
        assert_eq!(unplanned.variance_pct, None);
        assert_eq!(unplanned.utilization_pct, None);
        assert!(result.warnings.iter().any(|w| w.contains("Unplanned")));
    }

    #[test]
    fn test_review_no_periods_elapsed() {
        let mut input = sample_input();
        input.periods_elapsed = 0;
        let result = review_budget(&input).unwrap();
        assert_eq!(result.result.burn_rate, Decimal::ZERO);
        assert!(result.warnings.iter().any(|w| w.contains("burn rate")));
    }

    #[test]
    fn test_review_empty_lines_rejected() {
        let mut input = sample_input();
        input.lines.clear();
        match review_budget(&input).unwrap_err() {
            FinCalcError::InsufficientData(msg) => assert!(msg.contains("at least one line")),
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_review_negative_tolerance_rejected() {
        let mut input = sample_input();
        input.tolerance = dec!(-1);
        assert!(matches!(
            review_budget(&input),
            Err(FinCalcError::InvalidInput { .. })
        ));
    }
}
