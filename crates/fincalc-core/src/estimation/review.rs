use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::evm::{evm_metrics, EvmMetrics};
use super::pert::{
    confidence_interval, three_point_estimate, three_point_standard_deviation, ConfidenceInterval,
};
use super::reserves::{bottom_up_estimate, contingency_reserve};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

fn default_confidence_level() -> Decimal {
    dec!(0.95)
}

/// Three-point cost estimate for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEstimate {
    pub name: String,
    pub optimistic: Money,
    pub most_likely: Money,
    pub pessimistic: Money,
}

/// Progress figures at a status date, for earned value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub planned_value: Money,
    pub earned_value: Money,
    pub actual_cost: Money,
    pub budget_at_completion: Money,
}

/// Input for a project cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEstimateInput {
    pub project_name: String,
    pub tasks: Vec<TaskEstimate>,
    /// 0.68, 0.95 or 0.99; other levels use the 95% z-score
    #[serde(default = "default_confidence_level")]
    pub confidence_level: Decimal,
    /// Contingency on the bottom-up estimate, in percent
    #[serde(default)]
    pub contingency_pct: Percent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// PERT result for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub name: String,
    pub expected: Money,
    pub std_dev: Money,
}

/// Project estimate output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEstimateOutput {
    /// Sum of the task PERT means
    pub expected_total: Money,
    /// Square root of the summed task variances
    pub std_dev_total: Money,
    pub interval: ConfidenceInterval,
    /// Sum of the most-likely costs
    pub most_likely_total: Money,
    pub contingency_reserve: Money,
    /// Most-likely total plus contingency
    pub bottom_up_estimate: Money,
    pub tasks: Vec<TaskResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm: Option<EvmMetrics>,
}

// ---------------------------------------------------------------------------
// estimate_project
// ---------------------------------------------------------------------------

/// Roll task-level three-point estimates up into a project estimate with a
/// confidence interval, a bottom-up budget and optional earned-value status.
pub fn estimate_project(
    input: &ProjectEstimateInput,
) -> FinCalcResult<ComputationOutput<ProjectEstimateOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.tasks.is_empty() {
        return Err(FinCalcError::InsufficientData(
            "Project estimate requires at least one task".into(),
        ));
    }
    for t in &input.tasks {
        if t.optimistic > t.most_likely || t.most_likely > t.pessimistic {
            return Err(FinCalcError::InvalidInput {
                field: format!("tasks[{}]", t.name),
                reason: "Estimates must satisfy optimistic <= most_likely <= pessimistic".into(),
            });
        }
    }
    if input.contingency_pct < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "contingency_pct".into(),
            reason: "Contingency cannot be negative".into(),
        });
    }

    let level = input.confidence_level;
    if level != dec!(0.68) && level != dec!(0.95) && level != dec!(0.99) {
        warnings.push(format!(
            "Confidence level {level} is not tabulated; using the 95% z-score"
        ));
    }

    let tasks: Vec<TaskResult> = input
        .tasks
        .iter()
        .map(|t| TaskResult {
            name: t.name.clone(),
            expected: three_point_estimate(t.optimistic, t.most_likely, t.pessimistic),
            std_dev: three_point_standard_deviation(t.optimistic, t.pessimistic),
        })
        .collect();

    let expected_total: Money = tasks.iter().map(|t| t.expected).sum();
    let variance_total: Decimal = tasks.iter().map(|t| t.std_dev * t.std_dev).sum();
    // Task variances are squares, so the sum is never negative
    let std_dev_total = variance_total.sqrt().unwrap_or(Decimal::ZERO);

    let most_likely: Vec<Money> = input.tasks.iter().map(|t| t.most_likely).collect();
    let most_likely_total: Money = most_likely.iter().sum();

    let evm = input.status.as_ref().map(|s| {
        let metrics = evm_metrics(
            s.planned_value,
            s.earned_value,
            s.actual_cost,
            s.budget_at_completion,
        );
        if metrics.estimate_at_completion.is_none() {
            warnings.push("No cost performance yet; estimate at completion is undefined".into());
        }
        metrics
    });

    let output = ProjectEstimateOutput {
        expected_total,
        std_dev_total,
        interval: confidence_interval(expected_total, std_dev_total, level),
        most_likely_total,
        contingency_reserve: contingency_reserve(most_likely_total, input.contingency_pct),
        bottom_up_estimate: bottom_up_estimate(&most_likely, input.contingency_pct),
        tasks,
        evm,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "PERT Three-Point Estimate with Bottom-Up Contingency and Earned Value",
        &serde_json::json!({
            "project": input.project_name,
            "tasks": input.tasks.len(),
            "confidence_level": level.to_string(),
            "contingency_pct": input.contingency_pct.to_string(),
            "has_status": input.status.is_some(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, o: Decimal, m: Decimal, p: Decimal) -> TaskEstimate {
        TaskEstimate {
            name: name.to_string(),
            optimistic: o,
            most_likely: m,
            pessimistic: p,
        }
    }

    fn sample_input() -> ProjectEstimateInput {
        ProjectEstimateInput {
            project_name: "Warehouse fit-out".to_string(),
            tasks: vec![
                // expected 6, sd 2
                task("Design", dec!(2), dec!(5), dec!(14)),
                // expected 10, sd 1
                task("Build", dec!(7), dec!(10), dec!(13)),
            ],
            confidence_level: dec!(0.95),
            contingency_pct: dec!(10),
            status: None,
        }
    }

    #[test]
    fn test_estimate_rollup() {
        let result = estimate_project(&sample_input()).unwrap();
        let out = &result.result;
        assert_eq!(out.tasks[0].expected, dec!(6));
        assert_eq!(out.tasks[1].std_dev, dec!(1));
        assert_eq!(out.expected_total, dec!(16));
        // sqrt(4 + 1)
        assert!((out.std_dev_total - dec!(2.2360679)).abs() < dec!(0.0000001));
        assert_eq!(out.most_likely_total, dec!(15));
        assert_eq!(out.contingency_reserve, dec!(1.5));
        assert_eq!(out.bottom_up_estimate, dec!(16.5));
        assert!(out.evm.is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_estimate_interval_symmetric() {
        let result = estimate_project(&sample_input()).unwrap();
        let out = &result.result;
        let below = out.expected_total - out.interval.lower;
        let above = out.interval.upper - out.expected_total;
        assert!((below - above).abs() < dec!(0.0000000001));
        // 1.96 * sqrt(5) = 4.3827
        assert!((above - dec!(4.3827)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_estimate_untabulated_level_warns() {
        let mut input = sample_input();
        input.confidence_level = dec!(0.9);
        let result = estimate_project(&input).unwrap();
        assert!(result.warnings[0].contains("not tabulated"));
    }

    #[test]
    fn test_estimate_with_status() {
        let mut input = sample_input();
        input.status = Some(ProjectStatus {
            planned_value: dec!(8),
            earned_value: dec!(6),
            actual_cost: dec!(0),
            budget_at_completion: dec!(16.5),
        });
        let result = estimate_project(&input).unwrap();
        let evm = result.result.evm.as_ref().unwrap();
        assert_eq!(evm.schedule_performance_index, Some(dec!(0.75)));
        assert_eq!(evm.estimate_at_completion, None);
        assert!(result.warnings.iter().any(|w| w.contains("estimate at completion")));
    }

    #[test]
    fn test_estimate_rejects_unordered_points() {
        let mut input = sample_input();
        input.tasks.push(task("Bad", dec!(10), dec!(5), dec!(20)));
        match estimate_project(&input).unwrap_err() {
            FinCalcError::InvalidInput { field, .. } => assert_eq!(field, "tasks[Bad]"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
