use fincalc_core::optimization::allocation::{
    priority_based_allocation, proportional_allocation, Allocation, AllocationRequest,
};
use fincalc_core::optimization::breakeven::break_even_point;
use fincalc_core::variance::budget::{
    burn_rate, utilization_rate, variance_percentage, variance_status, VarianceStatus,
};
use fincalc_core::variance::review::{review_budget, BudgetReviewInput};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Variance
// ===========================================================================

#[test]
fn test_zero_budget_ratios_are_absent() {
    for actual in [dec!(0), dec!(100), dec!(-50)] {
        assert_eq!(variance_percentage(actual, Decimal::ZERO), None);
        assert_eq!(utilization_rate(actual, Decimal::ZERO), None);
    }
    // burn rate keeps its zero
    assert_eq!(burn_rate(dec!(100), 0), Decimal::ZERO);
}

#[test]
fn test_variance_status_table() {
    let cases = [
        (dec!(100), dec!(100), dec!(0), VarianceStatus::OnTarget),
        (dec!(110), dec!(100), dec!(5), VarianceStatus::Over),
        (dec!(90), dec!(100), dec!(5), VarianceStatus::Under),
        (dec!(103), dec!(100), dec!(5), VarianceStatus::OnTarget),
    ];
    for (actual, budgeted, tolerance, expected) in cases {
        assert_eq!(variance_status(actual, budgeted, tolerance), expected);
    }
}

#[test]
fn test_budget_review_from_json() {
    let input: BudgetReviewInput = serde_json::from_str(
        r#"{"period_name": "FY25", "lines": [
              {"name": "Payroll", "budgeted": "50000", "actual": "51000"},
              {"name": "Rent", "budgeted": "12000", "actual": "12000"}
           ]}"#,
    )
    .unwrap();
    assert_eq!(input.tolerance, Decimal::ZERO);
    let result = review_budget(&input).unwrap();
    assert_eq!(result.result.total_variance, dec!(1000));
    assert_eq!(result.result.line_detail[1].status, VarianceStatus::OnTarget);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["result"]["overall_status"], "Over");
}

// ===========================================================================
// Allocation
// ===========================================================================

#[test]
fn test_priority_allocation_spec_example() {
    let items = vec![
        AllocationRequest {
            name: "A".into(),
            minimum_required: dec!(60),
            priority: 1,
        },
        AllocationRequest {
            name: "B".into(),
            minimum_required: dec!(60),
            priority: 2,
        },
    ];
    assert_eq!(
        priority_based_allocation(dec!(100), &items),
        vec![
            Allocation {
                name: "A".into(),
                amount: dec!(60)
            },
            Allocation {
                name: "B".into(),
                amount: dec!(40)
            },
        ]
    );
}

#[test]
fn test_break_even_absent_when_cost_exceeds_price() {
    assert_eq!(break_even_point(dec!(1000), dec!(5), dec!(8)), None);
}

proptest! {
    #[test]
    fn proportional_allocation_spends_whole_budget(
        weights in prop::collection::vec(1u32..1000, 1..12),
        total_cents in 0i64..100_000_000,
    ) {
        let weights: Vec<Decimal> = weights.into_iter().map(Decimal::from).collect();
        let total = Decimal::new(total_cents, 2);
        let shares = proportional_allocation(total, &weights);
        prop_assert_eq!(shares.len(), weights.len());
        let spent: Decimal = shares.iter().sum();
        prop_assert!((spent - total).abs() < dec!(0.0000001));
    }

    #[test]
    fn priority_allocation_never_exceeds_budget(
        minimums in prop::collection::vec(0i64..10_000, 0..12),
        total in 0i64..50_000,
    ) {
        let items: Vec<AllocationRequest> = minimums
            .iter()
            .enumerate()
            .map(|(i, m)| AllocationRequest {
                name: format!("item{i}"),
                minimum_required: Decimal::from(*m),
                priority: (i % 3) as u32,
            })
            .collect();
        let total = Decimal::from(total);
        let granted = priority_based_allocation(total, &items);
        let spent: Decimal = granted.iter().map(|a| a.amount).sum();
        prop_assert!(spent <= total);
        prop_assert!(granted.iter().all(|a| a.amount >= Decimal::ZERO));
    }
}
