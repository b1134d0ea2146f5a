use fincalc_core::investment::discounting::{irr, npv, payback_period};
use fincalc_core::investment::returns::{profitability_index, roi};
use fincalc_core::investment::review::{appraise_investment, InvestmentInput};
use fincalc_core::FinCalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_irr_root_zeroes_npv() {
    let flows = vec![dec!(-1000), dec!(500), dec!(500), dec!(500)];
    let rate_pct = irr(&flows, 100, dec!(0.000001)).unwrap();
    assert!(rate_pct > Decimal::ZERO);
    let residual = npv(rate_pct / dec!(100), &flows).unwrap();
    assert!(residual.abs() < dec!(0.0001), "residual {residual}");
}

#[test]
fn test_irr_of_uneven_flows() {
    // Outlay recovered with a large balloon in year 4
    let flows = vec![dec!(-5000), dec!(500), dec!(500), dec!(500), dec!(6000)];
    let rate_pct = irr(&flows, 100, dec!(0.000001)).unwrap();
    let residual = npv(rate_pct / dec!(100), &flows).unwrap();
    assert!(residual.abs() < dec!(0.0001));
    assert!(rate_pct > dec!(10) && rate_pct < dec!(15));
}

#[test]
fn test_npv_at_irr_is_break_even_for_pi() {
    let flows = vec![dec!(-1000), dec!(400), dec!(400), dec!(400)];
    let rate = irr(&flows, 100, dec!(0.000001)).unwrap() / dec!(100);
    let pv_future = npv(rate, &flows).unwrap() + dec!(1000);
    let pi = profitability_index(pv_future, dec!(1000)).unwrap();
    assert!((pi - Decimal::ONE).abs() < dec!(0.000001));
}

#[test]
fn test_payback_uses_cumulative_flows() {
    let flows = vec![dec!(100), dec!(200), dec!(300), dec!(400)];
    assert_eq!(payback_period(dec!(600), &flows), Some(3));
    assert_eq!(payback_period(dec!(1001), &flows), None);
}

#[test]
fn test_roi_undefined_without_cost() {
    assert_eq!(roi(dec!(100), Decimal::ZERO), None);
}

#[test]
fn test_appraisal_from_json_with_defaults() {
    let input: InvestmentInput = serde_json::from_str(
        r#"{"cash_flows": ["-1000", "300", "400", "500"], "discount_rate": "0.10"}"#,
    )
    .unwrap();
    assert_eq!(input.max_iterations, 100);
    let result = appraise_investment(&input).unwrap();
    let out = &result.result;
    assert!(out.npv.unwrap() < Decimal::ZERO);
    assert!(out.irr_pct.unwrap() < dec!(10));
    assert_eq!(out.payback_period, Some(3));
}

#[test]
fn test_appraisal_rejects_zero_tolerance() {
    let input = InvestmentInput {
        cash_flows: vec![dec!(-100), dec!(110)],
        discount_rate: dec!(0.05),
        max_iterations: 100,
        tolerance: Decimal::ZERO,
    };
    match appraise_investment(&input).unwrap_err() {
        FinCalcError::InvalidInput { field, .. } => assert_eq!(field, "tolerance"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}
