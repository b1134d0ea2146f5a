use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Symmetric interval around an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: Decimal,
    pub upper: Decimal,
}

/// z-score used for confidence levels outside the lookup table.
pub const DEFAULT_Z_SCORE: Decimal = dec!(1.96);

/// PERT weighted mean: `(o + 4m + p) / 6`.
pub fn three_point_estimate(optimistic: Decimal, most_likely: Decimal, pessimistic: Decimal) -> Decimal {
    (optimistic + dec!(4) * most_likely + pessimistic) / dec!(6)
}

/// PERT standard deviation: `(p - o) / 6`.
pub fn three_point_standard_deviation(optimistic: Decimal, pessimistic: Decimal) -> Decimal {
    (pessimistic - optimistic) / dec!(6)
}

/// z-score for the supported confidence levels (0.68, 0.95, 0.99).
///
/// Anything else falls back to the 95% score; this is a lookup, not an
/// inverse-normal computation.
pub fn z_score(confidence_level: Decimal) -> Decimal {
    if confidence_level == dec!(0.68) {
        dec!(1.0)
    } else if confidence_level == dec!(0.95) {
        dec!(1.96)
    } else if confidence_level == dec!(0.99) {
        dec!(2.58)
    } else {
        DEFAULT_Z_SCORE
    }
}

/// `estimate +/- z * std_dev` at the given confidence level.
pub fn confidence_interval(estimate: Decimal, std_dev: Decimal, confidence_level: Decimal) -> ConfidenceInterval {
    let margin = z_score(confidence_level) * std_dev;
    ConfidenceInterval {
        lower: estimate - margin,
        upper: estimate + margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_point_estimate() {
        // (2 + 4*5 + 14) / 6 = 6
        assert_eq!(three_point_estimate(dec!(2), dec!(5), dec!(14)), dec!(6));
        assert_eq!(three_point_estimate(dec!(10), dec!(10), dec!(10)), dec!(10));
    }

    #[test]
    fn test_three_point_standard_deviation() {
        assert_eq!(three_point_standard_deviation(dec!(2), dec!(14)), dec!(2));
        assert_eq!(three_point_standard_deviation(dec!(5), dec!(5)), dec!(0));
    }

    #[test]
    fn test_z_score_lookup() {
        assert_eq!(z_score(dec!(0.68)), dec!(1));
        assert_eq!(z_score(dec!(0.95)), dec!(1.96));
        assert_eq!(z_score(dec!(0.990)), dec!(2.58));
        assert_eq!(z_score(dec!(0.80)), dec!(1.96));
    }

    #[test]
    fn test_confidence_interval() {
        let ci = confidence_interval(dec!(100), dec!(10), dec!(0.95));
        assert_eq!(ci.lower, dec!(80.4));
        assert_eq!(ci.upper, dec!(119.6));

        let ci = confidence_interval(dec!(100), dec!(10), dec!(0.68));
        assert_eq!(ci, ConfidenceInterval { lower: dec!(90), upper: dec!(110) });
    }

    #[test]
    fn test_confidence_interval_unknown_level_uses_default() {
        let known = confidence_interval(dec!(50), dec!(5), dec!(0.95));
        let unknown = confidence_interval(dec!(50), dec!(5), dec!(0.5));
        assert_eq!(known, unknown);
    }
}
