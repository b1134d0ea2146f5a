use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Direction of a series, judged on its average period-over-period change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Average change per period inside which a series counts as stable.
pub const TREND_DEADBAND: Decimal = dec!(0.1);

/// Ordinary least squares fit of value against 0-based period index.
///
/// Returns `(slope, intercept)`. A series with no spread in its indices gets
/// a zero slope.
fn fit_line(history: &[Decimal]) -> (Decimal, Decimal) {
    let n = Decimal::from(history.len() as u64);
    let mean_x = history
        .iter()
        .enumerate()
        .map(|(i, _)| Decimal::from(i as u64))
        .sum::<Decimal>()
        / n;
    let mean_y = history.iter().sum::<Decimal>() / n;

    let mut sxy = Decimal::ZERO;
    let mut sxx = Decimal::ZERO;
    for (i, y) in history.iter().enumerate() {
        let dx = Decimal::from(i as u64) - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }

    let slope = if sxx.is_zero() { Decimal::ZERO } else { sxy / sxx };
    (slope, mean_y - slope * mean_x)
}

/// Extrapolate a least-squares trend line `periods_ahead` periods past the
/// last observation. Fewer than two observations give an empty forecast.
pub fn linear_forecast(history: &[Decimal], periods_ahead: usize) -> Vec<Decimal> {
    if history.len() < 2 {
        return Vec::new();
    }
    let (slope, intercept) = fit_line(history);
    let n = history.len();
    (n..n + periods_ahead)
        .map(|x| intercept + slope * Decimal::from(x as u64))
        .collect()
}

/// Classify a series as increasing, decreasing or stable.
pub fn identify_trend(values: &[Decimal]) -> TrendDirection {
    if values.len() < 2 {
        return TrendDirection::Stable;
    }
    let total_change: Decimal = values.windows(2).map(|w| w[1] - w[0]).sum();
    let avg_change = total_change / Decimal::from((values.len() - 1) as u64);

    if avg_change > TREND_DEADBAND {
        TrendDirection::Increasing
    } else if avg_change < -TREND_DEADBAND {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_linear_forecast_perfect_line() {
        let history = vec![dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)];
        assert_eq!(linear_forecast(&history, 2), vec![dec!(6), dec!(7)]);
    }

    #[test]
    fn test_linear_forecast_noisy_series() {
        let history = vec![dec!(11), dec!(11), dec!(15), dec!(15)];
        let forecast = linear_forecast(&history, 1);
        // slope = sxy/sxx = 8/5 = 1.6, intercept = 13 - 1.6*1.5 = 10.6, x=4 -> 17
        assert_eq!(forecast, vec![dec!(17)]);
    }

    #[test]
    fn test_linear_forecast_insufficient_history() {
        assert!(linear_forecast(&[], 3).is_empty());
        assert!(linear_forecast(&[dec!(5)], 3).is_empty());
    }

    #[test]
    fn test_linear_forecast_zero_periods() {
        assert!(linear_forecast(&[dec!(1), dec!(2)], 0).is_empty());
    }

    #[test]
    fn test_identify_trend() {
        assert_eq!(identify_trend(&[dec!(1), dec!(2), dec!(3)]), TrendDirection::Increasing);
        assert_eq!(identify_trend(&[dec!(3), dec!(2), dec!(1)]), TrendDirection::Decreasing);
        assert_eq!(identify_trend(&[dec!(1), dec!(1.05), dec!(1.1)]), TrendDirection::Stable);
    }

    #[test]
    fn test_identify_trend_deadband_edges() {
        // Average change exactly 0.1 is not above the deadband
        assert_eq!(identify_trend(&[dec!(1), dec!(1.1)]), TrendDirection::Stable);
        assert_eq!(identify_trend(&[dec!(1), dec!(0.9)]), TrendDirection::Stable);
        assert_eq!(identify_trend(&[dec!(1), dec!(1.11)]), TrendDirection::Increasing);
    }

    #[test]
    fn test_identify_trend_short_series() {
        assert_eq!(identify_trend(&[]), TrendDirection::Stable);
        assert_eq!(identify_trend(&[dec!(42)]), TrendDirection::Stable);
    }
}
