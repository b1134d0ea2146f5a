use rust_decimal::Decimal;

/// Flat forecast from the mean of the last `window_size` observations.
///
/// Returns zero when the history is shorter than the window (or the window
/// is empty). `periods_ahead` is accepted for signature parity with the other
/// forecasters but a single flat value is returned regardless.
pub fn moving_average_forecast(history: &[Decimal], window_size: usize, _periods_ahead: usize) -> Decimal {
    if window_size == 0 || history.len() < window_size {
        return Decimal::ZERO;
    }
    let window = &history[history.len() - window_size..];
    window.iter().sum::<Decimal>() / Decimal::from(window_size as u64)
}

/// Simple exponential smoothing, extrapolated flat.
///
/// `S0 = h0`, `St = alpha * ht + (1 - alpha) * S(t-1)`. Every future period
/// receives the last smoothed value.
pub fn exponential_smoothing(history: &[Decimal], alpha: Decimal, periods_ahead: usize) -> Vec<Decimal> {
    let Some((first, rest)) = history.split_first() else {
        return Vec::new();
    };
    let smoothed = rest
        .iter()
        .fold(*first, |s, h| alpha * h + (Decimal::ONE - alpha) * s);
    vec![smoothed; periods_ahead]
}
