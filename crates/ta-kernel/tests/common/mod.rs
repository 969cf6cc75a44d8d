//! Shared test utilities for ta-kernel integration tests.

use ta_kernel::{Bar, Bars};

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Count the number of NaN values in a slice.
#[allow(dead_code)]
pub fn count_nans(data: &[f64]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Verify that the first `n` values are NaN and the rest are not.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}

/// Bars with the given closes, one minute apart, spanning ±1 around the close.
#[allow(dead_code)]
pub fn bars_from_closes(closes: &[f64]) -> Bars {
    Bars::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let time = 1_700_000_000 + 60 * i64::try_from(i).unwrap();
                Bar::new(time, c, c + 1.0, c - 1.0, c).with_volume(1_000.0)
            })
            .collect(),
    )
    .unwrap()
}

/// Deterministic OHLCV bars following a slow sine wave with some noise.
#[allow(dead_code)]
pub fn wave_bars(n: usize) -> Bars {
    Bars::new(
        (0..n)
            .map(|i| {
                let x = i as f64;
                let close = 100.0 + 10.0 * (x * 0.1).sin() + (x * 1.7).cos();
                let open = close - 0.5 * (x * 0.9).sin();
                let high = close.max(open) + 0.75;
                let low = close.min(open) - 0.75;
                let volume = 1_000.0 + 250.0 * (x * 0.3).cos().abs();
                Bar::new(i as i64, open, high, low, close).with_volume(volume)
            })
            .collect(),
    )
    .unwrap()
}
