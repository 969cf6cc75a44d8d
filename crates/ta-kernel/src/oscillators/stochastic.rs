//! Stochastic Oscillator.
//!
//! # Algorithm
//!
//! Highest high and lowest low come from the O(n) monotonic-deque extrema.
//!
//! ```text
//! raw %K = 100 × (Close − Lowest Low) / (Highest High − Lowest Low)
//! %K     = SMA(raw %K, k_smooth)
//! %D     = SMA(%K, d_smooth)
//! ```
//!
//! # Mathematical Conventions
//!
//! - **Zero Range Handling**: When `highest_high == lowest_low` (flat price over
//!   the lookback window), raw %K = 0.
//! - **NaN Precedence**: An undefined high, low or close in the window makes
//!   %K undefined, ahead of the flat-price fallback.
//!
//! # Example
//!
//! ```
//! use ta_kernel::oscillators::stochastic::{stoch, stochastic};
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 11.5, 12.5, 13.0, 12.0];
//! let low = vec![9.0_f64, 10.0, 11.0, 10.5, 11.5, 12.0, 11.0];
//! let close = vec![9.5_f64, 10.5, 11.5, 11.0, 12.0, 12.5, 11.5];
//!
//! let k = stoch(&close, &high, &low, 3).unwrap();
//! assert!(k[1].is_nan());
//! assert!((k[2] - 250.0 / 3.0).abs() < 1e-10); // (11.5 - 9) / (12 - 9)
//!
//! let out = stochastic(&high, &low, &close, 3, 1, 2).unwrap();
//! assert!(out.d[2].is_nan());
//! assert!(!out.d[3].is_nan());
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_max, rolling_min};
use crate::ma::sma::sma;
use crate::traits::{validate_buffer, validate_period, validate_same_len, SeriesElement};

/// %K and %D lines of the Stochastic Oscillator.
///
/// Both vectors have the length of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// The %K line (fast line).
    pub k: Vec<T>,
    /// The %D line (signal line, SMA of %K).
    pub d: Vec<T>,
}

/// Computes raw %K into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than the inputs
pub fn stoch_into<T: SeriesElement>(
    close: &[T],
    high: &[T],
    low: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    validate_period(period)?;
    let n = validate_same_len(&[("close", close), ("high", high), ("low", low)])?;
    validate_buffer(output, n, "stoch")?;

    let hundred = T::hundred();
    let highest = rolling_max(high, period)?;
    let lowest = rolling_min(low, period)?;

    for i in 0..n {
        let (hh, ll, c) = (highest[i], lowest[i], close[i]);
        output[i] = if hh.is_nan() || ll.is_nan() || c.is_nan() {
            T::nan()
        } else if hh == ll {
            T::zero()
        } else {
            hundred * (c - ll) / (hh - ll)
        };
    }

    Ok(())
}

/// Computes raw %K: where the close sits in the `period`-bar high/low range.
///
/// Argument order follows the charting convention `stoch(source, high, low, length)`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn stoch<T: SeriesElement>(close: &[T], high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); close.len()];
    stoch_into(close, high, low, period, &mut output)?;
    Ok(output)
}

/// Computes the full Stochastic Oscillator with configurable smoothing.
///
/// A `k_smooth` of 1 gives the fast stochastic.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if any period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn stochastic<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    k_period: usize,
    k_smooth: usize,
    d_smooth: usize,
) -> Result<StochasticOutput<T>> {
    validate_period(k_smooth)?;
    validate_period(d_smooth)?;

    let raw = stoch(close, high, low, k_period)?;
    let k = sma(&raw, k_smooth)?;
    let d = sma(&k, d_smooth)?;

    Ok(StochasticOutput { k, d })
}
