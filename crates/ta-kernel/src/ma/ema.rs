//! Exponential moving averages: EMA and Wilder's RMA.
//!
//! # Formula
//!
//! ```text
//! out[i] = α × x[i] + (1 - α) × out[i-1]
//!
//! EMA: α = 2 / (period + 1), seeded with the first defined input
//! RMA: α = 1 / period,       seeded with the mean of the first `period` defined inputs
//! ```
//!
//! # NaN Handling
//!
//! An undefined input produces an undefined output and drops the accumulator.
//! The filter then seeds again from the next defined inputs, exactly as it
//! did at the start of the series.
//!
//! # Example
//!
//! ```
//! use ta_kernel::ma::{ema, rma};
//!
//! let data = vec![2.0_f64, 4.0, 6.0, 8.0];
//!
//! let e = ema(&data, 3).unwrap(); // alpha = 0.5
//! assert_eq!(e[0], 2.0);
//! assert_eq!(e[1], 3.0);
//!
//! let r = rma(&data, 2).unwrap(); // seeded with (2 + 4) / 2
//! assert!(r[0].is_nan());
//! assert_eq!(r[1], 3.0);
//! assert_eq!(r[2], 4.5);
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_buffer, validate_input, SeriesElement};

/// How a recursive filter gets its first value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seed {
    /// The first defined input is the first output.
    FirstValue,
    /// The mean of the first `n` consecutive defined inputs is the first output.
    Average(usize),
}

fn smooth_core<T: SeriesElement>(data: &[T], alpha: T, seed: Seed, output: &mut [T]) -> Result<()> {
    let one_minus_alpha = T::one() - alpha;

    let mut prev: Option<T> = None;
    let mut warmup_sum = T::zero();
    let mut warmup_count = 0usize;

    for (i, &value) in data.iter().enumerate() {
        if value.is_nan() {
            output[i] = T::nan();
            prev = None;
            warmup_sum = T::zero();
            warmup_count = 0;
            continue;
        }

        let current = match (prev, seed) {
            (Some(p), _) => alpha * value + one_minus_alpha * p,
            (None, Seed::FirstValue) => value,
            (None, Seed::Average(n)) => {
                warmup_sum = warmup_sum + value;
                warmup_count += 1;
                if warmup_count < n {
                    output[i] = T::nan();
                    continue;
                }
                warmup_sum / T::from_usize(n)?
            }
        };

        output[i] = current;
        prev = Some(current);
    }

    Ok(())
}

fn standard_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    Ok(T::two() / (T::from_usize(period)? + T::one()))
}

fn wilder_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    Ok(T::one() / T::from_usize(period)?)
}

/// Computes the EMA into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn ema_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "ema")?;
    validate_buffer(output, data.len(), "ema")?;
    smooth_core(data, standard_alpha(period)?, Seed::FirstValue, output)
}

/// Computes the Exponential Moving Average with `α = 2 / (period + 1)`.
///
/// The output is defined from the first defined input onward; there is no
/// `period - 1` warm-up.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    ema_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes Wilder's RMA (SMMA) into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn rma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "rma")?;
    validate_buffer(output, data.len(), "rma")?;
    smooth_core(data, wilder_alpha(period)?, Seed::Average(period), output)
}

/// Computes Wilder's smoothed moving average with `α = 1 / period`.
///
/// The first output is the simple average of the first `period` defined
/// samples, at index `s + period - 1` where `s` is the first defined index.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn rma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rma_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes an exponential filter with an explicit smoothing factor.
///
/// Seeds with the first defined input, like [`ema`].
///
/// # Errors
///
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InvalidPeriod` if `alpha` is not in `(0, 1]`
pub fn ema_with_alpha<T: SeriesElement>(data: &[T], alpha: T) -> Result<Vec<T>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !(alpha > T::zero() && alpha <= T::one()) {
        tracing::debug!("rejecting smoothing factor outside (0, 1]");
        return Err(Error::InvalidPeriod {
            period: 0,
            reason: "alpha must be in (0, 1]",
        });
    }

    let mut output = vec![T::nan(); data.len()];
    smooth_core(data, alpha, Seed::FirstValue, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_ema_seeded_with_first_value() {
        let data = vec![10.0_f64, 11.0, 12.0, 13.0];
        let result = ema(&data, 3).unwrap();
        assert_eq!(result[0], 10.0);
        assert!(approx_eq(result[1], 10.5, EPSILON));
        assert!(approx_eq(result[2], 11.25, EPSILON));
        assert!(approx_eq(result[3], 12.125, EPSILON));
    }

    #[test]
    fn test_ema_leading_nan() {
        let data = vec![f64::NAN, f64::NAN, 4.0, 6.0];
        let result = ema(&data, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(result[2], 4.0);
        assert_eq!(result[3], 5.0);
    }

    #[test]
    fn test_ema_reseeds_after_nan() {
        let data = vec![1.0_f64, 3.0, f64::NAN, 8.0, 10.0];
        let result = ema(&data, 3).unwrap();
        assert!(result[2].is_nan());
        assert_eq!(result[3], 8.0);
        assert_eq!(result[4], 9.0);
    }

    #[test]
    fn test_ema_period_one_is_identity() {
        let data = vec![3.0_f64, -1.0, 7.5];
        assert_eq!(ema(&data, 1).unwrap(), data);
    }

    #[test]
    fn test_rma_warmup() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = rma(&data, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 2.0, EPSILON));
        // (2 * 2 + 4) / 3
        assert!(approx_eq(result[3], 8.0 / 3.0, EPSILON));
    }

    #[test]
    fn test_rma_warmup_after_leading_nan() {
        let data = vec![f64::NAN, 2.0, 4.0, 6.0];
        let result = rma(&data, 2).unwrap();
        assert!(result[1].is_nan());
        assert_eq!(result[2], 3.0);
        assert_eq!(result[3], 4.5);
    }

    #[test]
    fn test_rma_constant_fixed_point() {
        let data = vec![5.0_f64; 40];
        let result = rma(&data, 14).unwrap();
        for v in &result[13..] {
            assert!(approx_eq(*v, 5.0, EPSILON));
        }
    }

    #[test]
    fn test_rma_period_longer_than_data() {
        let result = rma(&[1.0_f64, 2.0], 3).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_ema_with_alpha() {
        let data = vec![0.0_f64, 10.0];
        let result = ema_with_alpha(&data, 0.1).unwrap();
        assert!(approx_eq(result[1], 1.0, EPSILON));

        assert!(matches!(
            ema_with_alpha(&data, 0.0),
            Err(Error::InvalidPeriod { .. })
        ));
        assert!(matches!(
            ema_with_alpha(&data, 1.5),
            Err(Error::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_ema_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(ema(&empty, 3), Err(Error::EmptyInput)));
        assert!(matches!(
            rma(&[1.0_f64], 0),
            Err(Error::InvalidPeriod { .. })
        ));
    }
}
