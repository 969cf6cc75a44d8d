//! Relative Strength Index (RSI).
//!
//! # Algorithm
//!
//! 1. Calculate price changes (current - previous); the first bar has no
//!    previous sample and counts as a change of 0
//! 2. Separate changes into gains and losses (stored as positive)
//! 3. Smooth both with Wilder's RMA
//! 4. RSI = 100 - (100 / (1 + Average Gain / Average Loss))
//!
//! # Boundary Conditions
//!
//! - **No losses**: RSI = 100, including a window with no movement at all
//! - **No gains**: RSI = 0
//!
//! # Example
//!
//! ```
//! use ta_kernel::oscillators::rsi;
//!
//! let result = rsi(&[10.0_f64, 11.0, 12.0], 2).unwrap();
//! assert!(result[0].is_nan());
//! assert_eq!(&result[1..], &[100.0, 100.0]);
//! ```

use crate::error::Result;
use crate::ma::ema::rma;
use crate::traits::{validate_buffer, validate_input, SeriesElement};

/// `100 - 100 / (1 + up / down)`, with a zero `down` mapped to 100.
#[inline]
pub(crate) fn strength_index<T: SeriesElement>(up: T, down: T) -> T {
    let hundred = T::hundred();
    if up.is_nan() || down.is_nan() {
        T::nan()
    } else if down == T::zero() {
        hundred
    } else {
        hundred - hundred / (T::one() + up / down)
    }
}

/// Computes the RSI into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn rsi_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "rsi")?;
    validate_buffer(output, data.len(), "rsi")?;

    let mut gains = vec![T::zero(); data.len()];
    let mut losses = vec![T::zero(); data.len()];
    for i in 1..data.len() {
        let change = data[i] - data[i - 1];
        if change.is_nan() {
            gains[i] = T::nan();
            losses[i] = T::nan();
        } else if change > T::zero() {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }
    if data[0].is_nan() {
        gains[0] = T::nan();
        losses[0] = T::nan();
    }

    let avg_gain = rma(&gains, period)?;
    let avg_loss = rma(&losses, period)?;

    for (i, out) in output.iter_mut().enumerate().take(data.len()) {
        *out = strength_index(avg_gain[i], avg_loss[i]);
    }

    Ok(())
}

/// Computes the Relative Strength Index using Wilder's smoothing.
///
/// The first defined output is at index `period - 1`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rsi_into(data, period, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_rsi_all_gains() {
        let data: Vec<f64> = (0..20).map(f64::from).collect();
        let result = rsi(&data, 14).unwrap();
        assert!(result[12].is_nan());
        for v in &result[13..] {
            assert_eq!(*v, 100.0);
        }
    }

    #[test]
    fn test_rsi_all_losses() {
        let data: Vec<f64> = (0..20).map(|i| 100.0 - f64::from(i)).collect();
        let result = rsi(&data, 5).unwrap();
        // the zero change at bar 0 is part of the first window, gains stay 0
        for v in &result[4..] {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn test_rsi_no_movement_is_100() {
        let result = rsi(&[5.0_f64; 10], 3).unwrap();
        assert!(result[2..].iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_rsi_known_values() {
        // changes: 0, +2, -1 -> gains [0, 2, 0], losses [0, 0, 1]
        // RMA(3) at index 2: gain 2/3, loss 1/3 -> RS 2 -> RSI 200/3
        let data = vec![10.0_f64, 12.0, 11.0];
        let result = rsi(&data, 3).unwrap();
        assert!(approx_eq(result[2], 200.0 / 3.0, EPSILON));
    }

    #[test]
    fn test_rsi_range() {
        let data: Vec<f64> = (0..200)
            .map(|i| 50.0 + (i as f64 * 0.3).sin() * 10.0 + (i as f64 * 0.05).cos())
            .collect();
        let result = rsi(&data, 14).unwrap();
        for v in result.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn test_rsi_nan_reseeds() {
        let mut data: Vec<f64> = (0..12).map(f64::from).collect();
        data[5] = f64::NAN;
        let result = rsi(&data, 3).unwrap();
        // changes at 5 and 6 are undefined, RMA needs 3 defined changes again
        assert!(result[5].is_nan());
        assert!(result[8].is_nan());
        assert_eq!(result[9], 100.0);
    }

    #[test]
    fn test_strength_index() {
        assert_eq!(strength_index(1.0_f64, 0.0), 100.0);
        assert_eq!(strength_index(0.0_f64, 1.0), 0.0);
        assert_eq!(strength_index(1.0_f64, 1.0), 50.0);
        assert!(strength_index(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_rsi_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(rsi(&empty, 14), Err(Error::EmptyInput)));
        assert!(matches!(rsi(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
    }
}
