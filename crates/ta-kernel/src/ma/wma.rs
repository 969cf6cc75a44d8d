//! Weighted Moving Average (WMA).
//!
//! # Algorithm
//!
//! The weighted sum is rolled forward in O(1) per element:
//! - every value already in the window loses one weight unit (subtract the simple sum)
//! - the new value enters with weight `period`
//!
//! When an undefined sample leaves the window, both sums are rebuilt from the
//! window contents.
//!
//! # Formula
//!
//! ```text
//! WMA = (P₁ × n + P₂ × (n-1) + ... + Pₙ × 1) / (n × (n+1) / 2)
//! ```
//!
//! Where `P₁` is the most recent price (highest weight) and `Pₙ` is the oldest.
//!
//! # Example
//!
//! ```
//! use ta_kernel::ma::wma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = wma(&data, 3).unwrap();
//!
//! // (1×1 + 2×2 + 3×3) / 6
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::kernels::rolling_sum::NanWindow;
use crate::traits::{fill_if_shorter_than_window, validate_buffer, validate_input, SeriesElement};

/// Rebuilds `(weighted_sum, simple_sum)` for a fully defined window.
fn window_sums<T: SeriesElement>(window: &[T]) -> Result<(T, T)> {
    let mut weighted_sum = T::zero();
    let mut simple_sum = T::zero();
    for (j, &value) in window.iter().enumerate() {
        weighted_sum = weighted_sum + value * T::from_usize(j + 1)?;
        simple_sum = simple_sum + value;
    }
    Ok((weighted_sum, simple_sum))
}

/// Computes the Weighted Moving Average into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn wma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "wma")?;
    validate_buffer(output, data.len(), "wma")?;

    if fill_if_shorter_than_window(data.len(), period, output) {
        return Ok(());
    }

    // Weight sum: n*(n+1)/2
    let period_t = T::from_usize(period)?;
    let weight_sum = period_t * (period_t + T::one()) / T::two();

    let mut window = NanWindow::new(period);
    let mut weighted_sum = T::zero();
    let mut simple_sum = T::zero();
    let mut sums_valid = false;

    for i in 0..data.len() {
        if !window.admit(data, i) {
            output[i] = T::nan();
            sums_valid = false;
            continue;
        }

        let start = i + 1 - period;
        if sums_valid {
            let new_value = data[i];
            let old_value = data[start - 1];
            weighted_sum = weighted_sum - simple_sum + new_value * period_t;
            simple_sum = simple_sum - old_value + new_value;
        } else {
            (weighted_sum, simple_sum) = window_sums(&data[start..=i])?;
            sums_valid = true;
        }

        output[i] = weighted_sum / weight_sum;
    }

    Ok(())
}

/// Computes the Weighted Moving Average (WMA) of a data series.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    wma_into(data, period, &mut output)?;
    Ok(output)
}
