//! Simple Moving Average (SMA).
//!
//! # Algorithm
//!
//! The window sum is carried forward with one add and one subtract per element,
//! so the cost per output is O(1) whatever the period. Undefined samples never
//! enter the sum: a [`NanWindow`] counts them, and the output stays `NaN` until
//! the window holds `period` consecutive defined samples again.
//!
//! # Formula
//!
//! ```text
//! SMA = (P1 + P2 + ... + Pn) / n
//! ```
//!
//! # Example
//!
//! ```
//! use ta_kernel::ma::sma;
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert_eq!(result[2], 2.0);
//! assert_eq!(result[9], 9.0);
//! ```

use crate::error::Result;
use crate::kernels::rolling_sum::NanWindow;
use crate::traits::{validate_buffer, validate_input, SeriesElement};

/// Computes the Simple Moving Average into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn sma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "sma")?;
    validate_buffer(output, data.len(), "sma")?;

    let period_t = T::from_usize(period)?;
    let mut window = NanWindow::new(period);
    let mut sum = T::zero();

    for i in 0..data.len() {
        // Rolling sum: subtract oldest, add new value
        if i >= period {
            let old = data[i - period];
            if !old.is_nan() {
                sum = sum - old;
            }
        }
        let value = data[i];
        if !value.is_nan() {
            sum = sum + value;
        }

        output[i] = if window.admit(data, i) {
            sum / period_t
        } else {
            T::nan()
        };
    }

    Ok(())
}

/// Computes the Simple Moving Average (SMA) of a data series.
///
/// The first `period - 1` values are `NaN`, as is every output whose window
/// contains an undefined sample.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    sma_into(data, period, &mut output)?;
    Ok(output)
}
