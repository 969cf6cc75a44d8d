//! NaN-aware running sums over a trailing window.
//!
//! The sum is maintained with one add and one subtract per element, so a
//! window of any length costs O(1) per output. Undefined samples are never
//! added to the sum; instead [`NanWindow`] counts how many are inside the
//! window, and the output is undefined while that count is non-zero.
//!
//! # Example
//!
//! ```
//! use ta_kernel::kernels::rolling_sum::rolling_sum;
//!
//! let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0];
//! let sums = rolling_sum(&data, 2).unwrap();
//!
//! assert!(sums[0].is_nan());
//! assert_eq!(sums[1], 3.0);
//! assert!(sums[2].is_nan()); // NaN entered the window
//! assert!(sums[3].is_nan()); // still inside
//! assert_eq!(sums[4], 9.0);
//! ```

use crate::error::Result;
use crate::traits::{validate_buffer, validate_input, SeriesElement};

/// Tracks the number of undefined samples inside a trailing window.
#[derive(Debug, Clone, Copy)]
pub struct NanWindow {
    period: usize,
    count: usize,
}

impl NanWindow {
    /// Creates a tracker for windows of `period` samples.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period, count: 0 }
    }

    /// Admits `data[index]` (and evicts `data[index - period]`).
    ///
    /// Returns `true` when the window ending at `index` is full and holds no
    /// undefined sample. Must be called for consecutive indices from 0.
    #[inline]
    pub fn admit<T: SeriesElement>(&mut self, data: &[T], index: usize) -> bool {
        if data[index].is_nan() {
            self.count += 1;
        }
        if index >= self.period && data[index - self.period].is_nan() {
            self.count -= 1;
        }
        index + 1 >= self.period && self.count == 0
    }

    /// Number of undefined samples currently inside the window.
    #[inline]
    #[must_use]
    pub const fn nan_count(&self) -> usize {
        self.count
    }
}

/// Computes the rolling sum into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn rolling_sum_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    validate_input(data, period, "sum")?;
    validate_buffer(output, data.len(), "sum")?;

    let mut window = NanWindow::new(period);
    let mut sum = T::zero();

    for i in 0..data.len() {
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

        output[i] = if window.admit(data, i) { sum } else { T::nan() };
    }

    Ok(())
}

/// Computes the rolling sum of a series over `period` samples.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn rolling_sum<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_sum_into(data, period, &mut output)?;
    Ok(output)
}
