//! Commodity Channel Index (CCI).
//!
//! # Formula
//!
//! ```text
//! CCI = (x - SMA(x, period)) / (0.015 × MAD(x, period))
//! ```
//!
//! Where MAD is the mean absolute deviation from the window mean. The source
//! is usually the typical price `(High + Low + Close) / 3`. A window without
//! deviation has CCI 0.

use crate::error::Result;
use crate::ma::sma::sma;
use crate::traits::{validate_buffer, validate_input, SeriesElement};
use crate::window::stdev::mean_abs_dev;

/// Lambert's scaling constant.
const CCI_SCALE: f64 = 0.015;

/// Computes the CCI into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn cci_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "cci")?;
    validate_buffer(output, data.len(), "cci")?;

    let scale = T::from_f64(CCI_SCALE)?;
    let mean = sma(data, period)?;
    let deviation = mean_abs_dev(data, period)?;

    for (i, out) in output.iter_mut().enumerate().take(data.len()) {
        let (m, d) = (mean[i], deviation[i]);
        *out = if m.is_nan() || d.is_nan() {
            T::nan()
        } else if d == T::zero() {
            T::zero()
        } else {
            (data[i] - m) / (scale * d)
        };
    }

    Ok(())
}

/// Computes the Commodity Channel Index of a source series.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::oscillators::cci;
///
/// let data = vec![1.0_f64, 2.0, 3.0];
/// let result = cci(&data, 3).unwrap();
/// // mean 2, MAD 2/3 -> (3 - 2) / (0.015 × 2/3)
/// assert!((result[2] - 100.0).abs() < 1e-9);
/// ```
pub fn cci<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    cci_into(data, period, &mut output)?;
    Ok(output)
}
