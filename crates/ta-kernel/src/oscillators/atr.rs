//! Average True Range (ATR).
//!
//! Wilder's RMA of the true range. Since the first bar's true range is
//! `High - Low`, the first defined ATR is at index `period - 1`.
//!
//! # Example
//!
//! ```
//! use ta_kernel::oscillators::atr;
//!
//! let high = vec![11.0_f64, 12.0, 13.0, 14.0];
//! let low = vec![10.0_f64, 11.0, 12.0, 13.0];
//! let close = vec![10.5_f64, 11.5, 12.5, 13.5];
//!
//! let result = atr(&high, &low, &close, 2).unwrap();
//! assert!(result[0].is_nan());
//! assert_eq!(result[1], 1.25); // mean of TR [1.0, 1.5]
//! ```

use crate::error::Result;
use crate::ma::ema::rma_into;
use crate::traits::{validate_buffer, validate_period, validate_same_len, SeriesElement};
use crate::window::true_range::true_range;

/// Computes the ATR into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than the inputs
pub fn atr_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    validate_period(period)?;
    let n = validate_same_len(&[("high", high), ("low", low), ("close", close)])?;
    validate_buffer(output, n, "atr")?;

    let tr = true_range(high, low, close)?;
    rma_into(&tr, period, output)
}

/// Computes the Average True Range.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); high.len()];
    atr_into(high, low, close, period, &mut output)?;
    Ok(output)
}
