//! Money Flow Index (MFI).
//!
//! A volume-weighted RSI.
//!
//! # Formula
//!
//! ```text
//! Typical Price  = (High + Low + Close) / 3
//! Raw Money Flow = Typical Price × Volume
//! MFI            = 100 - 100 / (1 + RMA(positive flow) / RMA(negative flow))
//! ```
//!
//! A bar's flow is positive when its typical price rose from the previous
//! bar and negative when it fell. Unchanged bars and the first bar add to
//! neither side. No negative flow gives MFI 100.

use crate::error::Result;
use crate::ma::ema::rma;
use crate::oscillators::rsi::strength_index;
use crate::traits::{validate_buffer, validate_period, validate_same_len, SeriesElement};

/// Computes the MFI into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than the inputs
pub fn mfi_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    validate_period(period)?;
    let n = validate_same_len(&[
        ("high", high),
        ("low", low),
        ("close", close),
        ("volume", volume),
    ])?;
    validate_buffer(output, n, "mfi")?;

    let three = T::two() + T::one();
    let typical: Vec<T> = (0..n).map(|i| (high[i] + low[i] + close[i]) / three).collect();

    let mut positive = vec![T::zero(); n];
    let mut negative = vec![T::zero(); n];
    for i in 0..n {
        let flow = typical[i] * volume[i];
        if flow.is_nan() || (i > 0 && typical[i - 1].is_nan()) {
            positive[i] = T::nan();
            negative[i] = T::nan();
        } else if i > 0 && typical[i] > typical[i - 1] {
            positive[i] = flow;
        } else if i > 0 && typical[i] < typical[i - 1] {
            negative[i] = flow;
        }
    }

    let avg_positive = rma(&positive, period)?;
    let avg_negative = rma(&negative, period)?;

    for (i, out) in output.iter_mut().enumerate().take(n) {
        *out = strength_index(avg_positive[i], avg_negative[i]);
    }

    Ok(())
}

/// Computes the Money Flow Index.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
///
/// # Example
///
/// ```
/// use ta_kernel::oscillators::mfi;
///
/// let high = vec![10.0_f64, 11.0, 12.0];
/// let low = vec![8.0_f64, 9.0, 10.0];
/// let close = vec![9.0_f64, 10.0, 11.0];
/// let volume = vec![100.0_f64, 100.0, 100.0];
///
/// let result = mfi(&high, &low, &close, &volume, 2).unwrap();
/// assert!(result[0].is_nan());
/// assert_eq!(result[1], 100.0); // rising typical price, no negative flow
/// ```
pub fn mfi<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); high.len()];
    mfi_into(high, low, close, volume, period, &mut output)?;
    Ok(output)
}
