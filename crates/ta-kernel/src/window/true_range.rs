//! True Range.
//!
//! # Formula
//!
//! ```text
//! TR[i] = max(
//!     High[i] - Low[i],
//!     |High[i] - Close[i-1]|,
//!     |Low[i] - Close[i-1]|
//! )
//! ```
//!
//! The first bar has no previous close, so its range is `High[0] - Low[0]`.
//! The same fallback applies whenever the previous close is undefined. An
//! undefined high or low makes the bar's range undefined.
//!
//! # Example
//!
//! ```
//! use ta_kernel::window::true_range;
//!
//! let high = vec![10.0_f64, 11.0, 12.0];
//! let low = vec![9.0_f64, 10.0, 11.0];
//! let close = vec![9.5_f64, 10.5, 11.5];
//!
//! let tr = true_range(&high, &low, &close).unwrap();
//! assert_eq!(tr[0], 1.0);
//! assert_eq!(tr[2], 1.5); // gap from the 10.5 close to the 12.0 high
//! ```

use crate::error::Result;
use crate::traits::{validate_buffer, validate_same_len, SeriesElement};

#[inline]
fn bar_range<T: SeriesElement>(high: T, low: T, prev_close: Option<T>) -> T {
    if high.is_nan() || low.is_nan() {
        return T::nan();
    }
    let range = high - low;
    match prev_close {
        Some(pc) if !pc.is_nan() => range.max((high - pc).abs()).max((low - pc).abs()),
        _ => range,
    }
}

/// Computes the true range into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than the inputs
pub fn true_range_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    output: &mut [T],
) -> Result<()> {
    let n = validate_same_len(&[("high", high), ("low", low), ("close", close)])?;
    validate_buffer(output, n, "true_range")?;

    output[0] = bar_range(high[0], low[0], None);
    for i in 1..n {
        output[i] = bar_range(high[i], low[i], Some(close[i - 1]));
    }

    Ok(())
}

/// Computes the true range of every bar.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); high.len()];
    true_range_into(high, low, close, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_true_range_first_bar_is_high_minus_low() {
        let tr = true_range(&[10.0_f64], &[7.5], &[8.0]).unwrap();
        assert_eq!(tr, vec![2.5]);
    }

    #[test]
    fn test_true_range_gaps() {
        let high = vec![10.0_f64, 15.0, 8.0];
        let low = vec![9.0_f64, 14.0, 7.0];
        let close = vec![9.5_f64, 14.5, 7.5];
        let tr = true_range(&high, &low, &close).unwrap();
        // gap up: |15 - 9.5| = 5.5
        assert_eq!(tr[1], 5.5);
        // gap down: |7 - 14.5| = 7.5
        assert_eq!(tr[2], 7.5);
    }

    #[test]
    fn test_true_range_nan_handling() {
        let high = vec![10.0_f64, f64::NAN, 12.0];
        let low = vec![9.0_f64, 10.0, 11.0];
        let close = vec![f64::NAN, 10.5, 11.5];
        let tr = true_range(&high, &low, &close).unwrap();
        assert!(tr[1].is_nan());
        assert_eq!(tr[2], 1.5);

        let tr = true_range(&[10.0_f64, 12.0], &[9.0, 11.0], &[f64::NAN, 11.5]).unwrap();
        // undefined previous close falls back to high - low
        assert_eq!(tr[1], 1.0);
    }

    #[test]
    fn test_true_range_length_mismatch() {
        let result = true_range(&[1.0_f64, 2.0], &[0.5], &[1.0, 1.5]);
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_true_range_empty() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(
            true_range(&empty, &empty, &empty),
            Err(Error::EmptyInput)
        ));
    }
}
