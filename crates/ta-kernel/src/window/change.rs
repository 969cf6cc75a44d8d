//! Difference between a sample and the sample `n` bars earlier.

use crate::error::Result;
use crate::traits::{validate_buffer, validate_input, SeriesElement};

/// Computes `data[i] - data[i - lag]` into a pre-allocated buffer.
///
/// The first `lag` outputs are `NaN`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `lag` is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn change_into<T: SeriesElement>(data: &[T], lag: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, lag, "change")?;
    validate_buffer(output, data.len(), "change")?;

    for (i, out) in output.iter_mut().enumerate().take(data.len()) {
        *out = if i >= lag {
            data[i] - data[i - lag]
        } else {
            T::nan()
        };
    }

    Ok(())
}

/// Computes the change of a series over `lag` bars.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `lag` is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::window::change;
///
/// let result = change(&[1.0_f64, 4.0, 9.0, 16.0], 2).unwrap();
/// assert!(result[1].is_nan());
/// assert_eq!(&result[2..], &[8.0, 12.0]);
/// ```
pub fn change<T: SeriesElement>(data: &[T], lag: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    change_into(data, lag, &mut output)?;
    Ok(output)
}
