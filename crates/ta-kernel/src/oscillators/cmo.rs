//! Chande Momentum Oscillator (CMO).
//!
//! # Formula
//!
//! ```text
//! CMO = 100 × (Σup − Σdown) / (Σup + Σdown)
//! ```
//!
//! Where `up` and `down` are the positive and negative parts of the one-bar
//! change, summed over the trailing `period` changes. The first bar has no
//! change, so the first defined output is at index `period`. A window without
//! movement has CMO 0.

use crate::error::Result;
use crate::kernels::rolling_sum::rolling_sum;
use crate::traits::{validate_buffer, validate_input, SeriesElement};

/// Rolling `(Σup, Σdown)` of one-bar changes, `NaN` where undefined.
pub(crate) fn up_down_sums<T: SeriesElement>(data: &[T], period: usize) -> Result<(Vec<T>, Vec<T>)> {
    let mut up = vec![T::nan(); data.len()];
    let mut down = vec![T::nan(); data.len()];
    for i in 1..data.len() {
        let change = data[i] - data[i - 1];
        if change.is_nan() {
            continue;
        }
        up[i] = change.max(T::zero());
        down[i] = (-change).max(T::zero());
    }
    Ok((rolling_sum(&up, period)?, rolling_sum(&down, period)?))
}

/// Computes the CMO into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn cmo_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    validate_input(data, period, "cmo")?;
    validate_buffer(output, data.len(), "cmo")?;

    let hundred = T::hundred();
    let (up, down) = up_down_sums(data, period)?;

    for (i, out) in output.iter_mut().enumerate().take(data.len()) {
        let total = up[i] + down[i];
        *out = if total.is_nan() {
            T::nan()
        } else if total == T::zero() {
            T::zero()
        } else {
            hundred * (up[i] - down[i]) / total
        };
    }

    Ok(())
}

/// Computes the Chande Momentum Oscillator, ranging from -100 to +100.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::oscillators::cmo;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 11.0];
/// let result = cmo(&data, 2).unwrap();
///
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 100.0);
/// assert_eq!(result[3], 0.0); // one up, one down
/// ```
pub fn cmo<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    cmo_into(data, period, &mut output)?;
    Ok(output)
}
