//! Volume-Weighted Moving Average (VWMA).
//!
//! # Formula
//!
//! ```text
//! VWMA = Σ(price × volume) / Σ(volume)
//! ```
//!
//! Both sums run over the same trailing window. A window whose volume sums to
//! zero has no weighted average and yields `NaN`, as does a window holding an
//! undefined price or volume.

use crate::error::Result;
use crate::kernels::rolling_sum::rolling_sum_into;
use crate::traits::{validate_buffer, validate_period, validate_same_len, SeriesElement};

/// Computes the VWMA into a pre-allocated output buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::LengthMismatch` if `data` and `volume` differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn vwma_into<T: SeriesElement>(
    data: &[T],
    volume: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    validate_period(period)?;
    let n = validate_same_len(&[("data", data), ("volume", volume)])?;
    validate_buffer(output, n, "vwma")?;

    let weighted: Vec<T> = data.iter().zip(volume).map(|(&x, &v)| x * v).collect();
    let mut volume_sum = vec![T::nan(); n];
    rolling_sum_into(&weighted, period, output)?;
    rolling_sum_into(volume, period, &mut volume_sum)?;

    for (out, &vs) in output.iter_mut().zip(&volume_sum) {
        *out = if vs == T::zero() { T::nan() } else { *out / vs };
    }

    Ok(())
}

/// Computes the Volume-Weighted Moving Average of `data` weighted by `volume`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::LengthMismatch` if `data` and `volume` differ in length
///
/// # Example
///
/// ```
/// use ta_kernel::ma::vwma;
///
/// let price = vec![10.0_f64, 20.0, 30.0];
/// let volume = vec![1.0_f64, 3.0, 0.0];
/// let result = vwma(&price, &volume, 2).unwrap();
///
/// assert!(result[0].is_nan());
/// assert_eq!(result[1], 17.5); // (10 + 60) / 4
/// assert_eq!(result[2], 20.0); // (60 + 0) / 3
/// ```
pub fn vwma<T: SeriesElement>(data: &[T], volume: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    vwma_into(data, volume, period, &mut output)?;
    Ok(output)
}
