//! Rolling dispersion statistics: variance, standard deviation and mean
//! absolute deviation.
//!
//! Each window is evaluated with a two-pass mean-then-deviation scan.
//!
//! # Formula
//!
//! ```text
//! mean     = Σx / n
//! variance = Σ(x - mean)² / n          (population, divide by n)
//! stdev    = √variance
//! mad      = Σ|x - mean| / n
//! ```

use crate::error::Result;
use crate::kernels::rolling_sum::NanWindow;
use crate::traits::{validate_buffer, validate_input, SeriesElement};

#[derive(Clone, Copy)]
enum Dispersion {
    Variance,
    StdDev,
    MeanAbsDev,
}

fn dispersion_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Dispersion,
    output: &mut [T],
    indicator: &'static str,
) -> Result<()> {
    validate_input(data, period, indicator)?;
    validate_buffer(output, data.len(), indicator)?;

    let period_t = T::from_usize(period)?;
    let mut window = NanWindow::new(period);

    for i in 0..data.len() {
        if !window.admit(data, i) {
            output[i] = T::nan();
            continue;
        }

        let samples = &data[i + 1 - period..=i];
        let mean = samples.iter().fold(T::zero(), |acc, &x| acc + x) / period_t;

        output[i] = match kind {
            Dispersion::Variance | Dispersion::StdDev => {
                let var = samples.iter().fold(T::zero(), |acc, &x| {
                    let d = x - mean;
                    acc + d * d
                }) / period_t;
                match kind {
                    Dispersion::StdDev => var.sqrt(),
                    _ => var,
                }
            }
            Dispersion::MeanAbsDev => {
                samples
                    .iter()
                    .fold(T::zero(), |acc, &x| acc + (x - mean).abs())
                    / period_t
            }
        };
    }

    Ok(())
}

/// Computes the rolling population variance into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn variance_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    dispersion_into(data, period, Dispersion::Variance, output, "variance")
}

/// Computes the rolling population variance.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn variance<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    variance_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the rolling population standard deviation into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn stdev_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<()> {
    dispersion_into(data, period, Dispersion::StdDev, output, "stdev")
}

/// Computes the rolling population standard deviation (divides by `period`).
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::window::stdev;
///
/// let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let result = stdev(&data, 8).unwrap();
/// assert!((result[7] - 2.0).abs() < 1e-12);
/// ```
pub fn stdev<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    stdev_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the rolling mean absolute deviation into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn mean_abs_dev_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    dispersion_into(data, period, Dispersion::MeanAbsDev, output, "mean_abs_dev")
}

/// Computes the rolling mean absolute deviation from the window mean.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn mean_abs_dev<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    mean_abs_dev_into(data, period, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_stdev_population() {
        // Population stdev of [2,4,4,4,5,5,7,9] is exactly 2
        let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = stdev(&data, 8).unwrap();
        for v in &result[..7] {
            assert!(v.is_nan());
        }
        assert!((result[7] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_variance_rolling() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0];
        let result = variance(&data, 2).unwrap();
        assert!(result[0].is_nan());
        for v in &result[1..] {
            assert!((v - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_stdev_constant_is_zero() {
        let data = vec![1.5_f64; 20];
        let result = stdev(&data, 7).unwrap();
        for v in &result[6..] {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn test_stdev_period_one_is_zero() {
        let data = vec![3.0_f64, 9.0, -4.0];
        assert_eq!(stdev(&data, 1).unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mean_abs_dev() {
        // window [1, 2, 3, 6]: mean 3, |dev| = 2,1,0,3 -> 6/4
        let data = vec![1.0_f64, 2.0, 3.0, 6.0];
        let result = mean_abs_dev(&data, 4).unwrap();
        assert!((result[3] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_stdev_nan_window() {
        let data = vec![1.0_f64, f64::NAN, 3.0, 4.0, 5.0];
        let result = stdev(&data, 2).unwrap();
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert!((result[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_stdev_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(stdev(&empty, 2), Err(Error::EmptyInput)));
        assert!(matches!(stdev(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
    }
}
