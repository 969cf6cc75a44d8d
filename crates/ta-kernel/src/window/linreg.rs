//! Least-squares linear regression over a trailing window.
//!
//! # Formula
//!
//! With `x = 0, 1, ..., n-1` over the window (oldest to newest):
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! linreg    = intercept + slope · (n − 1 − offset)
//! ```
//!
//! `offset = 0` evaluates the fitted line at the newest bar; a positive offset
//! evaluates it `offset` bars earlier and a negative one projects it forward.

use crate::error::Result;
use crate::kernels::rolling_sum::NanWindow;
use crate::traits::{fill_if_shorter_than_window, validate_buffer, validate_input, SeriesElement};

/// Fits the window ending at every index and hands `(slope, intercept)` to `emit`.
fn regression_core<T, F>(data: &[T], period: usize, output: &mut [T], emit: F) -> Result<()>
where
    T: SeriesElement,
    F: Fn(T, T) -> T,
{
    if fill_if_shorter_than_window(data.len(), period, output) {
        return Ok(());
    }

    let period_t = T::from_usize(period)?;
    let last_x = period_t - T::one();

    // Σx and Σx² for x = 0..period-1
    let sum_x = period_t * last_x / T::two();
    let sum_x2 = last_x * period_t * (T::two() * period_t - T::one()) / T::from_usize(6)?;
    #[allow(clippy::suspicious_operation_groupings)]
    let denom = period_t * sum_x2 - sum_x * sum_x;

    let mut window = NanWindow::new(period);

    for i in 0..data.len() {
        if !window.admit(data, i) {
            output[i] = T::nan();
            continue;
        }

        let mut sum_y = T::zero();
        let mut sum_xy = T::zero();
        for (x_idx, &y) in data[i + 1 - period..=i].iter().enumerate() {
            let x = T::from_usize(x_idx)?;
            sum_y = sum_y + y;
            sum_xy = sum_xy + x * y;
        }

        // A single-sample window has no slope.
        let slope = if denom == T::zero() {
            T::zero()
        } else {
            (period_t * sum_xy - sum_x * sum_y) / denom
        };
        let intercept = (sum_y - slope * sum_x) / period_t;

        output[i] = emit(slope, intercept);
    }

    Ok(())
}

/// Computes the linear regression value into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn linreg_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    offset: i32,
    output: &mut [T],
) -> Result<()> {
    validate_input(data, period, "linreg")?;
    validate_buffer(output, data.len(), "linreg")?;

    let last_x = T::from_usize(period - 1)?;
    let x = last_x - T::from_i32(offset)?;
    regression_core(data, period, output, |slope, intercept| intercept + slope * x)
}

/// Computes the value of the least-squares line fitted to each trailing window.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::window::linreg;
///
/// // A perfect line is reproduced exactly.
/// let data = vec![1.0_f64, 3.0, 5.0, 7.0, 9.0];
/// let result = linreg(&data, 3, 0).unwrap();
/// assert!(result[1].is_nan());
/// assert!((result[4] - 9.0).abs() < 1e-10);
///
/// // offset 1 evaluates the line one bar back
/// let back = linreg(&data, 3, 1).unwrap();
/// assert!((back[4] - 7.0).abs() < 1e-10);
/// ```
pub fn linreg<T: SeriesElement>(data: &[T], period: usize, offset: i32) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    linreg_into(data, period, offset, &mut output)?;
    Ok(output)
}

/// Computes the slope of the least-squares line fitted to each trailing window.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn linreg_slope<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_input(data, period, "linreg_slope")?;

    let mut output = vec![T::nan(); data.len()];
    regression_core(data, period, &mut output, |slope, _| slope)?;
    Ok(output)
}
