//! Rolling extrema using monotonic deque for O(n) rolling max/min.
//!
//! The monotonic deque algorithm maintains a double-ended queue of indices such that:
//! - For rolling max: values at those indices are in decreasing order
//! - For rolling min: values at those indices are in increasing order
//!
//! The front of the deque is the extremum of the current window, giving O(1)
//! amortized time per element instead of O(k) for naive scans.
//!
//! A window containing an undefined sample has an undefined extremum; the
//! deque itself only ever holds defined samples.
//!
//! # Example
//!
//! ```
//! use ta_kernel::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max_result = rolling_max(&data, 3).unwrap();
//! assert_eq!(max_result[2], 4.0); // max of [3, 1, 4]
//! assert_eq!(max_result[5], 9.0); // max of [1, 5, 9]
//!
//! let min_result = rolling_min(&data, 3).unwrap();
//! assert_eq!(min_result[2], 1.0); // min of [3, 1, 4]
//! assert_eq!(min_result[5], 1.0); // min of [1, 5, 9]
//! ```

use std::collections::VecDeque;

use crate::error::Result;
use crate::kernels::rolling_sum::NanWindow;
use crate::traits::{fill_if_shorter_than_window, validate_buffer, validate_input, SeriesElement};

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Rolling maximum.
    Max,
    /// Rolling minimum.
    Min,
}

/// A monotonic deque of indices for tracking one rolling extremum.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    period: usize,
    kind: Extremum,
}

impl MonotonicDeque {
    /// Creates a deque for windows of `period` samples over `len` inputs.
    #[must_use]
    pub fn new(period: usize, kind: Extremum, len: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period.min(len)),
            period,
            kind,
        }
    }

    /// Pushes `data[index]` and evicts indices that left the window.
    ///
    /// Undefined samples are skipped; callers track them separately.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        let value = data[index];

        if !value.is_nan() {
            while let Some(&back) = self.deque.back() {
                let dominated = match self.kind {
                    Extremum::Max => value >= data[back],
                    Extremum::Min => value <= data[back],
                };
                if dominated {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }

        if index + 1 >= self.period {
            let window_start = index + 1 - self.period;
            while self.deque.front().is_some_and(|&front| front < window_start) {
                self.deque.pop_front();
            }
        }
    }

    /// Index of the current extremum, `None` if the deque is empty.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Current extremum value, `NaN` if the deque is empty.
    #[inline]
    pub fn extremum<T: SeriesElement>(&self, data: &[T]) -> T {
        self.front_index().map_or_else(T::nan, |idx| data[idx])
    }
}

fn rolling_extremum_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Extremum,
    output: &mut [T],
    indicator: &'static str,
) -> Result<()> {
    validate_input(data, period, indicator)?;
    validate_buffer(output, data.len(), indicator)?;
    if fill_if_shorter_than_window(data.len(), period, output) {
        return Ok(());
    }

    let mut deque = MonotonicDeque::new(period, kind, data.len());
    let mut window = NanWindow::new(period);

    for i in 0..data.len() {
        deque.push(i, data);
        output[i] = if window.admit(data, i) {
            deque.extremum(data)
        } else {
            T::nan()
        };
    }

    Ok(())
}

/// Computes the rolling maximum into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn rolling_max_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    rolling_extremum_into(data, period, Extremum::Max, output, "highest")
}

/// Computes the rolling minimum into a pre-allocated buffer.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
pub fn rolling_min_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [T],
) -> Result<()> {
    rolling_extremum_into(data, period, Extremum::Min, output, "lowest")
}

/// Computes the rolling maximum using a monotonic deque.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::kernels::rolling_extrema::rolling_max;
///
/// let data = vec![5.0_f64, 3.0, 8.0, 2.0, 9.0, 1.0];
/// let result = rolling_max(&data, 3).unwrap();
///
/// assert!(result[0].is_nan());
/// assert!(result[1].is_nan());
/// assert_eq!(&result[2..], &[8.0, 8.0, 9.0, 9.0]);
/// ```
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_max_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the rolling minimum using a monotonic deque.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    rolling_min_into(data, period, &mut output)?;
    Ok(output)
}

/// Naive O(n×k) rolling maximum, used as a reference in tests.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn rolling_max_naive<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rolling_naive(data, period, |a, b| a.max(b), "highest")
}

/// Naive O(n×k) rolling minimum, used as a reference in tests.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn rolling_min_naive<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rolling_naive(data, period, |a, b| a.min(b), "lowest")
}

fn rolling_naive<T: SeriesElement>(
    data: &[T],
    period: usize,
    pick: fn(T, T) -> T,
    indicator: &'static str,
) -> Result<Vec<T>> {
    validate_input(data, period, indicator)?;

    let mut output = vec![T::nan(); data.len()];
    for i in (period - 1)..data.len() {
        let window = &data[i + 1 - period..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        output[i] = window[1..].iter().fold(window[0], |acc, &v| pick(acc, v));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::all_approx_eq;

    #[test]
    fn test_rolling_max_basic() {
        let data = vec![5.0_f64, 3.0, 8.0, 2.0, 9.0, 1.0];
        let result = rolling_max(&data, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(&result[2..], &[8.0, 8.0, 9.0, 9.0]);
    }

    #[test]
    fn test_rolling_min_basic() {
        let data = vec![5.0_f64, 3.0, 8.0, 2.0, 9.0, 1.0];
        let result = rolling_min(&data, 3).unwrap();
        assert_eq!(&result[2..], &[3.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_rolling_max_period_one() {
        let data = vec![1.0_f64, 3.0, 2.0];
        assert_eq!(rolling_max(&data, 1).unwrap(), data);
    }

    #[test]
    fn test_rolling_extrema_ties() {
        let data = vec![2.0_f64, 2.0, 2.0, 1.0];
        assert_eq!(&rolling_max(&data, 2).unwrap()[1..], &[2.0, 2.0, 2.0]);
        assert_eq!(&rolling_min(&data, 2).unwrap()[1..], &[2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_rolling_max_nan_makes_window_undefined() {
        let data = vec![1.0_f64, f64::NAN, 3.0, 4.0, 2.0];
        let result = rolling_max(&data, 2).unwrap();
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert_eq!(result[3], 4.0);
        assert_eq!(result[4], 4.0);
    }

    #[test]
    fn test_rolling_max_matches_naive() {
        let data: Vec<f64> = (0..200)
            .map(|i| ((i as f64) * 0.37).sin() * 10.0 + (i % 7) as f64)
            .collect();
        for period in [1, 2, 5, 17, 64, 200, 250] {
            let fast = rolling_max(&data, period).unwrap();
            let naive = rolling_max_naive(&data, period).unwrap();
            assert!(all_approx_eq(&fast, &naive, f64::EPSILON), "period {period}");

            let fast = rolling_min(&data, period).unwrap();
            let naive = rolling_min_naive(&data, period).unwrap();
            assert!(all_approx_eq(&fast, &naive, f64::EPSILON), "period {period}");
        }
    }

    #[test]
    fn test_rolling_extrema_huge_period() {
        let data = vec![1.0_f64, 2.0];
        for period in [3, 3_000_000, usize::MAX] {
            let max = rolling_max(&data, period).unwrap();
            let min = rolling_min(&data, period).unwrap();
            assert_eq!(max.len(), 2);
            assert!(max.iter().chain(&min).all(|v| v.is_nan()), "period {period}");
        }
    }

    #[test]
    fn test_deque_capacity_bounded_by_input() {
        let deque = MonotonicDeque::new(usize::MAX, Extremum::Max, 4);
        assert_eq!(deque.front_index(), None);
    }

    #[test]
    fn test_rolling_max_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(rolling_max(&empty, 3), Err(Error::EmptyInput)));
        assert!(matches!(
            rolling_min(&[1.0_f64], 0),
            Err(Error::InvalidPeriod { .. })
        ));
    }
}
