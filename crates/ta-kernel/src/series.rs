//! Time-aligned numeric series.
//!
//! A [`Series`] pairs one value per bar with the bar timestamps. Every series
//! derived from the same [`Bars`] shares one timestamp buffer, so deriving is
//! an O(N) allocation of values only.
//!
//! `NaN` is the single "undefined" sentinel. Elementwise operations propagate
//! it: if either operand is undefined at an index, the result is undefined at
//! that index.
//!
//! # Example
//!
//! ```
//! use ta_kernel::{Bar, Bars};
//!
//! let bars = Bars::new(vec![
//!     Bar::new(1, 10.0, 12.0, 9.0, 11.0),
//!     Bar::new(2, 11.0, 13.0, 10.0, 12.0),
//! ])
//! .unwrap();
//!
//! let range = bars.high().sub(&bars.low()).unwrap();
//! assert_eq!(range.values(), &[3.0, 3.0]);
//! assert_eq!(range.times(), bars.times());
//! ```

use std::ops::Index;
use std::sync::Arc;

use crate::bar::{Bar, Bars};
use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Result of comparing two series index-by-index.
///
/// `None` marks indices where either operand is undefined.
pub type Mask = Vec<Option<bool>>;

/// An immutable time-indexed numeric sequence.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Series<T = f64> {
    times: Arc<[i64]>,
    values: Vec<T>,
}

#[allow(clippy::should_implement_trait)]
impl<T: SeriesElement> Series<T> {
    /// Pairs a raw value array with bar timestamps.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the arrays differ in length.
    pub fn new(times: Arc<[i64]>, values: Vec<T>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::LengthMismatch {
                description: format!(
                    "series values must match timestamps: times={}, values={}",
                    times.len(),
                    values.len()
                ),
            });
        }
        Ok(Self { times, values })
    }

    /// Projects one value per bar.
    pub fn from_bars<F>(bars: &Bars, f: F) -> Self
    where
        F: Fn(&Bar) -> T,
    {
        Self {
            times: Arc::clone(bars.times()),
            values: bars.as_slice().iter().map(f).collect(),
        }
    }

    /// Builds a series on this series' timestamps.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `values` has a different length.
    pub fn with_values(&self, values: Vec<T>) -> Result<Self> {
        Self::new(Arc::clone(&self.times), values)
    }

    /// Wraps kernel output that is known to have this series' length.
    pub(crate) fn derive(&self, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), self.times.len());
        Self {
            times: Arc::clone(&self.times),
            values,
        }
    }

    /// Applies `f` to every element. `f` sees undefined values as `NaN`.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.derive(self.values.iter().map(|&v| f(v)).collect())
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Timestamp and value at `index`.
    #[inline]
    #[must_use]
    pub fn point(&self, index: usize) -> Option<(i64, T)> {
        Some((*self.times.get(index)?, *self.values.get(index)?))
    }

    /// Value stamped with `time`, the last one if several bars share it.
    #[must_use]
    pub fn value_at_time(&self, time: i64) -> Option<T> {
        let end = self.times.partition_point(|&t| t <= time);
        if end > 0 && self.times[end - 1] == time {
            self.get(end - 1)
        } else {
            None
        }
    }

    /// The shared timestamp buffer.
    #[inline]
    #[must_use]
    pub fn times(&self) -> &Arc<[i64]> {
        &self.times
    }

    /// The values as a slice.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Copies the values into a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Consumes the series, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Iterates over `(time, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, T)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Value `n` bars ago at each index (`NaN` for the first `n`).
    pub fn shift(&self, n: usize) -> Self {
        let len = self.len();
        let mut values = vec![T::nan(); len];
        if n < len {
            values[n..].copy_from_slice(&self.values[..len - n]);
        }
        self.derive(values)
    }

    /// Checks that `other` is index-aligned with `self`.
    ///
    /// # Errors
    ///
    /// - `Error::LengthMismatch` if the lengths differ
    /// - `Error::TimeMismatch` at the first differing timestamp
    pub fn ensure_aligned<U>(&self, other: &Series<U>) -> Result<()> {
        if self.times.len() != other.times.len() {
            return Err(Error::LengthMismatch {
                description: format!(
                    "series must have same length: left={}, right={}",
                    self.times.len(),
                    other.times.len()
                ),
            });
        }
        if Arc::ptr_eq(&self.times, &other.times) {
            return Ok(());
        }
        match self
            .times
            .iter()
            .zip(other.times.iter())
            .position(|(a, b)| a != b)
        {
            Some(index) => Err(Error::TimeMismatch {
                index,
                left: self.times[index],
                right: other.times[index],
            }),
            None => Ok(()),
        }
    }

    /// Combines two aligned series index-by-index.
    ///
    /// The result is `NaN` wherever either operand is `NaN`; `f` is only
    /// called on defined pairs.
    ///
    /// # Errors
    ///
    /// Returns an alignment error (see [`Series::ensure_aligned`]).
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.ensure_aligned(other)?;
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| {
                if a.is_nan() || b.is_nan() {
                    T::nan()
                } else {
                    f(a, b)
                }
            })
            .collect();
        Ok(self.derive(values))
    }

    /// `self + other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// `self - other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// `self * other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// `self / other`, undefined where `other` is zero.
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| if b == T::zero() { T::nan() } else { a / b })
    }

    /// Adds a constant to every element.
    pub fn add_scalar(&self, k: T) -> Self {
        self.map(|v| v + k)
    }

    /// Subtracts a constant from every element.
    pub fn sub_scalar(&self, k: T) -> Self {
        self.map(|v| v - k)
    }

    /// Multiplies every element by a constant.
    pub fn mul_scalar(&self, k: T) -> Self {
        self.map(|v| v * k)
    }

    /// Divides every element by a constant; all undefined if `k` is zero.
    pub fn div_scalar(&self, k: T) -> Self {
        if k == T::zero() {
            return self.map(|_| T::nan());
        }
        self.map(|v| v / k)
    }

    /// Compares two aligned series index-by-index.
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn compare<F>(&self, other: &Self, f: F) -> Result<Mask>
    where
        F: Fn(T, T) -> bool,
    {
        self.ensure_aligned(other)?;
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| {
                if a.is_nan() || b.is_nan() {
                    None
                } else {
                    Some(f(a, b))
                }
            })
            .collect())
    }

    /// `self > other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn gt(&self, other: &Self) -> Result<Mask> {
        self.compare(other, |a, b| a > b)
    }

    /// `self >= other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn ge(&self, other: &Self) -> Result<Mask> {
        self.compare(other, |a, b| a >= b)
    }

    /// `self < other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn lt(&self, other: &Self) -> Result<Mask> {
        self.compare(other, |a, b| a < b)
    }

    /// `self <= other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn le(&self, other: &Self) -> Result<Mask> {
        self.compare(other, |a, b| a <= b)
    }

    /// `self == other`
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn eq_values(&self, other: &Self) -> Result<Mask> {
        self.compare(other, |a, b| a == b)
    }

    /// True at `i` when `self` moves from at-or-below `other` to above it.
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn crossover(&self, other: &Self) -> Result<Mask> {
        self.cross_with(other, |prev_a, prev_b, a, b| prev_a <= prev_b && a > b)
    }

    /// True at `i` when `self` moves from at-or-above `other` to below it.
    ///
    /// # Errors
    ///
    /// Returns an alignment error if the series are not index-aligned.
    pub fn crossunder(&self, other: &Self) -> Result<Mask> {
        self.cross_with(other, |prev_a, prev_b, a, b| prev_a >= prev_b && a < b)
    }

    fn cross_with<F>(&self, other: &Self, f: F) -> Result<Mask>
    where
        F: Fn(T, T, T, T) -> bool,
    {
        self.ensure_aligned(other)?;
        let a = &self.values;
        let b = &other.values;
        let mut mask = vec![None; a.len()];
        for i in 1..a.len() {
            let window = [a[i - 1], b[i - 1], a[i], b[i]];
            if window.iter().any(|v| v.is_nan()) {
                continue;
            }
            mask[i] = Some(f(a[i - 1], b[i - 1], a[i], b[i]));
        }
        Ok(mask)
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}
