//! Core traits and input validation for ta-kernel.
//!
//! The primary trait is [`SeriesElement`], which abstracts the kernels over
//! `f32` and `f64`. The validation helpers implement the one configuration
//! policy shared by every primitive: a zero length is rejected, an empty input
//! is rejected, and anything else is computed (short inputs simply produce
//! `NaN` warm-up values).
//!
//! # Example
//!
//! ```
//! use ta_kernel::traits::{validate_input, SeriesElement};
//!
//! fn window_mean<T: SeriesElement>(data: &[T], period: usize) -> ta_kernel::Result<T> {
//!     validate_input(data, period, "window_mean")?;
//!
//!     let period_t = T::from_usize(period)?;
//!     let sum: T = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = window_mean(&data, 3).unwrap();
//! assert!((result - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// This trait extends `num_traits::Float` with the conversions the kernels
/// need when turning window lengths and constants into the element type.
/// `NaN` is the only "undefined" value a series may hold.
///
/// # Example
///
/// ```
/// use ta_kernel::traits::SeriesElement;
/// use num_traits::Float;
///
/// fn defined_sum<T: SeriesElement>(data: &[T]) -> T {
///     data.iter().fold(T::zero(), |acc, &x| {
///         if x.is_nan() { acc } else { acc + x }
///     })
/// }
///
/// let data = vec![1.0_f64, 2.0, f64::NAN, 4.0];
/// assert!((defined_sum(&data) - 7.0).abs() < 1e-10);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `i32` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_i32(value: i32) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "i32 to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used for the EMA smoothing factor `alpha = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used by the 0-100 oscillators (RSI, stochastic, MFI).
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        let ten = Self::two() * Self::two() * Self::two() + Self::two();
        ten * ten
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is valid for a kernel primitive.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        tracing::debug!(period, "rejecting zero-length window");
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates the `(data, period)` pair every windowed primitive receives.
///
/// Inputs shorter than `period` are valid: the caller produces an all-`NaN`
/// output for them.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
#[inline]
pub fn validate_input<T>(data: &[T], period: usize, indicator: &'static str) -> Result<()> {
    validate_period(period)?;
    if data.is_empty() {
        tracing::debug!(indicator, "rejecting empty input");
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Fills `output[..len]` with `NaN` when no window of `period` samples fits
/// in `len` inputs.
///
/// Returns `true` if it did, in which case the caller is done. Kernels call
/// this before any arithmetic on `period`, so arbitrarily large lengths never
/// reach a multiplication or an allocation.
#[inline]
pub fn fill_if_shorter_than_window<T: SeriesElement>(
    len: usize,
    period: usize,
    output: &mut [T],
) -> bool {
    if period <= len {
        return false;
    }
    output[..len].fill(T::nan());
    true
}

/// Validates that every parallel input has the length of the first.
///
/// # Errors
///
/// - `Error::EmptyInput` if the first input is empty
/// - `Error::LengthMismatch` if any input differs in length
pub fn validate_same_len<T>(inputs: &[(&'static str, &[T])]) -> Result<usize> {
    let Some(&(_, first)) = inputs.first() else {
        return Err(Error::EmptyInput);
    };
    let n = first.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if inputs.iter().any(|(_, data)| data.len() != n) {
        let description = inputs
            .iter()
            .map(|(name, data)| format!("{name}={}", data.len()))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::LengthMismatch {
            description: format!("inputs must have same length: {description}"),
        });
    }
    Ok(n)
}

/// Validates that an `_into` output buffer can hold `required` values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if the buffer is shorter than `required`.
#[inline]
pub const fn validate_buffer<T>(
    output: &[T],
    required: usize,
    indicator: &'static str,
) -> Result<()> {
    if output.len() < required {
        Err(Error::BufferTooSmall {
            indicator,
            required,
            actual: output.len(),
        })
    } else {
        Ok(())
    }
}
