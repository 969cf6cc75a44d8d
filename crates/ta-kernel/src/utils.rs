//! Floating-point comparison and `NaN` bookkeeping helpers.
//!
//! # Example
//!
//! ```
//! use ta_kernel::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results that accumulate many floating-point operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN (two undefined values compare equal).
///
/// # Example
///
/// ```
/// use ta_kernel::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
///
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Elementwise [`approx_eq`] over two slices of equal length.
#[must_use]
pub fn all_approx_eq<T: SeriesElement>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&x, &y)| approx_eq(x, y, tolerance))
}

/// Count the number of NaN values in a slice.
///
/// ```
/// use ta_kernel::utils::count_nans;
///
/// let data = vec![f64::NAN, 1.0, f64::NAN, 2.0];
/// assert_eq!(count_nans(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice (the warm-up).
///
/// ```
/// use ta_kernel::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
