//! Rolling-window primitives.
//!
//! Every primitive here looks at the trailing window `[i - period + 1, i]` and
//! produces `NaN` when that window is out of bounds or holds an undefined
//! sample. Insufficient history is never an error.
//!
//! # Primitives
//!
//! - [`highest`] / [`lowest`]: rolling extrema (monotonic deque, O(n))
//! - [`sum`]: rolling sum (running accumulator, O(n))
//! - [`stdev()`], [`variance`], [`mean_abs_dev`]: dispersion around the window mean
//! - [`linreg()`]: least-squares line value
//! - [`true_range()`]: per-bar range including gaps from the previous close
//! - [`change()`]: difference from `n` bars ago

pub mod change;
pub mod linreg;
pub mod stdev;
pub mod true_range;

pub use change::{change, change_into};
pub use linreg::{linreg, linreg_into, linreg_slope};
pub use stdev::{mean_abs_dev, mean_abs_dev_into, stdev, stdev_into, variance, variance_into};
pub use true_range::{true_range, true_range_into};

pub use crate::kernels::rolling_extrema::{
    rolling_max as highest, rolling_max_into as highest_into, rolling_min as lowest,
    rolling_min_into as lowest_into,
};
pub use crate::kernels::rolling_sum::{rolling_sum as sum, rolling_sum_into as sum_into};
