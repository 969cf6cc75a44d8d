//! Low-level streaming kernels shared by the window and moving-average layers.
//!
//! # Kernels
//!
//! - [`rolling_sum`]: NaN-aware O(n) running sum and the [`NanWindow`] tracker
//! - [`rolling_extrema`]: Monotonic deque algorithm for O(n) rolling max/min
//!
//! Both follow the window rule used across the crate: the output at index `i`
//! covers inputs `[i - period + 1, i]` and is `NaN` until that range is in
//! bounds and fully defined.

pub mod rolling_extrema;
pub mod rolling_sum;

pub use rolling_extrema::{
    rolling_max, rolling_max_into, rolling_max_naive, rolling_min, rolling_min_into,
    rolling_min_naive, Extremum, MonotonicDeque,
};
pub use rolling_sum::{rolling_sum, rolling_sum_into, NanWindow};
