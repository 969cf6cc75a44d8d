//! The moving-average family.
//!
//! # Averages
//!
//! - [`sma()`]: simple average over a trailing window
//! - [`ema()`]: exponential, `α = 2 / (period + 1)`, seeded with the first defined input
//! - [`rma`]: Wilder's smoothing, `α = 1 / period`, seeded with an SMA
//! - [`ema_with_alpha`]: exponential with a caller-supplied factor
//! - [`wma()`]: linearly weighted, newest sample heaviest
//! - [`vwma()`]: weighted by a parallel volume series
//! - [`dema`], [`tema`], [`zlema`], [`hma`], [`vidya`]: composites of the above
//!
//! Every function returns one output per input. Warm-up positions and
//! positions whose inputs are undefined hold `NaN`.

pub mod composite;
pub mod ema;
pub mod sma;
pub mod vwma;
pub mod wma;

pub use composite::{dema, hma, tema, vidya, zlema};
pub use ema::{ema, ema_into, ema_with_alpha, rma, rma_into};
pub use sma::{sma, sma_into};
pub use vwma::{vwma, vwma_into};
pub use wma::{wma, wma_into};
