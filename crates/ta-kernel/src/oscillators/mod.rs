//! Oscillators composed from the window and moving-average primitives.
//!
//! - [`rsi()`]: Relative Strength Index (RMA of gains and losses)
//! - [`stoch()`] / [`stochastic()`]: Stochastic %K and the smoothed %K/%D pair
//! - [`atr()`]: Average True Range
//! - [`cci()`]: Commodity Channel Index
//! - [`mfi()`]: Money Flow Index
//! - [`cmo()`]: Chande Momentum Oscillator

pub mod atr;
pub mod cci;
pub mod cmo;
pub mod mfi;
pub mod rsi;
pub mod stochastic;

pub use atr::{atr, atr_into};
pub use cci::{cci, cci_into};
pub use cmo::{cmo, cmo_into};
pub use mfi::{mfi, mfi_into};
pub use rsi::{rsi, rsi_into};
pub use stochastic::{stoch, stoch_into, stochastic, StochasticOutput};
