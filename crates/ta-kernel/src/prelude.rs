//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ta_kernel::prelude::*;
//!
//! let bars = Bars::new(vec![
//!     Bar::new(1, 10.0, 11.0, 9.0, 10.5),
//!     Bar::new(2, 10.5, 12.0, 10.0, 11.5),
//!     Bar::new(3, 11.5, 12.5, 11.0, 12.0),
//! ])
//! .unwrap();
//!
//! let close = bars.close();
//! let fast = ta::ema(&close, 2).unwrap();
//! let slow = MaConfig::new(MaKind::Sma, 3).compute(&close, None).unwrap();
//! assert_eq!(fast.len(), slow.len());
//! ```
//!
//! # Contents
//!
//! - [`Bar`], [`Bars`], [`Series`]: the data model
//! - [`Error`], [`Result`]: error handling
//! - [`SeriesElement`]: numeric element trait for the slice kernels
//! - [`MaConfig`], [`MaKind`], [`Source`]: configuration
//! - [`ta`]: the series-level indicator namespace

pub use crate::bar::{Bar, Bars};
pub use crate::config::{MaConfig, MaKind, Source};
pub use crate::error::{Error, Result};
pub use crate::series::{Mask, Series};
pub use crate::ta;
pub use crate::traits::SeriesElement;
