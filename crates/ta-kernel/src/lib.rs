//! ta-kernel: the shared numeric kernel behind bar-based technical indicators.
//!
//! Indicator formulas are built from a small set of primitives over
//! time-aligned series:
//!
//! - **Series**: one value per bar, stamped with the bar times
//! - **Rolling windows**: highest, lowest, sum, stdev, linreg, true range
//! - **Moving averages**: SMA, EMA, RMA, WMA, VWMA and their composites
//! - **Oscillators**: RSI, stochastic, ATR, CCI, MFI, CMO
//!
//! Every primitive is a pure function. Windows that lack history produce
//! `NaN`, the only undefined value a series holds; zero lengths and empty
//! inputs are rejected with an [`Error`].
//!
//! # Quick Start
//!
//! ```
//! use ta_kernel::prelude::*;
//!
//! let bars = Bars::new(
//!     (1..=10_i32)
//!         .map(|i| {
//!             let c = f64::from(i);
//!             Bar::new(i64::from(i), c, c, c, c)
//!         })
//!         .collect(),
//! )
//! .unwrap();
//!
//! let result = ta::sma(&bars.close(), 3).unwrap();
//!
//! // First 2 values are NaN (warm-up)
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert_eq!(&result.values()[2..], &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
//! ```
//!
//! # Layers
//!
//! - [`kernels`], [`window`], [`ma`], [`oscillators`]: slice functions
//!   (`fn(&[T], length) -> Result<Vec<T>>`) plus `_into` variants that write
//!   into caller buffers
//! - [`ta`]: the same computations on [`Series`], with alignment checks
//! - [`config`]: serde-friendly moving-average selection
//!
//! # Error Handling
//!
//! ```
//! use ta_kernel::prelude::*;
//! use ta_kernel::ma::sma;
//!
//! // Length longer than the data is fine: every value is undefined
//! let short_data = vec![1.0_f64, 2.0];
//! assert!(sma(&short_data, 10).unwrap().iter().all(|v| v.is_nan()));
//!
//! // A zero length is a configuration error
//! assert!(matches!(sma(&short_data, 0), Err(Error::InvalidPeriod { .. })));
//!
//! // Empty data
//! let empty: Vec<f64> = vec![];
//! assert!(matches!(sma(&empty, 5), Err(Error::EmptyInput)));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod config;
pub mod error;
pub mod kernels;
pub mod ma;
pub mod oscillators;
pub mod prelude;
pub mod series;
pub mod ta;
pub mod traits;
pub mod utils;
pub mod window;

// Re-export commonly used types at crate root
pub use bar::{Bar, Bars};
pub use config::{MaConfig, MaKind, Source};
pub use error::{Error, Result};
pub use series::{Mask, Series};
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_nan_prefix, count_nans, EPSILON, LOOSE_EPSILON};
