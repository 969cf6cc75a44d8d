//! Series-level indicator API.
//!
//! Each function here wraps a slice kernel from [`crate::window`],
//! [`crate::ma`] or [`crate::oscillators`]: it checks that multi-series inputs
//! share timestamps, runs the kernel on the values and stamps the result with
//! the input's timestamps. Output length always equals input length.
//!
//! # Example
//!
//! ```
//! use ta_kernel::{ta, Bar, Bars};
//!
//! let bars = Bars::new(
//!     (0..20)
//!         .map(|i| {
//!             let c = 100.0 + f64::from(i % 5);
//!             Bar::new(i64::from(i), c, c + 1.0, c - 1.0, c)
//!         })
//!         .collect(),
//! )
//! .unwrap();
//!
//! let rsi = ta::rsi(&bars.close(), 14).unwrap();
//! let atr = ta::atr(&bars, 14).unwrap();
//! assert_eq!(rsi.len(), bars.len());
//! assert_eq!(atr.times(), bars.times());
//! ```

use crate::bar::Bars;
use crate::error::{Error, Result};
use crate::ma;
use crate::oscillators;
use crate::series::Series;
use crate::traits::SeriesElement;
use crate::window;

/// Runs a single-input kernel on `source` and keeps its timestamps.
fn apply<T, F>(source: &Series<T>, kernel: F) -> Result<Series<T>>
where
    T: SeriesElement,
    F: FnOnce(&[T]) -> Result<Vec<T>>,
{
    Ok(source.derive(kernel(source.values())?))
}

/// Simple moving average. See [`ma::sma()`].
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn sma<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::sma(x, length))
}

/// Exponential moving average. See [`ma::ema()`].
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn ema<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::ema(x, length))
}

/// Wilder's moving average. See [`ma::rma`].
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn rma<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::rma(x, length))
}

/// Weighted moving average. See [`ma::wma()`].
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn wma<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::wma(x, length))
}

/// Volume-weighted moving average. See [`ma::vwma()`].
///
/// # Errors
///
/// - `Error::LengthMismatch` / `Error::TimeMismatch` if the series are not aligned
/// - `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series
pub fn vwma<T: SeriesElement>(
    source: &Series<T>,
    volume: &Series<T>,
    length: usize,
) -> Result<Series<T>> {
    source.ensure_aligned(volume)?;
    apply(source, |x| ma::vwma(x, volume.values(), length))
}

/// Double exponential moving average.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn dema<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::dema(x, length))
}

/// Triple exponential moving average.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn tema<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::tema(x, length))
}

/// Zero-lag exponential moving average.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn zlema<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::zlema(x, length))
}

/// Hull moving average.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn hma<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| ma::hma(x, length))
}

/// Variable index dynamic average, adapted by the CMO over `cmo_length`.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn vidya<T: SeriesElement>(
    source: &Series<T>,
    length: usize,
    cmo_length: usize,
) -> Result<Series<T>> {
    apply(source, |x| ma::vidya(x, length, cmo_length))
}

/// Highest value over the trailing `length` bars.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn highest<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::highest(x, length))
}

/// Lowest value over the trailing `length` bars.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn lowest<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::lowest(x, length))
}

/// Rolling sum over the trailing `length` bars.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn sum<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::sum(x, length))
}

/// Difference from the value `length` bars ago.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn change<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::change(x, length))
}

/// Population standard deviation over the trailing `length` bars.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn stdev<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::stdev(x, length))
}

/// Population variance over the trailing `length` bars.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn variance<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::variance(x, length))
}

/// Mean absolute deviation over the trailing `length` bars.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn mean_abs_dev<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| window::mean_abs_dev(x, length))
}

/// Least-squares line value, `offset` bars back from the newest bar.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn linreg<T: SeriesElement>(
    source: &Series<T>,
    length: usize,
    offset: i32,
) -> Result<Series<T>> {
    apply(source, |x| window::linreg(x, length, offset))
}

/// True range of every bar.
///
/// # Errors
///
/// `Error::EmptyInput` when there are no bars.
pub fn tr(bars: &Bars) -> Result<Series<f64>> {
    let close = bars.close();
    let values = window::true_range(bars.high().values(), bars.low().values(), close.values())?;
    Ok(close.derive(values))
}

/// Average true range.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` when there are no bars.
pub fn atr(bars: &Bars, length: usize) -> Result<Series<f64>> {
    let close = bars.close();
    let values = oscillators::atr(
        bars.high().values(),
        bars.low().values(),
        close.values(),
        length,
    )?;
    Ok(close.derive(values))
}

/// Relative strength index.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn rsi<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| oscillators::rsi(x, length))
}

/// Chande momentum oscillator.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn cmo<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| oscillators::cmo(x, length))
}

/// Stochastic %K of `source` within the `high`/`low` range.
///
/// # Errors
///
/// - `Error::LengthMismatch` / `Error::TimeMismatch` if the series are not aligned
/// - `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series
pub fn stoch<T: SeriesElement>(
    source: &Series<T>,
    high: &Series<T>,
    low: &Series<T>,
    length: usize,
) -> Result<Series<T>> {
    source.ensure_aligned(high)?;
    source.ensure_aligned(low)?;
    apply(source, |x| {
        oscillators::stoch(x, high.values(), low.values(), length)
    })
}

/// The %K/%D pair of the full stochastic oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct Stochastic {
    /// Smoothed %K.
    pub k: Series<f64>,
    /// SMA of %K.
    pub d: Series<f64>,
}

/// Full stochastic oscillator over bar closes.
///
/// # Errors
///
/// `Error::InvalidPeriod` if any length is zero, `Error::EmptyInput` when there are no bars.
pub fn stochastic(
    bars: &Bars,
    k_length: usize,
    k_smooth: usize,
    d_smooth: usize,
) -> Result<Stochastic> {
    let close = bars.close();
    let out = oscillators::stochastic(
        bars.high().values(),
        bars.low().values(),
        close.values(),
        k_length,
        k_smooth,
        d_smooth,
    )?;
    Ok(Stochastic {
        k: close.derive(out.k),
        d: close.derive(out.d),
    })
}

/// Commodity channel index of `source`.
///
/// # Errors
///
/// `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` for an empty series.
pub fn cci<T: SeriesElement>(source: &Series<T>, length: usize) -> Result<Series<T>> {
    apply(source, |x| oscillators::cci(x, length))
}

/// Money flow index over bar typical prices and volumes.
///
/// Bars without volume make their windows undefined.
///
/// # Errors
///
/// - `Error::MissingVolume` if no bar carries volume
/// - `Error::InvalidPeriod` for a zero length, `Error::EmptyInput` when there are no bars
pub fn mfi(bars: &Bars, length: usize) -> Result<Series<f64>> {
    if bars.as_slice().iter().all(|b| b.volume.is_none()) {
        return Err(Error::MissingVolume { indicator: "mfi" });
    }
    let close = bars.close();
    let values = oscillators::mfi(
        bars.high().values(),
        bars.low().values(),
        close.values(),
        bars.volume().values(),
        length,
    )?;
    Ok(close.derive(values))
}
