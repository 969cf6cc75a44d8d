//! Moving averages built from other moving averages.
//!
//! # Formulas
//!
//! ```text
//! DEMA  = 2·E1 − E2                         E1 = EMA(x), E2 = EMA(E1)
//! TEMA  = 3·E1 − 3·E2 + E3                  E3 = EMA(E2)
//! ZLEMA = EMA(x + (x − x[lag]))             lag = (length − 1) / 2
//! HMA   = WMA(2·WMA(x, length/2) − WMA(x, length), ⌊√length⌋)
//! VIDYA = α·k·x + (1 − α·k)·VIDYA[-1]      α = 2/(length+1), k = |CMO(x)| / 100
//! ```
//!
//! Each stage inherits the warm-up of the stage before it; an undefined
//! intermediate value makes the composite undefined at that index.

use crate::error::Result;
use crate::ma::ema::ema;
use crate::ma::wma::wma;
use crate::oscillators::cmo::up_down_sums;
use crate::traits::{fill_if_shorter_than_window, validate_input, SeriesElement};

/// Largest `r` with `r * r <= n`.
fn isqrt(n: usize) -> usize {
    let mut r = 0_usize;
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// Computes the Double Exponential Moving Average.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::ma::dema;
///
/// let data = vec![3.0_f64; 10];
/// assert!(dema(&data, 4).unwrap().iter().all(|&v| (v - 3.0).abs() < 1e-12));
/// ```
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_input(data, period, "dema")?;

    let e1 = ema(data, period)?;
    let e2 = ema(&e1, period)?;

    Ok(e1
        .iter()
        .zip(&e2)
        .map(|(&a, &b)| T::two() * a - b)
        .collect())
}

/// Computes the Triple Exponential Moving Average.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn tema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_input(data, period, "tema")?;

    let three = T::two() + T::one();
    let e1 = ema(data, period)?;
    let e2 = ema(&e1, period)?;
    let e3 = ema(&e2, period)?;

    Ok(e1
        .iter()
        .zip(&e2)
        .zip(&e3)
        .map(|((&a, &b), &c)| three * a - three * b + c)
        .collect())
}

/// Computes the Zero-Lag Exponential Moving Average.
///
/// The input is de-lagged by adding its change over `(period - 1) / 2` bars
/// before smoothing, so the first `lag` outputs are `NaN`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn zlema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_input(data, period, "zlema")?;

    let lag = (period - 1) / 2;
    let adjusted: Vec<T> = (0..data.len())
        .map(|i| {
            if i >= lag {
                data[i] + (data[i] - data[i - lag])
            } else {
                T::nan()
            }
        })
        .collect();

    ema(&adjusted, period)
}

/// Computes the Hull Moving Average.
///
/// The half and square-root lengths are clamped to at least 1, so `hma(x, 1)`
/// equals `x`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
///
/// # Example
///
/// ```
/// use ta_kernel::ma::hma;
///
/// // A straight line is tracked without lag.
/// let data: Vec<f64> = (0..20).map(f64::from).collect();
/// let result = hma(&data, 9).unwrap();
/// assert!(result[9].is_nan());
/// assert!((result[10] - 10.0).abs() < 1e-9);
/// ```
pub fn hma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_input(data, period, "hma")?;
    let mut output = vec![T::nan(); data.len()];
    if fill_if_shorter_than_window(data.len(), period, &mut output) {
        return Ok(output);
    }

    let half = (period / 2).max(1);
    let sqrt_len = isqrt(period).max(1);

    let wma_half = wma(data, half)?;
    let wma_full = wma(data, period)?;
    let raw: Vec<T> = wma_half
        .iter()
        .zip(&wma_full)
        .map(|(&h, &f)| T::two() * h - f)
        .collect();

    wma(&raw, sqrt_len)
}

/// Computes Chande's Variable Index Dynamic Average.
///
/// The smoothing factor `2 / (period + 1)` is scaled each bar by the absolute
/// CMO over `cmo_period` changes, so the average speeds up in trends and
/// stalls in sideways markets. The filter is seeded with the input at the
/// first index where the CMO is defined.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if either period is zero
/// - `Error::EmptyInput` if the data is empty
pub fn vidya<T: SeriesElement>(data: &[T], period: usize, cmo_period: usize) -> Result<Vec<T>> {
    validate_input(data, period, "vidya")?;
    validate_input(data, cmo_period, "vidya")?;

    let alpha = T::two() / (T::from_usize(period)? + T::one());
    let (up, down) = up_down_sums(data, cmo_period)?;

    let mut output = vec![T::nan(); data.len()];
    let mut prev: Option<T> = None;

    for (i, &value) in data.iter().enumerate() {
        let total = up[i] + down[i];
        if value.is_nan() || total.is_nan() {
            prev = None;
            continue;
        }

        let k = if total == T::zero() {
            T::zero()
        } else {
            (up[i] - down[i]).abs() / total
        };

        let current = match prev {
            Some(p) => {
                let sc = alpha * k;
                sc * value + (T::one() - sc) * p
            }
            None => value,
        };
        output[i] = current;
        prev = Some(current);
    }

    Ok(output)
}
