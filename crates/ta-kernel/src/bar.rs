//! OHLCV bars and the validated bar collection every calculation starts from.
//!
//! A [`Bars`] value is provided wholesale per calculation call and never
//! mutated. Its timestamps are shared (not copied) by every [`Series`]
//! projected out of it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Source;
use crate::error::{Error, Result};
use crate::series::Series;

/// One OHLCV sample.
///
/// `high >= max(open, close)` and `low <= min(open, close)` hold by convention
/// but are not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Ordering key, typically epoch milliseconds.
    pub time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume, if the feed provides it.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Bar {
    /// Creates a bar without volume.
    #[must_use]
    pub const fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Returns the bar with `volume` attached.
    #[must_use]
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// `(high + low) / 2`
    #[inline]
    #[must_use]
    pub fn hl2(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    /// `(high + low + close) / 3`, the typical price.
    #[inline]
    #[must_use]
    pub fn hlc3(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// `(open + high + low + close) / 4`
    #[inline]
    #[must_use]
    pub fn ohlc4(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }
}

/// A non-empty, time-ordered sequence of bars.
#[derive(Debug, Clone)]
pub struct Bars {
    bars: Vec<Bar>,
    times: Arc<[i64]>,
}

impl Bars {
    /// Validates and wraps a bar sequence.
    ///
    /// Equal consecutive timestamps are accepted with a warning; a decreasing
    /// timestamp is rejected.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if `bars` is empty
    /// - `Error::UnorderedTime` if a timestamp is earlier than its predecessor
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        if bars.is_empty() {
            return Err(Error::EmptyInput);
        }

        for (index, pair) in bars.windows(2).enumerate() {
            let (previous, current) = (pair[0].time, pair[1].time);
            if current < previous {
                return Err(Error::UnorderedTime {
                    index: index + 1,
                    previous,
                    current,
                });
            }
            if current == previous {
                tracing::warn!(index = index + 1, time = current, "duplicate bar timestamp");
            }
        }

        let times: Arc<[i64]> = bars.iter().map(|b| b.time).collect();
        Ok(Self { bars, times })
    }

    /// Number of bars.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always `false`: construction rejects an empty sequence.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The bars as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Bar] {
        &self.bars
    }

    /// The bar timestamps, shared with every projected series.
    #[inline]
    #[must_use]
    pub fn times(&self) -> &Arc<[i64]> {
        &self.times
    }

    /// Whether every bar carries a volume value.
    #[must_use]
    pub fn has_volume(&self) -> bool {
        self.bars.iter().all(|b| b.volume.is_some())
    }

    /// Projects one value per bar into a series.
    pub fn project<F>(&self, f: F) -> Series<f64>
    where
        F: Fn(&Bar) -> f64,
    {
        Series::from_bars(self, f)
    }

    /// Open prices.
    #[must_use]
    pub fn open(&self) -> Series<f64> {
        self.project(|b| b.open)
    }

    /// High prices.
    #[must_use]
    pub fn high(&self) -> Series<f64> {
        self.project(|b| b.high)
    }

    /// Low prices.
    #[must_use]
    pub fn low(&self) -> Series<f64> {
        self.project(|b| b.low)
    }

    /// Close prices.
    #[must_use]
    pub fn close(&self) -> Series<f64> {
        self.project(|b| b.close)
    }

    /// Volume, `NaN` where a bar has none.
    #[must_use]
    pub fn volume(&self) -> Series<f64> {
        self.project(|b| b.volume.unwrap_or(f64::NAN))
    }

    /// Median price `(high + low) / 2`.
    #[must_use]
    pub fn hl2(&self) -> Series<f64> {
        self.project(Bar::hl2)
    }

    /// Typical price `(high + low + close) / 3`.
    #[must_use]
    pub fn hlc3(&self) -> Series<f64> {
        self.project(Bar::hlc3)
    }

    /// Average price `(open + high + low + close) / 4`.
    #[must_use]
    pub fn ohlc4(&self) -> Series<f64> {
        self.project(Bar::ohlc4)
    }

    /// The configured price source.
    #[must_use]
    pub fn source(&self, source: Source) -> Series<f64> {
        source.extract(self)
    }
}

impl<'a> IntoIterator for &'a Bars {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
