//! Serializable configuration for choosing a moving average and its input.
//!
//! Indicator options usually expose the average as a name next to a length,
//! e.g. `{"kind": "ema", "length": 21}`. [`MaConfig`] is that pair, and
//! [`MaConfig::compute`] dispatches to the matching function in [`crate::ta`].
//!
//! # Example
//!
//! ```
//! use ta_kernel::config::{MaConfig, MaKind, Source};
//! use ta_kernel::{Bar, Bars};
//!
//! let config: MaConfig = serde_json::from_str(r#"{"kind": "SMMA", "length": 2}"#).unwrap();
//! assert_eq!(config.kind, MaKind::Rma);
//!
//! let bars = Bars::new(vec![
//!     Bar::new(1, 1.0, 1.0, 1.0, 1.0),
//!     Bar::new(2, 3.0, 3.0, 3.0, 3.0),
//! ])
//! .unwrap();
//! let out = config.compute(&Source::Close.extract(&bars), None).unwrap();
//! assert_eq!(out.get(1), Some(2.0));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bar::Bars;
use crate::error::{Error, Result};
use crate::series::Series;
use crate::ta;
use crate::traits::{validate_period, SeriesElement};

/// The moving averages available through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum MaKind {
    /// Simple Moving Average
    Sma,
    /// Exponential Moving Average
    Ema,
    /// Wilder's smoothed moving average (also known as SMMA)
    Rma,
    /// Weighted Moving Average
    Wma,
    /// Volume-Weighted Moving Average
    Vwma,
    /// Double Exponential Moving Average
    Dema,
    /// Triple Exponential Moving Average
    Tema,
    /// Zero-Lag Exponential Moving Average
    Zlema,
    /// Hull Moving Average
    Hma,
}

impl MaKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Sma,
        Self::Ema,
        Self::Rma,
        Self::Wma,
        Self::Vwma,
        Self::Dema,
        Self::Tema,
        Self::Zlema,
        Self::Hma,
    ];

    /// Returns the display name of the average.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Rma => "RMA",
            Self::Wma => "WMA",
            Self::Vwma => "VWMA",
            Self::Dema => "DEMA",
            Self::Tema => "TEMA",
            Self::Zlema => "ZLEMA",
            Self::Hma => "HMA",
        }
    }

    /// Whether computing this average needs a volume series.
    #[must_use]
    pub const fn requires_volume(self) -> bool {
        matches!(self, Self::Vwma)
    }
}

impl fmt::Display for MaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaKind {
    type Err = Error;

    /// Parses a name case-insensitively. `"smma"` is accepted for [`MaKind::Rma`].
    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "sma" => Self::Sma,
            "ema" => Self::Ema,
            "rma" | "smma" => Self::Rma,
            "wma" => Self::Wma,
            "vwma" => Self::Vwma,
            "dema" => Self::Dema,
            "tema" => Self::Tema,
            "zlema" => Self::Zlema,
            "hma" => Self::Hma,
            _ => {
                tracing::debug!(name = s, "rejecting unknown moving average kind");
                return Err(Error::UnknownMaKind { name: s.to_owned() });
            }
        };
        Ok(kind)
    }
}

impl TryFrom<String> for MaKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A moving-average choice: which average and over how many bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaConfig {
    /// Which average to compute.
    pub kind: MaKind,
    /// Window length in bars.
    pub length: usize,
}

impl MaConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(kind: MaKind, length: usize) -> Self {
        Self { kind, length }
    }

    /// Checks the configuration without computing anything.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the length is zero.
    pub fn validate(&self) -> Result<()> {
        validate_period(self.length)
    }

    /// Computes the configured average of `source`.
    ///
    /// `volume` is only read by [`MaKind::Vwma`].
    ///
    /// # Errors
    ///
    /// - `Error::MissingVolume` if the kind needs volume and none is given
    /// - any error of the underlying average
    pub fn compute<T: SeriesElement>(
        &self,
        source: &Series<T>,
        volume: Option<&Series<T>>,
    ) -> Result<Series<T>> {
        let length = self.length;
        match self.kind {
            MaKind::Sma => ta::sma(source, length),
            MaKind::Ema => ta::ema(source, length),
            MaKind::Rma => ta::rma(source, length),
            MaKind::Wma => ta::wma(source, length),
            MaKind::Vwma => {
                let volume = volume.ok_or(Error::MissingVolume { indicator: "vwma" })?;
                ta::vwma(source, volume, length)
            }
            MaKind::Dema => ta::dema(source, length),
            MaKind::Tema => ta::tema(source, length),
            MaKind::Zlema => ta::zlema(source, length),
            MaKind::Hma => ta::hma(source, length),
        }
    }
}

/// Which bar field (or derived price) feeds an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Open price
    Open,
    /// High price
    High,
    /// Low price
    Low,
    /// Close price
    #[default]
    Close,
    /// `(high + low) / 2`
    Hl2,
    /// `(high + low + close) / 3`
    Hlc3,
    /// `(open + high + low + close) / 4`
    Ohlc4,
    /// Volume (`NaN` where a bar has none)
    Volume,
}

impl Source {
    /// Extracts this source from a bar sequence.
    #[must_use]
    pub fn extract(self, bars: &Bars) -> Series<f64> {
        match self {
            Self::Open => bars.open(),
            Self::High => bars.high(),
            Self::Low => bars.low(),
            Self::Close => bars.close(),
            Self::Hl2 => bars.hl2(),
            Self::Hlc3 => bars.hlc3(),
            Self::Ohlc4 => bars.ohlc4(),
            Self::Volume => bars.volume(),
        }
    }
}
