//! Error types for ta-kernel.
//!
//! Only configuration and alignment problems are errors. A window that does not
//! yet have enough history is not an error: it shows up as `NaN` in the output.

use thiserror::Error;

/// The main error type for ta-kernel operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The length parameter is invalid.
    ///
    /// Returned for a zero length by every primitive in the kernel.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// Two inputs that must be index-aligned have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatched inputs.
        description: String,
    },

    /// Two series of equal length are stamped with different bar times.
    #[error("time mismatch at index {index}: {left} != {right}")]
    TimeMismatch {
        /// First index where the timestamps differ.
        index: usize,
        /// Timestamp of the left operand.
        left: i64,
        /// Timestamp of the right operand.
        right: i64,
    },

    /// A bar timestamp is earlier than the one before it.
    #[error("unordered bar time at index {index}: {current} < {previous}")]
    UnorderedTime {
        /// Index of the offending bar.
        index: usize,
        /// Timestamp of the previous bar.
        previous: i64,
        /// Timestamp of the offending bar.
        current: i64,
    },

    /// A volume-weighted computation was requested without volume data.
    #[error("missing volume: {indicator} requires a volume series")]
    MissingVolume {
        /// Name of the computation that needed volume.
        indicator: &'static str,
    },

    /// The output buffer passed to an `_into` function is too short.
    #[error("buffer too small for {indicator}: required {required}, got {actual}")]
    BufferTooSmall {
        /// Name of the primitive.
        indicator: &'static str,
        /// Required buffer length.
        required: usize,
        /// Provided buffer length.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` period to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// A moving-average name could not be resolved.
    #[error("unknown moving average kind: {name}")]
    UnknownMaKind {
        /// The name that failed to parse.
        name: String,
    },
}

/// Convenience type alias for Results using the ta-kernel Error type.
pub type Result<T> = std::result::Result<T, Error>;
