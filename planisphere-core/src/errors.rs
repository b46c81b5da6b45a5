//! Observer-input errors.
//!
//! Everything here is caught before any trigonometry runs: an
//! [`ObserverContext`](crate::ObserverContext) is only constructed from
//! inputs that pass these checks. None of these are recoverable by retry;
//! the caller supplied a location or instant that does not exist.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors from invalid observer inputs (latitude or timestamp).
#[derive(Debug, Error)]
pub enum ObserverError {
    /// Latitude outside [-90, 90] degrees.
    #[error("latitude {value}° out of range [-90°, +90°]")]
    LatitudeOutOfRange { value: f64 },

    /// Latitude is NaN or infinite.
    #[error("latitude must be finite")]
    LatitudeNotFinite,

    /// Local wall-clock time occurs twice in the given zone (a DST
    /// fall-back hour). The caller must disambiguate; picking an instant
    /// silently would shift every star on the chart.
    #[error("local time {local} is ambiguous in time zone {zone}")]
    AmbiguousLocalTime { local: NaiveDateTime, zone: String },

    /// Local wall-clock time that never occurs in the given zone (a DST
    /// spring-forward gap).
    #[error("local time {local} does not exist in time zone {zone}")]
    NonexistentLocalTime { local: NaiveDateTime, zone: String },
}
