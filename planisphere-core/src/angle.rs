//! Sexagesimal conversion and angle normalization.
//!
//! Star catalogs record right ascension in hours/minutes/seconds and
//! declination in degrees/arcminutes/arcseconds. These helpers collapse the
//! components to decimal values and normalize the results to the ranges the
//! chart pipeline expects:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Hour angle, right ascension | [0, 24) hours | [`wrap_hours`] |
//! | Azimuth | [0, 360) degrees | [`wrap_degrees`] |
//! | Inverse-trig argument | [-1, 1] | [`clamp_unit`] |
//!
//! # Wrapping vs Clamping
//!
//! Wrapping preserves direction: 361° points the same way as 1°, so
//! [`wrap_degrees`] returns 1°. Clamping absorbs floating-point overshoot:
//! a cosine computed as 1.0000000000000002 is not a different direction, it
//! is rounding error, and [`clamp_unit`] pulls it back into the domain of
//! `acos`/`asin`. The clamp is the one place in the pipeline where silent
//! numeric correction is intentional; everything else surfaces errors.

use crate::constants::{DEGREES_PER_CIRCLE, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_HOUR};

/// Collapses sexagesimal hours (h, m, s) to decimal hours.
///
/// # Example
///
/// ```
/// use planisphere_core::angle::hms_to_hours;
///
/// // 6h 30m 0s = 6.5h
/// assert!((hms_to_hours(6.0, 30.0, 0.0) - 6.5).abs() < 1e-12);
/// ```
#[inline]
pub fn hms_to_hours(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours + minutes / MINUTES_PER_HOUR + seconds / SECONDS_PER_HOUR
}

/// Collapses sexagesimal degrees (d, m, s) to decimal degrees.
///
/// Returns the unsigned magnitude; declination sign is the caller's concern
/// (the catalog stores it in a separate column).
#[inline]
pub fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / MINUTES_PER_HOUR + seconds / SECONDS_PER_HOUR
}

/// Wraps a value in hours to [0, 24).
///
/// Used for hour angles: `H - R` with both operands in [0, 24) lands in
/// (-24, 24), and a negative result means the same meridian offset one day
/// earlier.
#[inline]
pub fn wrap_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(HOURS_PER_DAY);
    // rem_euclid(24.0) can return exactly 24.0 for tiny negative inputs
    if wrapped >= HOURS_PER_DAY {
        wrapped - HOURS_PER_DAY
    } else {
        wrapped
    }
}

/// Wraps a value in degrees to [0, 360).
#[inline]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(DEGREES_PER_CIRCLE);
    if wrapped >= DEGREES_PER_CIRCLE {
        wrapped - DEGREES_PER_CIRCLE
    } else {
        wrapped
    }
}

/// Clamps a value to [-1, 1], the domain of `acos` and `asin`.
///
/// Spherical-trig identities can overshoot the unit interval by a few ulps;
/// feeding the raw value to an inverse trig function would yield NaN. This
/// clamp absorbs the overshoot. It is a domain-of-definition guard, not a
/// precision fix: values meaningfully outside [-1, 1] indicate a bug
/// upstream, not something to hide here.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
