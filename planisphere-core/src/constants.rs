//! Unit-conversion constants for the chart pipeline.
//!
//! Catalog data arrives in hours (right ascension) and sexagesimal degrees
//! (declination); trigonometry runs in radians; observers think in degrees.
//! These constants name the conversions so the factors never appear inline.

use std::f64::consts::PI;

/// Degrees to radians: π / 180.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees: 180 / π.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Degrees of rotation per hour of right ascension.
///
/// The celestial sphere turns 360° in 24 hours, so one hour of hour angle
/// spans exactly 15°.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Hours in one day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Full circle in degrees.
pub const DEGREES_PER_CIRCLE: f64 = 360.0;
