//! Observer context: the *where* and *when* of a chart render.
//!
//! A planisphere is drawn for one observer at one instant. The
//! [`ObserverContext`] pins both down: a UTC timestamp and a geographic
//! latitude. Longitude is deliberately absent: the horizon transform works
//! from the UTC hour of day, which is the reference implementation's
//! convention (see the chart crate for the transform itself).
//!
//! # Construction and Validation
//!
//! Both constructors validate. [`ObserverContext::new`] takes an instant
//! already in UTC; [`ObserverContext::from_local`] combines a wall-clock
//! date, time, and IANA time zone, refusing local times that are ambiguous
//! or nonexistent across DST transitions. After construction, the context
//! is immutable and safe to feed straight into trigonometry.
//!
//! ```
//! use planisphere_core::ObserverContext;
//! use chrono::{NaiveDate, NaiveTime};
//! use chrono_tz::Tz;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let time = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
//! let tz: Tz = "America/New_York".parse().unwrap();
//!
//! let obs = ObserverContext::from_local(date, time, tz, 39.0)?;
//! // 21:00 EST = 02:00 UTC the next day
//! assert!((obs.decimal_hour() - 2.0).abs() < 1e-12);
//! # Ok::<(), planisphere_core::ObserverError>(())
//! ```

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::constants::{DEG_TO_RAD, MINUTES_PER_HOUR, SECONDS_PER_HOUR};
use crate::errors::ObserverError;

/// A validated observation instant and latitude.
///
/// Created fresh per chart render; cheap to copy. The latitude is stored in
/// degrees because that is what the transform's formulas are specified in;
/// [`latitude_rad`](Self::latitude_rad) converts once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    utc: DateTime<Utc>,
    latitude_deg: f64,
}

impl ObserverContext {
    /// Creates a context from a UTC instant and a latitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::LatitudeNotFinite`] for NaN/infinite
    /// latitude and [`ObserverError::LatitudeOutOfRange`] outside
    /// [-90, 90].
    pub fn new(utc: DateTime<Utc>, latitude_deg: f64) -> Result<Self, ObserverError> {
        if !latitude_deg.is_finite() {
            return Err(ObserverError::LatitudeNotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ObserverError::LatitudeOutOfRange {
                value: latitude_deg,
            });
        }
        Ok(Self { utc, latitude_deg })
    }

    /// Creates a context from local wall-clock date/time in an IANA zone.
    ///
    /// The local timestamp is resolved to a single UTC instant before
    /// anything else happens. DST transitions make some wall-clock times
    /// ambiguous (occur twice) or nonexistent (skipped); both are errors
    /// rather than silent choices.
    ///
    /// # Errors
    ///
    /// [`ObserverError::AmbiguousLocalTime`],
    /// [`ObserverError::NonexistentLocalTime`], plus the latitude checks of
    /// [`new`](Self::new).
    pub fn from_local(
        date: NaiveDate,
        time: NaiveTime,
        zone: Tz,
        latitude_deg: f64,
    ) -> Result<Self, ObserverError> {
        let local = date.and_time(time);
        let resolved = match zone.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(_, _) => {
                return Err(ObserverError::AmbiguousLocalTime {
                    local,
                    zone: zone.name().to_string(),
                })
            }
            LocalResult::None => {
                return Err(ObserverError::NonexistentLocalTime {
                    local,
                    zone: zone.name().to_string(),
                })
            }
        };
        Self::new(resolved.with_timezone(&Utc), latitude_deg)
    }

    /// The observation instant in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Latitude in degrees, guaranteed finite and in [-90, 90].
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg * DEG_TO_RAD
    }

    /// The UTC time of day as decimal hours: `hour + minute/60 + second/3600`.
    ///
    /// This is the `H` of the horizon transform. Sub-second precision is
    /// dropped, matching the catalog's whole-second right ascensions.
    pub fn decimal_hour(&self) -> f64 {
        let t = self.utc.time();
        f64::from(t.hour())
            + f64::from(t.minute()) / MINUTES_PER_HOUR
            + f64::from(t.second()) / SECONDS_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn accepts_valid_latitudes() {
        let t = utc(2026, 1, 1, 0, 0, 0);
        for lat in [-90.0, -45.5, 0.0, 39.0, 90.0] {
            assert!(ObserverContext::new(t, lat).is_ok(), "lat {lat}");
        }
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let t = utc(2026, 1, 1, 0, 0, 0);
        assert!(matches!(
            ObserverContext::new(t, 90.001),
            Err(ObserverError::LatitudeOutOfRange { .. })
        ));
        assert!(matches!(
            ObserverContext::new(t, -120.0),
            Err(ObserverError::LatitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_latitude() {
        let t = utc(2026, 1, 1, 0, 0, 0);
        assert!(matches!(
            ObserverContext::new(t, f64::NAN),
            Err(ObserverError::LatitudeNotFinite)
        ));
        assert!(matches!(
            ObserverContext::new(t, f64::INFINITY),
            Err(ObserverError::LatitudeNotFinite)
        ));
    }

    #[test]
    fn decimal_hour_combines_components() {
        let obs = ObserverContext::new(utc(2026, 6, 1, 22, 30, 36), 0.0).unwrap();
        assert!((obs.decimal_hour() - 22.51).abs() < 1e-12);
    }

    #[test]
    fn from_local_converts_to_utc() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let tz: Tz = "America/New_York".parse().unwrap();
        let obs = ObserverContext::from_local(date, time, tz, 39.0).unwrap();
        // EDT is UTC-4: 22:00 local = 02:00 UTC next day
        assert!((obs.decimal_hour() - 2.0).abs() < 1e-12);
        assert_eq!(obs.utc().date_naive(), date.succ_opt().unwrap());
    }

    #[test]
    fn from_local_rejects_ambiguous_fall_back_hour() {
        // US Eastern falls back 2025-11-02 02:00 -> 01:00; 01:30 occurs twice
        let date = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        let time = NaiveTime::from_hms_opt(1, 30, 0).unwrap();
        let tz: Tz = "America/New_York".parse().unwrap();
        assert!(matches!(
            ObserverContext::from_local(date, time, tz, 39.0),
            Err(ObserverError::AmbiguousLocalTime { .. })
        ));
    }

    #[test]
    fn from_local_rejects_spring_forward_gap() {
        // US Eastern springs forward 2025-03-09 02:00 -> 03:00; 02:30 never occurs
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let time = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        let tz: Tz = "America/New_York".parse().unwrap();
        assert!(matches!(
            ObserverContext::from_local(date, time, tz, 39.0),
            Err(ObserverError::NonexistentLocalTime { .. })
        ));
    }

    #[test]
    fn latitude_rad_matches_degrees() {
        let obs = ObserverContext::new(utc(2026, 1, 1, 0, 0, 0), 90.0).unwrap();
        assert!((obs.latitude_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
