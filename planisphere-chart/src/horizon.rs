//! Equatorial → horizon coordinate transform.
//!
//! This is the mathematical core of the chart: spherical trigonometry
//! converting a star's right ascension and declination into the altitude
//! and azimuth an observer at a given latitude sees at a given UTC instant.
//!
//! # Algorithm
//!
//! Per star, with `H` the observer's decimal UTC hour and `R` the star's
//! decimal right ascension in hours:
//!
//! 1. Hour angle `HA = H − R`, wrapped to [0, 24) hours, then ×15 to
//!    degrees and to radians.
//! 2. `alt = asin(sin δ · sin φ + cos δ · cos φ · cos HA)` with δ the
//!    declination and φ the latitude.
//! 3. `cos A = (sin δ − sin alt · sin φ) / (cos alt · cos φ)`, clamped to
//!    [-1, 1], then `A = acos(...)` ∈ [0°, 180°]. A star east of the
//!    meridian (`sin HA < 0`) keeps `A`; west of it, the azimuth is
//!    `360° − A`. The result is the conventional azimuth measured from
//!    North through East.
//!
//! The clamp in step 3 absorbs floating-point overshoot of the trig
//! identities; see [`clamp_unit`](planisphere_core::angle::clamp_unit).
//!
//! # Zenith Singularity
//!
//! At altitude exactly ±90° the azimuth is geometrically undefined
//! (`cos alt = 0` collapses the denominator). The transform returns 0° for
//! that case, an arbitrary but stable value. No star sits exactly at the
//! zenith at a real observation instant; the case exists so the math stays
//! total, and callers must not read meaning into the azimuth there.

use planisphere_catalog::Catalog;
use planisphere_core::angle::{clamp_unit, wrap_degrees, wrap_hours};
use planisphere_core::constants::{DEGREES_PER_CIRCLE, DEG_TO_RAD, DEGREES_PER_HOUR, RAD_TO_DEG};
use planisphere_core::ObserverContext;

/// A star's position in the observer's horizon frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPosition {
    /// Angle above the horizon, degrees in [-90, 90].
    pub altitude_deg: f64,
    /// Compass bearing from North through East, degrees in [0, 360).
    pub azimuth_deg: f64,
}

/// Transforms a single equatorial position to the horizon frame.
///
/// `ra_hours` in [0, 24), `dec_deg` in [-90, 90]. Exposed for callers that
/// work star-by-star; [`horizon_positions`] runs it over a whole catalog.
pub fn equatorial_to_horizon(
    ra_hours: f64,
    dec_deg: f64,
    observer: &ObserverContext,
) -> HorizonPosition {
    let (sin_lat, cos_lat) = observer.latitude_rad().sin_cos();
    transform(ra_hours, dec_deg, observer.decimal_hour(), sin_lat, cos_lat)
}

/// Transforms every catalog row to the horizon frame.
///
/// Total over the catalog: one entry per row, in row order. Rows without
/// complete astrometry (the BSC5 placeholder records) map to `None`;
/// the transform never invents a position. Observer validity is guaranteed
/// by [`ObserverContext`] construction, so no input checking happens here.
pub fn horizon_positions(
    catalog: &Catalog,
    observer: &ObserverContext,
) -> Vec<Option<HorizonPosition>> {
    // Latitude trig is constant across the catalog; hoist it out of the loop
    let (sin_lat, cos_lat) = observer.latitude_rad().sin_cos();
    let hour = observer.decimal_hour();

    catalog
        .iter()
        .map(|star| match (star.ra_hours, star.dec_deg) {
            (Some(ra), Some(dec)) => Some(transform(ra, dec, hour, sin_lat, cos_lat)),
            _ => None,
        })
        .collect()
}

fn transform(ra_hours: f64, dec_deg: f64, hour: f64, sin_lat: f64, cos_lat: f64) -> HorizonPosition {
    let ha_rad = wrap_hours(hour - ra_hours) * DEGREES_PER_HOUR * DEG_TO_RAD;
    let (sin_dec, cos_dec) = (dec_deg * DEG_TO_RAD).sin_cos();

    let sin_alt = clamp_unit(sin_dec * sin_lat + cos_dec * cos_lat * ha_rad.cos());
    let alt_rad = sin_alt.asin();

    let cos_alt = alt_rad.cos();
    let denominator = cos_alt * cos_lat;
    let azimuth_deg = if denominator == 0.0 {
        // zenith/nadir singularity: azimuth undefined, return a stable value
        0.0
    } else {
        let cos_az = clamp_unit((sin_dec - sin_alt * sin_lat) / denominator);
        let az = cos_az.acos() * RAD_TO_DEG;
        if ha_rad.sin() < 0.0 {
            az
        } else {
            wrap_degrees(DEGREES_PER_CIRCLE - az)
        }
    };

    HorizonPosition {
        altitude_deg: alt_rad * RAD_TO_DEG,
        azimuth_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use planisphere_catalog::test_helpers::star_line;
    use planisphere_catalog::{Catalog, StarRecord};

    fn observer(hour: u32, latitude: f64) -> ObserverContext {
        let utc = Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap();
        ObserverContext::new(utc, latitude).unwrap()
    }

    fn catalog(lines: &[String]) -> Catalog {
        Catalog::from_records(
            lines
                .iter()
                .map(|l| StarRecord::from_line(l).unwrap())
                .collect(),
        )
    }

    #[test]
    fn culmination_at_zenith_when_dec_equals_latitude() {
        // HA = 0: star on the meridian; dec = lat puts it at the zenith
        let obs = observer(6, 45.0);
        let pos = equatorial_to_horizon(6.0, 45.0, &obs);
        assert!((pos.altitude_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn pole_star_altitude_equals_latitude() {
        let obs = observer(3, 39.0);
        let pos = equatorial_to_horizon(17.0, 90.0, &obs);
        assert!((pos.altitude_deg - 39.0).abs() < 1e-9);
    }

    #[test]
    fn output_ranges_hold_over_a_sky_sweep() {
        let obs = observer(9, 39.0);
        for ra10 in 0..240 {
            for dec in (-90..=90).step_by(15) {
                let pos = equatorial_to_horizon(f64::from(ra10) / 10.0, f64::from(dec), &obs);
                assert!(
                    (-90.0..=90.0).contains(&pos.altitude_deg),
                    "alt {} at ra {} dec {}",
                    pos.altitude_deg,
                    ra10,
                    dec
                );
                assert!(
                    (0.0..360.0).contains(&pos.azimuth_deg),
                    "az {} at ra {} dec {}",
                    pos.azimuth_deg,
                    ra10,
                    dec
                );
            }
        }
    }

    #[test]
    fn lower_culmination_at_circumpolar_edge_stays_in_domain() {
        // HA exactly 180° (RA 12h behind the clock) with dec = lat − 90:
        // the trig identities sit right on the ±1 boundary here, which is
        // what the clamp exists for
        let obs = observer(12, 40.0);
        let pos = equatorial_to_horizon(0.0, -50.0, &obs);
        assert!(pos.altitude_deg.is_finite());
        assert!(pos.azimuth_deg.is_finite());
        assert!((-90.0..=90.0).contains(&pos.altitude_deg));
        assert!((0.0..360.0).contains(&pos.azimuth_deg));

        // the mirrored case: dec = 90 − lat grazes the horizon at lower
        // culmination
        let grazing = equatorial_to_horizon(0.0, 50.0, &obs);
        assert!(grazing.altitude_deg.abs() < 1e-9);
    }

    #[test]
    fn eastern_sky_azimuth_below_180() {
        // Star about to rise toward its culmination: HA negative (east)
        let obs = observer(4, 39.0);
        let pos = equatorial_to_horizon(7.0, 30.0, &obs);
        assert!(
            pos.azimuth_deg < 180.0,
            "eastern star got azimuth {}",
            pos.azimuth_deg
        );
    }

    #[test]
    fn western_sky_azimuth_above_180() {
        let obs = observer(10, 39.0);
        let pos = equatorial_to_horizon(7.0, 30.0, &obs);
        assert!(
            pos.azimuth_deg > 180.0,
            "western star got azimuth {}",
            pos.azimuth_deg
        );
    }

    #[test]
    fn due_south_at_upper_culmination_from_mid_northern_latitude() {
        // On the meridian, south of the zenith: azimuth 180°
        let obs = observer(6, 45.0);
        let pos = equatorial_to_horizon(6.0, 10.0, &obs);
        assert!((pos.azimuth_deg - 180.0).abs() < 1e-6);
    }

    #[test]
    fn transform_is_total_over_catalog_rows() {
        let lines = vec![
            star_line(1, 6, 0, 0.0, 45, 1.0),
            planisphere_catalog::test_helpers::RecordBuilder::new()
                .set("HR", "182")
                .build(),
        ];
        let cat = catalog(&lines);
        let obs = observer(6, 45.0);
        let positions = horizon_positions(&cat, &obs);
        assert_eq!(positions.len(), cat.len());
        // placeholder rows transform to None, real rows to Some
        assert_eq!(positions.iter().filter(|p| p.is_some()).count(), 1);
        assert_eq!(positions.iter().filter(|p| p.is_none()).count(), 1);
    }

    #[test]
    fn batch_matches_single_star_transform() {
        let lines = vec![star_line(1, 5, 30, 0.0, -20, 3.3)];
        let cat = catalog(&lines);
        let obs = observer(8, 12.5);
        let batch = horizon_positions(&cat, &obs)[0].unwrap();
        let star = &cat.stars()[0];
        let single = equatorial_to_horizon(star.ra_hours.unwrap(), star.dec_deg.unwrap(), &obs);
        assert_eq!(batch, single);
    }
}
