//! Altitude and magnitude visibility cut.
//!
//! Selects the catalog rows worth drawing: above a minimum altitude and at
//! least as bright as a maximum magnitude (magnitudes grow dimmer upward,
//! so "brighter than" is numerically `<=`). Both bounds are inclusive.
//!
//! An empty result is a valid chart (an observer at the wrong time or
//! with a harsh magnitude cut simply sees nothing) and every downstream
//! stage accepts it.

use planisphere_catalog::Catalog;

use crate::horizon::HorizonPosition;

/// The two visibility thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLimits {
    /// Minimum altitude in degrees; stars at or above this are kept.
    pub min_altitude_deg: f64,
    /// Maximum visual magnitude; stars at or below (brighter) are kept.
    pub max_magnitude: f64,
}

impl VisibilityLimits {
    /// The filter predicate. Applying it to an already-filtered set keeps
    /// everything, which is what makes the filter idempotent.
    pub fn admits(&self, altitude_deg: f64, vmag: f64) -> bool {
        altitude_deg >= self.min_altitude_deg && vmag <= self.max_magnitude
    }
}

/// A star that passed the visibility cut, with everything later stages
/// need: its horizon position and magnitude, plus identity for labeling.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleStar {
    /// Harvard Revised number of the source record.
    pub hr: Option<u32>,
    /// Catalog designation; may be empty.
    pub name: String,
    pub position: HorizonPosition,
    pub vmag: f64,
}

/// Applies the visibility cut over a catalog and its transformed positions.
///
/// `positions` must be the row-parallel output of
/// [`horizon_positions`](crate::horizon_positions) for the same catalog.
/// Rows with no position or no magnitude never pass: a star the transform
/// could not place cannot be above any horizon.
pub fn visible_stars(
    catalog: &Catalog,
    positions: &[Option<HorizonPosition>],
    limits: &VisibilityLimits,
) -> Vec<VisibleStar> {
    debug_assert_eq!(catalog.len(), positions.len());

    catalog
        .iter()
        .zip(positions)
        .filter_map(|(star, position)| {
            let position = (*position)?;
            let vmag = star.vmag?;
            limits.admits(position.altitude_deg, vmag).then(|| VisibleStar {
                hr: star.hr,
                name: star.name.clone(),
                position,
                vmag,
            })
        })
        .collect()
}
