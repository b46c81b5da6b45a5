//! The full render pipeline and its output types.
//!
//! [`render_chart`] strings the stages together: transform the catalog to
//! the horizon frame, cut to the visible set, project onto the plane, and
//! encode magnitudes as size and opacity. The output is everything a
//! renderer needs and nothing it doesn't: planar tuples, the horizon
//! polyline, and the four cardinal markers, all in the same scale-free
//! coordinate space. Aspect locking, the East-left axis mirror, and colors
//! are the renderer's business.

use serde::Serialize;
use tracing::debug;

use planisphere_catalog::Catalog;
use planisphere_core::ObserverContext;

use crate::encode::{marker_size, relative_opacities};
use crate::horizon::horizon_positions;
use crate::projection::{cardinal_markers, horizon_circle, project, CardinalMarker, PlanarPoint};
use crate::projection::HORIZON_CIRCLE_SAMPLES;
use crate::visibility::{visible_stars, VisibilityLimits};

/// One plotted star: planar position plus rendering attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStar {
    /// Harvard Revised number, when the record carries one.
    pub hr: Option<u32>,
    /// Catalog designation; may be empty.
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Marker size; larger is brighter.
    pub size: f64,
    /// Marker opacity in [0, 1], relative to this chart's visible set.
    pub opacity: f64,
    /// Visual magnitude, passed through for tooltips and debugging.
    pub vmag: f64,
}

/// A complete rendered chart, ready for a plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarChart {
    pub stars: Vec<ChartStar>,
    /// Closed polyline tracing the horizon (altitude 0°).
    pub horizon: Vec<PlanarPoint>,
    /// N/E/S/W label anchor points on the horizon circle.
    pub cardinals: [CardinalMarker; 4],
}

/// Renders a star chart for one observer and one instant.
///
/// Pure and synchronous: no caching, no shared state. An empty visible set
/// produces an empty `stars` vector with the horizon circle and cardinal
/// markers intact: a cloudy-sky chart, not an error.
pub fn render_chart(
    catalog: &Catalog,
    observer: &ObserverContext,
    limits: &VisibilityLimits,
) -> StarChart {
    let positions = horizon_positions(catalog, observer);
    let visible = visible_stars(catalog, &positions, limits);
    debug!(
        catalog_rows = catalog.len(),
        visible = visible.len(),
        latitude = observer.latitude_deg(),
        "rendering chart"
    );

    let vmags: Vec<f64> = visible.iter().map(|s| s.vmag).collect();
    let opacities = relative_opacities(&vmags);

    let stars = visible
        .into_iter()
        .zip(opacities)
        .map(|(star, opacity)| {
            let point = project(star.position);
            ChartStar {
                hr: star.hr,
                name: star.name,
                x: point.x,
                y: point.y,
                size: marker_size(star.vmag),
                opacity,
                vmag: star.vmag,
            }
        })
        .collect();

    StarChart {
        stars,
        horizon: horizon_circle(HORIZON_CIRCLE_SAMPLES),
        cardinals: cardinal_markers(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use planisphere_catalog::test_helpers::star_line;
    use planisphere_catalog::StarRecord;

    fn catalog(lines: &[String]) -> Catalog {
        Catalog::from_records(
            lines
                .iter()
                .map(|l| StarRecord::from_line(l).unwrap())
                .collect(),
        )
    }

    fn observer(latitude: f64) -> ObserverContext {
        let utc = Utc.with_ymd_and_hms(2026, 3, 1, 4, 30, 0).unwrap();
        ObserverContext::new(utc, latitude).unwrap()
    }

    const DEFAULT_LIMITS: VisibilityLimits = VisibilityLimits {
        min_altitude_deg: 0.0,
        max_magnitude: 6.0,
    };

    #[test]
    fn empty_visible_set_still_draws_the_horizon() {
        let cat = catalog(&[star_line(1, 12, 0, 0.0, -60, 2.0)]);
        // a far-southern star is never visible from the north pole
        let chart = render_chart(&cat, &observer(90.0), &DEFAULT_LIMITS);
        assert!(chart.stars.is_empty());
        assert_eq!(chart.horizon.len(), HORIZON_CIRCLE_SAMPLES);
        assert_eq!(chart.cardinals.len(), 4);
    }

    #[test]
    fn chart_star_attributes_are_consistent() {
        let cat = catalog(&[
            star_line(1, 4, 30, 0.0, 45, 1.0),
            star_line(2, 4, 30, 0.0, 20, 4.5),
        ]);
        let chart = render_chart(&cat, &observer(45.0), &DEFAULT_LIMITS);
        assert_eq!(chart.stars.len(), 2);
        for star in &chart.stars {
            assert!((0.0..=1.0).contains(&star.opacity));
            assert!(star.size > 0.0);
            assert!(star.x.is_finite() && star.y.is_finite());
        }
        // brightest first (catalog order) and fully opaque
        assert_eq!(chart.stars[0].hr, Some(1));
        assert!((chart.stars[0].opacity - 1.0).abs() < 1e-12);
        assert!(chart.stars[0].size > chart.stars[1].size);
    }

    #[test]
    fn serializes_to_json() {
        let cat = catalog(&[star_line(1, 4, 30, 0.0, 45, 1.0)]);
        let chart = render_chart(&cat, &observer(45.0), &DEFAULT_LIMITS);
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"stars\""));
        assert!(json.contains("\"horizon\""));
        assert!(json.contains("\"cardinals\""));
        assert!(json.contains("\"North\""));
    }
}
