//! Stereographic projection of the horizon frame onto the chart plane.
//!
//! The classic planisphere mapping: project from the nadir onto the plane
//! tangent at the zenith. A point at zenith distance `z = 90° − alt` lands
//! at polar radius `ρ = tan(z / 2)`, so the zenith maps to the origin and
//! the horizon to the unit circle. The projection is conformal (shapes of
//! constellations survive near the zenith) at the cost of radially
//! stretching the sky toward the horizon.
//!
//! Azimuth becomes the polar angle directly: `x = cos(az)·ρ`,
//! `y = sin(az)·ρ`.
//!
//! # Display Convention
//!
//! Star charts are drawn as seen lying on your back: North up, East on the
//! *left*. That is a mirror of the map convention, and it is applied by the
//! renderer as an x-axis flip at draw time. The coordinates produced here
//! are convention-free map coordinates; baking the flip in would make the
//! projector useless for anything but one display style.

use serde::Serialize;

use planisphere_core::constants::DEG_TO_RAD;

use crate::horizon::HorizonPosition;

/// Number of points in the reference horizon polyline.
pub const HORIZON_CIRCLE_SAMPLES: usize = 1000;

/// A point in the projection plane. Zenith is the origin; the horizon is
/// the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    /// Distance from the origin (the zenith).
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// The four cardinal directions, at their conventional azimuths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Single-letter chart label.
    pub fn label(self) -> &'static str {
        match self {
            Cardinal::North => "N",
            Cardinal::East => "E",
            Cardinal::South => "S",
            Cardinal::West => "W",
        }
    }

    /// Azimuth in degrees, measured from North through East.
    pub fn azimuth_deg(self) -> f64 {
        match self {
            Cardinal::North => 0.0,
            Cardinal::East => 90.0,
            Cardinal::South => 180.0,
            Cardinal::West => 270.0,
        }
    }
}

/// A labeled cardinal-direction point on the horizon circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardinalMarker {
    pub cardinal: Cardinal,
    pub point: PlanarPoint,
}

/// Projects a horizon position onto the chart plane.
///
/// The zenith maps exactly to the origin; altitude 0° maps to radius 1 at
/// every azimuth. Altitudes below the horizon project outside the unit
/// circle (and diverge toward the nadir; callers filter those out before
/// projecting a chart, but the function itself stays total above −90°).
pub fn project(position: HorizonPosition) -> PlanarPoint {
    if position.altitude_deg >= 90.0 {
        // exact zenith: tan(0) is 0, but skip the trig and its rounding
        return PlanarPoint { x: 0.0, y: 0.0 };
    }
    let rho = ((90.0 - position.altitude_deg) * DEG_TO_RAD / 2.0).tan();
    let (sin_az, cos_az) = (position.azimuth_deg * DEG_TO_RAD).sin_cos();
    PlanarPoint {
        x: cos_az * rho,
        y: sin_az * rho,
    }
}

/// The horizon reference circle: altitude 0° swept over azimuth
/// [0°, 360°], endpoints included so the polyline closes.
pub fn horizon_circle(samples: usize) -> Vec<PlanarPoint> {
    if samples == 0 {
        return Vec::new();
    }
    (0..samples)
        .map(|i| {
            let azimuth_deg = if samples == 1 {
                0.0
            } else {
                360.0 * i as f64 / (samples - 1) as f64
            };
            project(HorizonPosition {
                altitude_deg: 0.0,
                azimuth_deg,
            })
        })
        .collect()
}

/// The four cardinal markers, on the horizon circle.
pub fn cardinal_markers() -> [CardinalMarker; 4] {
    [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ]
    .map(|cardinal| CardinalMarker {
        cardinal,
        point: project(HorizonPosition {
            altitude_deg: 0.0,
            azimuth_deg: cardinal.azimuth_deg(),
        }),
    })
}
