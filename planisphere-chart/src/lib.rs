//! Planisphere chart rendering pipeline.
//!
//! Turns a loaded star catalog plus an observer context into the planar
//! data a renderer draws: per-star (x, y, size, opacity) tuples, a horizon
//! polyline, and four cardinal-direction markers. The pipeline is a pure
//! function over immutable inputs with no caching and no shared state; each
//! render recomputes from scratch.
//!
//! # Pipeline
//!
//! ```text
//! Catalog → horizon transform → visibility filter → projection → encoding
//! ```
//!
//! | Module | Stage |
//! |--------|-------|
//! | [`horizon`] | Equatorial (RA/Dec) → horizon (altitude/azimuth) |
//! | [`visibility`] | Altitude and magnitude cut |
//! | [`projection`] | Stereographic horizon → plane, horizon circle, cardinal points |
//! | [`encode`] | Magnitude → marker size and opacity |
//! | [`chart`] | [`render_chart`]: the whole pipeline plus output types |
//!
//! # Example
//!
//! ```
//! use planisphere_core::ObserverContext;
//! use planisphere_catalog::{test_helpers::star_line, Catalog, StarRecord};
//! use planisphere_chart::{render_chart, VisibilityLimits};
//! use chrono::{TimeZone, Utc};
//!
//! // A Polaris-like star seen from the north pole: always near the zenith
//! let record = StarRecord::from_line(&star_line(424, 2, 31, 49.0, 89, 2.02)).unwrap();
//! let catalog = Catalog::from_records(vec![record]);
//! let utc = Utc.with_ymd_and_hms(2026, 1, 15, 3, 0, 0).unwrap();
//! let observer = ObserverContext::new(utc, 90.0)?;
//! let limits = VisibilityLimits { min_altitude_deg: 0.0, max_magnitude: 6.0 };
//!
//! let chart = render_chart(&catalog, &observer, &limits);
//! assert_eq!(chart.stars.len(), 1);
//! // dec 89° is one degree off the pole, so the marker lands near the origin
//! let star = &chart.stars[0];
//! assert!((star.x.powi(2) + star.y.powi(2)).sqrt() < 0.02);
//! assert_eq!(chart.cardinals.len(), 4);
//! # Ok::<(), planisphere_core::ObserverError>(())
//! ```

pub mod chart;
pub mod encode;
pub mod horizon;
pub mod projection;
pub mod visibility;

pub use chart::{render_chart, ChartStar, StarChart};
pub use horizon::{horizon_positions, HorizonPosition};
pub use projection::{Cardinal, CardinalMarker, PlanarPoint};
pub use visibility::{visible_stars, VisibilityLimits, VisibleStar};
