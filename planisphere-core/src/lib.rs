//! Shared building blocks for planisphere star charts.
//!
//! `planisphere-core` provides the pieces the catalog and chart crates both
//! lean on: unit-conversion constants, sexagesimal angle helpers, and the
//! validated [`ObserverContext`] that fixes *where* and *when* a chart is
//! rendered.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Sexagesimal conversion, wrapping, and the arc-cosine domain clamp |
//! | [`constants`] | Unit-conversion constants (degrees/radians/hours) |
//! | [`observer`] | [`ObserverContext`]: UTC instant + validated latitude |
//! | [`errors`] | [`ObserverError`] |
//!
//! # Validation Boundary
//!
//! All observer-input validation happens when an [`ObserverContext`] is
//! constructed. Code that receives one can run trigonometry without
//! re-checking: a context with a non-finite or out-of-range latitude, or an
//! unresolvable local timestamp, cannot exist.
//!
//! ```
//! use planisphere_core::ObserverContext;
//! use chrono::{TimeZone, Utc};
//!
//! let utc = Utc.with_ymd_and_hms(2026, 3, 1, 22, 30, 0).unwrap();
//! assert!(ObserverContext::new(utc, 39.0).is_ok());
//! assert!(ObserverContext::new(utc, 91.0).is_err());
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod observer;

pub use errors::ObserverError;
pub use observer::ObserverContext;
