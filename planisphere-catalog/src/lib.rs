//! Yale Bright Star Catalog (BSC5) loading.
//!
//! The Bright Star Catalogue, 5th revised edition (Hoffleit & Warren,
//! V/50) ships as fixed-width text: one 197-byte record per star, 53
//! columns. This crate parses it into typed [`StarRecord`]s and wraps them
//! in a [`Catalog`] sorted ascending by visual magnitude and truncated to
//! the 9000 brightest entries.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`schema`] | The 53-column fixed-width layout, spans derived from declared widths |
//! | [`record`] | [`StarRecord`] and per-line parsing |
//! | [`catalog`] | [`Catalog`] container: load, sort, truncate |
//!
//! # Load Once, Share Forever
//!
//! [`Catalog::load`] is a pure function of the file: loading the same file
//! twice yields identical catalogs. There is no hidden process-wide cache;
//! load once at startup and pass `&Catalog` (or `Arc<Catalog>`) to every
//! render. The catalog is never mutated after load, so concurrent readers
//! need no coordination.
//!
//! # Missing Values
//!
//! Blank numeric columns parse to `None`, never to zero: "no parallax" and
//! "zero parallax" are different claims about a star. The handful of BSC5
//! placeholder records (novae and stars without modern astrometry) carry
//! blank positions and magnitudes; they stay in the table with `None`
//! fields and sort after every real magnitude, so the 9000-star cut
//! excludes them for the reference file.

pub mod catalog;
pub mod record;
pub mod schema;
pub mod test_helpers;

pub use catalog::{Catalog, CatalogError, MAX_STARS};
pub use record::StarRecord;
