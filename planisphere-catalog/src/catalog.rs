//! The [`Catalog`] container: load, sort, truncate.
//!
//! A `Catalog` is immutable after construction and holds at most
//! [`MAX_STARS`] records, sorted ascending by visual magnitude (brightest
//! first; missing magnitudes order last). Loading is deterministic for a
//! fixed file. Load once at startup and share by reference.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::record::StarRecord;
use crate::schema::MANDATORY_END;

/// Maximum number of records kept after the brightness cut.
pub const MAX_STARS: usize = 9000;

/// Errors while loading a catalog file.
///
/// All of these are fatal to the render pipeline: a chart cannot be drawn
/// without a catalog, so the caller must surface them, not fall back to an
/// empty sky.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read at all.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line too short to carry the mandatory astrometry columns,
    /// the signature of a truncated or mis-framed file.
    #[error(
        "malformed record at line {line}: {len} bytes, need at least {expected} \
         (through the Vmag column)"
    )]
    MalformedRecord {
        line: usize,
        len: usize,
        expected: usize,
    },

    /// The file contained no records.
    #[error("catalog {path} contains no records")]
    Empty { path: PathBuf },
}

/// An ordered, brightness-truncated star catalog.
///
/// Invariants, established at construction and never broken afterwards:
///
/// - records are sorted non-decreasing by `vmag`, missing magnitudes last;
/// - `len() <= MAX_STARS`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    stars: Vec<StarRecord>,
}

impl Catalog {
    /// Loads a BSC5 fixed-width file.
    ///
    /// Every line is parsed (one record per line), then the table is
    /// stable-sorted ascending by magnitude and truncated to the
    /// [`MAX_STARS`] brightest. A line shorter than the mandatory
    /// astrometry region fails the whole load; lines between that and the
    /// full record width have their trailing optional columns read as
    /// blank.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] when the file is unreadable,
    /// [`CatalogError::MalformedRecord`] for a truncated line,
    /// [`CatalogError::Empty`] when nothing parses.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut records = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let record = StarRecord::from_line(line).ok_or(CatalogError::MalformedRecord {
                line: i + 1,
                len: line.len(),
                expected: MANDATORY_END,
            })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        let total = records.len();
        let catalog = Self::from_records(records);
        debug!(
            path = %path.display(),
            parsed = total,
            kept = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Builds a catalog from in-memory records, applying the same
    /// sort-and-truncate normalization as [`load`](Self::load).
    pub fn from_records(mut records: Vec<StarRecord>) -> Catalog {
        // Stable sort: equal magnitudes keep file order
        records.sort_by(|a, b| match (a.vmag, b.vmag) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        records.truncate(MAX_STARS);
        Catalog { stars: records }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// The records, in ascending-magnitude order.
    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarRecord> {
        self.stars.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}
