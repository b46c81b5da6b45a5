//! Helpers for building synthetic catalog lines in tests.
//!
//! Real BSC5 files are large and not redistributable inside this repo's
//! test suite, so loader tests compose records column-by-column against the
//! declared [`schema`](crate::schema) instead of embedding fixture bytes.

use crate::schema::{FIELDS, RECORD_WIDTH};

/// Builds one fixed-width catalog line, column by column.
///
/// Values are right-aligned within their column (the catalog's own
/// convention for numeric fields) and truncated if too wide. Unset columns
/// stay blank.
pub struct RecordBuilder {
    bytes: Vec<u8>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            bytes: vec![b' '; RECORD_WIDTH],
        }
    }

    /// Sets the column with the given heading. Panics on an unknown
    /// heading; that is a bug in the test, not a runtime condition.
    pub fn set(mut self, heading: &str, value: &str) -> Self {
        let index = FIELDS
            .iter()
            .position(|f| f.name == heading)
            .unwrap_or_else(|| panic!("unknown BSC5 column {heading:?}"));
        let range = crate::schema::span(index);
        let width = range.len();
        let text: String = value.chars().take(width).collect();
        let start = range.start + (width - text.len());
        self.bytes[start..start + text.len()].copy_from_slice(text.as_bytes());
        self
    }

    /// The finished line as a `String`.
    pub fn build(self) -> String {
        String::from_utf8(self.bytes).expect("builder only writes ASCII")
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete record for a star with the given J2000 position and
/// magnitude; identity columns filled with plausible values.
pub fn star_line(hr: u32, ra_h: u32, ra_m: u32, ra_s: f64, dec_deg: i32, vmag: f64) -> String {
    let builder = RecordBuilder::new()
        .set("HR", &hr.to_string())
        .set("RAh", &ra_h.to_string())
        .set("RAm", &ra_m.to_string())
        .set("RAs", &format!("{ra_s:.1}"))
        .set("DEd", &dec_deg.unsigned_abs().to_string())
        .set("DEm", "0")
        .set("DEs", "0")
        .set("Vmag", &format!("{vmag:.2}"));
    let builder = if dec_deg < 0 {
        builder.set("DE-", "-")
    } else {
        builder
    };
    builder.build()
}
