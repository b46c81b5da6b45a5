//! The BSC5 fixed-width column layout.
//!
//! Column widths and headings follow the V/50 ReadMe byte-for-byte. The
//! table below is the single source of truth: byte spans are derived from
//! the declared widths at compile time, never hand-written, so a width fix
//! moves every downstream column automatically.
//!
//! Only a subset of the 53 columns is retained in
//! [`StarRecord`](crate::StarRecord); the rest (1900-epoch positions,
//! photometry flags, multiplicity details) must still be present in the
//! layout so the retained columns land on the right bytes.

/// One column of the fixed-width layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column heading from the V/50 ReadMe.
    pub name: &'static str,
    /// Width in bytes.
    pub width: usize,
}

const fn f(name: &'static str, width: usize) -> FieldSpec {
    FieldSpec { name, width }
}

/// All 53 BSC5 columns, in file order.
pub const FIELDS: [FieldSpec; 53] = [
    f("HR", 4),
    f("Name", 10),
    f("DM", 11),
    f("HD", 6),
    f("SAO", 6),
    f("FK5", 4),
    f("IRflag", 1),
    f("r_IRflag", 1),
    f("Multiple", 1),
    f("ADS", 5),
    f("ADScomp", 2),
    f("VarID", 9),
    f("RAh1900", 2),
    f("RAm1900", 2),
    f("RAs1900", 4),
    f("DE-1900", 1),
    f("DEd1900", 2),
    f("DEm1900", 2),
    f("DEs1900", 2),
    f("RAh", 2),
    f("RAm", 2),
    f("RAs", 4),
    f("DE-", 1),
    f("DEd", 2),
    f("DEm", 2),
    f("DEs", 2),
    f("GLON", 6),
    f("GLAT", 6),
    f("Vmag", 5),
    f("n_Vmag", 1),
    f("u_Vmag", 1),
    f("B-V", 5),
    f("u_B-V", 1),
    f("U-B", 5),
    f("u_U-B", 1),
    f("R-I", 5),
    f("u_R-I", 1),
    f("SpType", 20),
    f("n_SpType", 1),
    f("pmRA", 6),
    f("pmDE", 6),
    f("n_Parallax", 1),
    f("Parallax", 5),
    f("RadVel", 4),
    f("n_RadVel", 4),
    f("l_RotVel", 2),
    f("RotVel", 3),
    f("u_RotVel", 1),
    f("Dmag", 4),
    f("Sep", 6),
    f("MultID", 4),
    f("MultCnt", 2),
    f("NoteFlag", 1),
];

/// Byte offset of column `index` (sum of all preceding widths).
pub const fn offset_of(index: usize) -> usize {
    let mut offset = 0;
    let mut i = 0;
    while i < index {
        offset += FIELDS[i].width;
        i += 1;
    }
    offset
}

// Column indices for every field the parser reads.
pub const F_HR: usize = 0;
pub const F_NAME: usize = 1;
pub const F_HD: usize = 3;
pub const F_SAO: usize = 4;
pub const F_RAH: usize = 19;
pub const F_RAM: usize = 20;
pub const F_RAS: usize = 21;
pub const F_DE_SIGN: usize = 22;
pub const F_DED: usize = 23;
pub const F_DEM: usize = 24;
pub const F_DES: usize = 25;
pub const F_VMAG: usize = 28;
pub const F_BV: usize = 31;
pub const F_SPTYPE: usize = 37;
pub const F_PMRA: usize = 39;
pub const F_PMDE: usize = 40;
pub const F_PARALLAX: usize = 42;

/// Total record width in bytes.
pub const RECORD_WIDTH: usize = offset_of(FIELDS.len());

/// End of the mandatory astrometry region: one byte past `Vmag`.
///
/// A record shorter than this cannot carry a position and magnitude and is
/// treated as malformed. Columns past this point are optional; the
/// reference file leaves some of them blank or absent entirely.
pub const MANDATORY_END: usize = offset_of(F_VMAG) + FIELDS[F_VMAG].width;

/// The byte span of column `index` within a padded record.
pub fn span(index: usize) -> std::ops::Range<usize> {
    let start = offset_of(index);
    start..start + FIELDS[index].width
}
