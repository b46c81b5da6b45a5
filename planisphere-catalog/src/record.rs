//! Per-line parsing of BSC5 records.
//!
//! Each line is split on the byte spans declared in [`schema`] and the
//! retained columns are parsed into a [`StarRecord`]. Blank numeric columns
//! become `None`; string columns are trimmed. The signed declination and
//! decimal right ascension are computed here, once, so the transform never
//! re-derives them (and in particular never re-inspects the `DE-` sign
//! column in the hot path).

use planisphere_core::angle::{dms_to_degrees, hms_to_hours};

use crate::schema::{
    span, F_BV, F_DED, F_DEM, F_DES, F_DE_SIGN, F_HD, F_HR, F_NAME, F_PARALLAX, F_PMDE, F_PMRA,
    F_RAH, F_RAM, F_RAS, F_SAO, F_SPTYPE, F_VMAG, RECORD_WIDTH,
};

/// One star from the catalog.
///
/// Identity columns are opaque to the math; the transform consumes only
/// [`ra_hours`](Self::ra_hours), [`dec_deg`](Self::dec_deg), and
/// [`vmag`](Self::vmag). Optional fields are `None` where the catalog
/// column is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    /// Harvard Revised number (the BSC5 primary key).
    pub hr: Option<u32>,
    /// Bayer/Flamsteed designation, trimmed; empty for unnamed stars.
    pub name: String,
    /// Henry Draper catalog number.
    pub hd: Option<u32>,
    /// SAO catalog number.
    pub sao: Option<u32>,

    /// Right ascension hours component (J2000).
    pub ra_h: Option<u32>,
    /// Right ascension minutes component.
    pub ra_m: Option<u32>,
    /// Right ascension seconds component.
    pub ra_s: Option<f64>,
    /// True when the `DE-` column carries a minus sign.
    pub de_sign_negative: bool,
    /// Declination degrees magnitude component (J2000).
    pub de_d: Option<u32>,
    /// Declination arcminutes component.
    pub de_m: Option<u32>,
    /// Declination arcseconds component.
    pub de_s: Option<u32>,

    /// Decimal right ascension in hours, [0, 24); derived at parse time.
    pub ra_hours: Option<f64>,
    /// Signed declination in degrees, [-90, 90]; derived at parse time.
    pub dec_deg: Option<f64>,

    /// Visual magnitude; lower is brighter, may be negative.
    pub vmag: Option<f64>,
    /// Johnson B−V color index.
    pub b_v: Option<f64>,
    /// Spectral type, trimmed.
    pub sp_type: String,
    /// Proper motion in RA, arcsec/yr.
    pub pm_ra: Option<f64>,
    /// Proper motion in declination, arcsec/yr.
    pub pm_de: Option<f64>,
    /// Trigonometric parallax, arcsec. `None` means unmeasured, not zero.
    pub parallax: Option<f64>,
}

impl StarRecord {
    /// Parses one catalog line.
    ///
    /// Returns `None` when the line is shorter than the mandatory
    /// astrometry region (a truncated record); the loader turns that into
    /// a [`CatalogError::MalformedRecord`](crate::CatalogError) with the
    /// line number attached. Lines shorter than the full record width have
    /// their trailing optional columns read as blank.
    pub fn from_line(line: &str) -> Option<StarRecord> {
        if line.len() < crate::schema::MANDATORY_END {
            return None;
        }
        let mut bytes = line.as_bytes().to_vec();
        if bytes.len() < RECORD_WIDTH {
            bytes.resize(RECORD_WIDTH, b' ');
        }
        Some(Self::parse(&bytes))
    }

    /// Parses a record already checked and padded to [`RECORD_WIDTH`].
    fn parse(padded: &[u8]) -> StarRecord {
        debug_assert!(padded.len() >= RECORD_WIDTH);

        let ra_h = parse_num::<u32>(padded, F_RAH);
        let ra_m = parse_num::<u32>(padded, F_RAM);
        let ra_s = parse_num::<f64>(padded, F_RAS);
        let de_sign_negative = field(padded, F_DE_SIGN).contains('-');
        let de_d = parse_num::<u32>(padded, F_DED);
        let de_m = parse_num::<u32>(padded, F_DEM);
        let de_s = parse_num::<u32>(padded, F_DES);

        let ra_hours = match (ra_h, ra_m, ra_s) {
            (Some(h), Some(m), Some(s)) => Some(hms_to_hours(f64::from(h), f64::from(m), s)),
            _ => None,
        };
        let dec_deg = match (de_d, de_m, de_s) {
            (Some(d), Some(m), Some(s)) => {
                let magnitude = dms_to_degrees(f64::from(d), f64::from(m), f64::from(s));
                Some(if de_sign_negative {
                    -magnitude
                } else {
                    magnitude
                })
            }
            _ => None,
        };

        StarRecord {
            hr: parse_num(padded, F_HR),
            name: field(padded, F_NAME).trim().to_string(),
            hd: parse_num(padded, F_HD),
            sao: parse_num(padded, F_SAO),
            ra_h,
            ra_m,
            ra_s,
            de_sign_negative,
            de_d,
            de_m,
            de_s,
            ra_hours,
            dec_deg,
            vmag: parse_num(padded, F_VMAG),
            b_v: parse_num(padded, F_BV),
            sp_type: field(padded, F_SPTYPE).trim().to_string(),
            pm_ra: parse_num(padded, F_PMRA),
            pm_de: parse_num(padded, F_PMDE),
            parallax: parse_num(padded, F_PARALLAX),
        }
    }

    /// True when the record carries everything the horizon transform needs.
    pub fn has_astrometry(&self) -> bool {
        self.ra_hours.is_some() && self.dec_deg.is_some() && self.vmag.is_some()
    }
}

/// The text of column `index`, with non-UTF-8 bytes replaced. BSC5 is
/// ASCII; the lossy conversion only matters for corrupt files, where a
/// mangled column reads as blank rather than aborting the load.
fn field(padded: &[u8], index: usize) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(&padded[span(index)])
}

/// Parses a numeric column; blank or unparseable text is `None`.
fn parse_num<T: std::str::FromStr>(padded: &[u8], index: usize) -> Option<T> {
    let text = field(padded, index);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{star_line, RecordBuilder};

    fn parse(line: &str) -> StarRecord {
        StarRecord::parse(line.as_bytes())
    }

    #[test]
    fn parses_positive_declination() {
        let rec = parse(&star_line(7001, 18, 36, 56.3, 38, 0.03));
        assert_eq!(rec.hr, Some(7001));
        assert_eq!(rec.ra_h, Some(18));
        assert!(!rec.de_sign_negative);
        let ra = rec.ra_hours.unwrap();
        assert!((ra - (18.0 + 36.0 / 60.0 + 56.3 / 3600.0)).abs() < 1e-12);
        assert_eq!(rec.dec_deg, Some(38.0));
        assert_eq!(rec.vmag, Some(0.03));
        assert!(rec.has_astrometry());
    }

    #[test]
    fn declination_sign_column_negates_magnitude() {
        let rec = parse(
            &RecordBuilder::new()
                .set("RAh", "6")
                .set("RAm", "45")
                .set("RAs", "8.9")
                .set("DE-", "-")
                .set("DEd", "16")
                .set("DEm", "42")
                .set("DEs", "58")
                .set("Vmag", "-1.46")
                .build(),
        );
        assert!(rec.de_sign_negative);
        let dec = rec.dec_deg.unwrap();
        assert!((dec - -(16.0 + 42.0 / 60.0 + 58.0 / 3600.0)).abs() < 1e-12);
        assert_eq!(rec.vmag, Some(-1.46));
    }

    #[test]
    fn blank_numeric_columns_are_missing_not_zero() {
        let rec = parse(&star_line(92, 4, 50, 0.0, 10, 5.5));
        assert_eq!(rec.parallax, None);
        assert_eq!(rec.pm_ra, None);
        assert_eq!(rec.b_v, None);
        assert_eq!(rec.hd, None);
    }

    #[test]
    fn parallax_parses_when_present() {
        let rec = parse(
            &RecordBuilder::new()
                .set("RAh", "14")
                .set("RAm", "39")
                .set("RAs", "35.9")
                .set("DE-", "-")
                .set("DEd", "60")
                .set("DEm", "50")
                .set("DEs", "7")
                .set("Vmag", "-0.01")
                .set("Parallax", ".742")
                .build(),
        );
        assert_eq!(rec.parallax, Some(0.742));
    }

    #[test]
    fn placeholder_record_lacks_astrometry() {
        let rec = parse(&RecordBuilder::new().set("HR", "182").build());
        assert_eq!(rec.hr, Some(182));
        assert_eq!(rec.ra_hours, None);
        assert_eq!(rec.dec_deg, None);
        assert_eq!(rec.vmag, None);
        assert!(!rec.has_astrometry());
    }

    #[test]
    fn string_columns_are_trimmed() {
        let rec = parse(
            &RecordBuilder::new()
                .set("Name", "9Alp CMa")
                .set("SpType", "A1Vm")
                .set("RAh", "6")
                .set("RAm", "45")
                .set("RAs", "8.9")
                .set("DEd", "16")
                .set("DEm", "42")
                .set("DEs", "58")
                .set("Vmag", "-1.46")
                .build(),
        );
        assert_eq!(rec.name, "9Alp CMa");
        assert_eq!(rec.sp_type, "A1Vm");
    }
}
