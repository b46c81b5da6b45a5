//! Magnitude → marker size and opacity.
//!
//! Magnitude is a reversed logarithmic scale (lower = brighter), so both
//! encodings invert it: bright stars get large, opaque markers; faint ones
//! shrink and fade.
//!
//! The size constants are tuned visual knobs with no physical meaning;
//! do not read astronomy into them. Opacity is *relative to the visible
//! set*: the brightest star on this particular chart is fully opaque, the
//! faintest nearly transparent, regardless of what the catalog-wide
//! extremes are.

/// Numerator of the size curve.
pub const SIZE_NUMERATOR: f64 = 100.0;

/// Offset keeping the size denominator positive for every catalog
/// magnitude (the brightest star in BSC5 is Sirius at −1.46).
pub const SIZE_OFFSET: f64 = 2.0;

/// Marker area for a star of the given magnitude: `100 / (vmag + 2)`.
pub fn marker_size(vmag: f64) -> f64 {
    SIZE_NUMERATOR / (vmag + SIZE_OFFSET)
}

/// Opacities for the visible set, in input order, each in [0, 1]:
/// `(max − v + 1) / (max − min + 1)` over the given magnitudes.
///
/// The `+1` in numerator and denominator is the degenerate-set guard: when
/// every visible star shares one magnitude, `max == min` and the formula
/// collapses to 1.0 for all of them instead of dividing by zero. Empty
/// input yields empty output; an empty chart is not an error.
pub fn relative_opacities(vmags: &[f64]) -> Vec<f64> {
    let Some(first) = vmags.first() else {
        return Vec::new();
    };
    let (min, max) = vmags.iter().fold((*first, *first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    vmags
        .iter()
        .map(|&v| (max - v + 1.0) / (max - min + 1.0))
        .collect()
}
