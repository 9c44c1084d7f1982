// ============================================================================
// Measurements
// Length bounds and overflow-aware squaring over IEEE-754 doubles
// ============================================================================

use arrayvec::ArrayVec;

/// Largest number of measurements any supported shape needs.
pub const MAX_MEASUREMENTS: usize = 3;

/// Inline storage for a validated measurement sequence.
pub type Measurements = ArrayVec<f64, MAX_MEASUREMENTS>;

/// Largest accepted length (inclusive).
pub const MAX_LENGTH: f64 = f64::MAX;

/// Check that a single value is a usable length: `0 < value <= f64::MAX`.
///
/// Both comparisons are false for NaN, and `+inf <= f64::MAX` is false,
/// so non-finite values fall out without an explicit `is_finite` check.
#[inline]
pub fn is_valid_length(value: f64) -> bool {
    value > 0.0 && value <= MAX_LENGTH
}

/// Square a length. Overflows to `+inf` for values above `sqrt(f64::MAX)`.
#[inline]
pub fn square(value: f64) -> f64 {
    value * value
}

/// Copy a candidate slice into inline storage.
///
/// Returns `None` when the slice is longer than any shape accepts.
#[inline]
pub(crate) fn collect(candidate: &[f64]) -> Option<Measurements> {
    let mut out = Measurements::new();
    out.try_extend_from_slice(candidate).ok()?;
    Some(out)
}
