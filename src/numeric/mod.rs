// ============================================================================
// Numeric Module
// Length validation and error types for shape measurements
// ============================================================================
//
// This module provides:
// - Length bounds (0 < length <= f64::MAX)
// - Overflow-aware squaring (overflow becomes +inf, never an error)
// - ShapeError: the single construction error
//
// Design principles:
// - Plain IEEE-754 doubles throughout
// - Overflow is carried in the value domain as +inf
// - Invalid input is reported through Result (no panics)

mod errors;
mod measurement;

pub use errors::{ShapeError, ShapeResult};
pub use measurement::{is_valid_length, square, Measurements, MAX_LENGTH, MAX_MEASUREMENTS};

pub(crate) use measurement::collect;
