// ============================================================================
// Shape Errors
// Error types for shape construction and rebuild
// ============================================================================

use crate::domain::ShapeKind;
use std::fmt;

/// Errors that can occur while building a shape from raw measurements.
///
/// Arithmetic overflow is never reported here: it is absorbed into the
/// floating-point result as `+inf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeError {
    /// Candidate measurements do not describe a realizable shape of `kind`
    InvalidMeasurements {
        /// Shape kind the candidate was checked against
        kind: ShapeKind,
        /// Number of values in the rejected candidate
        count: usize,
    },
}

impl ShapeError {
    /// Shape kind that rejected the measurements.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeError::InvalidMeasurements { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidMeasurements { kind, count } => {
                write!(f, "invalid {} measurements ({} values)", kind, count)
            },
        }
    }
}

impl std::error::Error for ShapeError {}

/// Result type alias for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;
