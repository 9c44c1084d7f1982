// ============================================================================
// Plane Shape Interface
// Defines the validate-then-measure contract every shape implements
// ============================================================================

use crate::domain::ShapeKind;
use crate::numeric::{ShapeError, ShapeResult};

/// Contract shared by all plane shapes.
/// Implementations: Circle, Triangle
///
/// A value implementing this trait always holds measurements that passed
/// `is_valid`. Area is derived from them on every call.
pub trait PlaneShape: Send + Sync {
    /// Which kind of shape this is
    fn kind(&self) -> ShapeKind;

    /// Validated, read-only measurement sequence
    fn measurements(&self) -> &[f64];

    /// Area computed from the current measurements.
    ///
    /// Overflow in intermediate terms yields `f64::INFINITY`.
    fn area(&self) -> f64;

    /// Check whether `candidate` describes a realizable shape of this kind
    fn is_valid(candidate: &[f64]) -> bool
    where
        Self: Sized;

    /// Build from a raw measurement sequence
    ///
    /// # Errors
    /// Returns `InvalidMeasurements` when `is_valid` rejects the candidate.
    fn from_measurements(candidate: &[f64]) -> ShapeResult<Self>
    where
        Self: Sized;

    /// Rebuild with a new measurement sequence.
    ///
    /// `self` is left untouched; on rejection the caller keeps the old value.
    fn with_measurements(&self, candidate: &[f64]) -> ShapeResult<Self>
    where
        Self: Sized,
    {
        Self::from_measurements(candidate)
    }
}

/// Shared rejection path: logs the candidate and builds the error.
pub(crate) fn reject(kind: ShapeKind, candidate: &[f64]) -> ShapeError {
    tracing::debug!(%kind, ?candidate, "rejected shape measurements");
    ShapeError::InvalidMeasurements {
        kind,
        count: candidate.len(),
    }
}
