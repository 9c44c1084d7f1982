// ============================================================================
// Circle Domain Model
// ============================================================================

use crate::interfaces::{reject, PlaneShape};
use crate::numeric::{collect, is_valid_length, Measurements, ShapeResult};
use std::f64::consts::PI;
use std::fmt;

use super::ShapeKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle described by its radius.
///
/// Always holds exactly one valid length. Build with [`Circle::new`] or
/// [`PlaneShape::from_measurements`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CircleRepr", into = "CircleRepr"))]
pub struct Circle {
    measurements: Measurements,
}

impl Circle {
    /// Create a circle with the given radius
    ///
    /// # Errors
    /// Returns `InvalidMeasurements` unless `0 < radius <= f64::MAX`.
    pub fn new(radius: f64) -> ShapeResult<Self> {
        Self::from_measurements(&[radius])
    }

    pub fn radius(&self) -> f64 {
        self.measurements[0]
    }
}

impl PlaneShape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn measurements(&self) -> &[f64] {
        &self.measurements
    }

    /// `π·r·r`; radii above roughly `sqrt(f64::MAX / π)` give `+inf`.
    fn area(&self) -> f64 {
        let r = self.radius();
        PI * r * r
    }

    fn is_valid(candidate: &[f64]) -> bool {
        matches!(candidate, [radius] if is_valid_length(*radius))
    }

    fn from_measurements(candidate: &[f64]) -> ShapeResult<Self> {
        let measurements = match collect(candidate) {
            Some(measurements) if Self::is_valid(candidate) => measurements,
            _ => return Err(reject(ShapeKind::Circle, candidate)),
        };
        tracing::trace!(radius = candidate[0], "circle created");
        Ok(Self { measurements })
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle(r={})", self.radius())
    }
}

// ============================================================================
// Serialized form (validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CircleRepr {
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CircleRepr> for Circle {
    type Error = crate::numeric::ShapeError;

    fn try_from(repr: CircleRepr) -> Result<Self, Self::Error> {
        Circle::new(repr.radius)
    }
}

#[cfg(feature = "serde")]
impl From<Circle> for CircleRepr {
    fn from(circle: Circle) -> Self {
        Self {
            radius: circle.radius(),
        }
    }
}
