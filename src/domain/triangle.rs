// ============================================================================
// Triangle Domain Model
// ============================================================================

use crate::interfaces::{reject, PlaneShape};
use crate::numeric::{collect, is_valid_length, square, Measurements, ShapeResult};
use std::fmt;

use super::ShapeKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Right-Angle Classification
// ============================================================================

/// Outcome of checking whether a triangle has a right angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RightAngleCheck {
    /// `c² == a² + b²` for the longest side `c`
    RightAngle,
    /// Squares compared and differ
    NotRightAngle,
    /// Squaring overflowed, the comparison would be meaningless
    Indeterminate,
}

impl RightAngleCheck {
    /// True only for a confirmed right angle
    pub fn is_right(self) -> bool {
        matches!(self, RightAngleCheck::RightAngle)
    }

    /// Nullable-boolean form: `None` when indeterminate
    pub fn to_option(self) -> Option<bool> {
        match self {
            RightAngleCheck::RightAngle => Some(true),
            RightAngleCheck::NotRightAngle => Some(false),
            RightAngleCheck::Indeterminate => None,
        }
    }
}

// ============================================================================
// Triangle
// ============================================================================

/// A triangle described by its three side lengths.
///
/// Sides are kept in the order they were given. Every side is a valid
/// length and the sum of any two strictly exceeds the third.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TriangleRepr", into = "TriangleRepr"))]
pub struct Triangle {
    measurements: Measurements,
}

impl Triangle {
    /// Create a triangle from three sides
    ///
    /// # Errors
    /// Returns `InvalidMeasurements` if any side is not in `(0, f64::MAX]`
    /// or the sides violate the triangle inequality.
    pub fn new(a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        Self::from_measurements(&[a, b, c])
    }

    /// Sides in construction order
    pub fn sides(&self) -> [f64; 3] {
        let m = &self.measurements;
        [m[0], m[1], m[2]]
    }

    /// Check for a right angle.
    ///
    /// Sides are sorted longest first and squared. If the longest square or
    /// the sum of the other two overflows, the answer is `Indeterminate`.
    /// Otherwise equality is exact, with no tolerance.
    pub fn is_right_triangle(&self) -> RightAngleCheck {
        let mut sorted = self.sides();
        sorted.sort_by(|x, y| y.total_cmp(x));
        let [c, b, a] = sorted;

        let hypotenuse_sq = square(c);
        let legs_sq = square(b) + square(a);

        if hypotenuse_sq.is_infinite() || legs_sq.is_infinite() {
            tracing::debug!(sides = ?self.sides(), "right-angle check overflowed");
            return RightAngleCheck::Indeterminate;
        }

        if hypotenuse_sq == legs_sq {
            RightAngleCheck::RightAngle
        } else {
            RightAngleCheck::NotRightAngle
        }
    }

    /// Half the perimeter. Overflows to `+inf` for sides near `f64::MAX`.
    fn semi_perimeter(&self) -> f64 {
        let [a, b, c] = self.sides();
        (a + b + c) / 2.0
    }
}

impl PlaneShape for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn measurements(&self) -> &[f64] {
        &self.measurements
    }

    /// Heron's formula. Intermediate overflow propagates as `+inf`.
    fn area(&self) -> f64 {
        let [a, b, c] = self.sides();
        let p = self.semi_perimeter();
        (p * (p - a) * (p - b) * (p - c)).sqrt()
    }

    fn is_valid(candidate: &[f64]) -> bool {
        let &[a, b, c] = candidate else {
            return false;
        };

        let lengths_ok = [a, b, c].into_iter().all(is_valid_length);
        let inequality_ok = (a + b > c) & (a + c > b) & (b + c > a);

        lengths_ok && inequality_ok
    }

    fn from_measurements(candidate: &[f64]) -> ShapeResult<Self> {
        let measurements = match collect(candidate) {
            Some(measurements) if Self::is_valid(candidate) => measurements,
            _ => return Err(reject(ShapeKind::Triangle, candidate)),
        };
        tracing::trace!(sides = ?candidate, "triangle created");
        Ok(Self { measurements })
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.sides();
        write!(f, "triangle({}, {}, {})", a, b, c)
    }
}

// ============================================================================
// Serialized form (validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct TriangleRepr {
    sides: [f64; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<TriangleRepr> for Triangle {
    type Error = crate::numeric::ShapeError;

    fn try_from(repr: TriangleRepr) -> Result<Self, Self::Error> {
        let [a, b, c] = repr.sides;
        Triangle::new(a, b, c)
    }
}

#[cfg(feature = "serde")]
impl From<Triangle> for TriangleRepr {
    fn from(triangle: Triangle) -> Self {
        Self {
            sides: triangle.sides(),
        }
    }
}
