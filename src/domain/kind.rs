// ============================================================================
// Shape Kind
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of supported shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    /// Defined by a radius
    Circle,
    /// Defined by three side lengths
    Triangle,
}

impl ShapeKind {
    /// Number of measurements a shape of this kind is defined by
    pub const fn measurement_count(self) -> usize {
        match self {
            ShapeKind::Circle => 1,
            ShapeKind::Triangle => 3,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "circle"),
            ShapeKind::Triangle => write!(f, "triangle"),
        }
    }
}
