// ============================================================================
// Shape Sum Type
// Closed set of shape variants behind one contract
// ============================================================================

use crate::interfaces::{reject, PlaneShape};
use crate::numeric::ShapeResult;
use std::fmt;

use super::{Circle, ShapeKind, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any supported shape.
///
/// As a [`PlaneShape`], the variant is picked from the measurement count:
/// one value builds a circle, three build a triangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape {
    /// Build a shape of a specific kind
    ///
    /// # Errors
    /// Returns `InvalidMeasurements` when the candidate is not a valid `kind`.
    pub fn build(kind: ShapeKind, candidate: &[f64]) -> ShapeResult<Self> {
        match kind {
            ShapeKind::Circle => Circle::from_measurements(candidate).map(Shape::Circle),
            ShapeKind::Triangle => Triangle::from_measurements(candidate).map(Shape::Triangle),
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            Shape::Triangle(_) => None,
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Shape::Triangle(triangle) => Some(triangle),
            Shape::Circle(_) => None,
        }
    }
}

impl PlaneShape for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(circle) => circle.kind(),
            Shape::Triangle(triangle) => triangle.kind(),
        }
    }

    fn measurements(&self) -> &[f64] {
        match self {
            Shape::Circle(circle) => circle.measurements(),
            Shape::Triangle(triangle) => triangle.measurements(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::Triangle(triangle) => triangle.area(),
        }
    }

    fn is_valid(candidate: &[f64]) -> bool {
        Circle::is_valid(candidate) || Triangle::is_valid(candidate)
    }

    fn from_measurements(candidate: &[f64]) -> ShapeResult<Self> {
        match candidate.len() {
            1 => Self::build(ShapeKind::Circle, candidate),
            3 => Self::build(ShapeKind::Triangle, candidate),
            // No kind matches the count; report against the nearer one
            n if n < 2 => Err(reject(ShapeKind::Circle, candidate)),
            _ => Err(reject(ShapeKind::Triangle, candidate)),
        }
    }

    /// Rebuild within the same variant; a circle never turns into a triangle.
    fn with_measurements(&self, candidate: &[f64]) -> ShapeResult<Self> {
        Self::build(self.kind(), candidate)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(circle) => fmt::Display::fmt(circle, f),
            Shape::Triangle(triangle) => fmt::Display::fmt(triangle, f),
        }
    }
}
