// ============================================================================
// Shape Configuration
// Declarative description of a shape, validated before it is built
// ============================================================================

use crate::interfaces::{reject, PlaneShape};
use crate::numeric::ShapeResult;

use super::{Circle, ShapeKind, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw description of a shape: a kind plus unvalidated measurements.
///
/// This is what crosses API boundaries (JSON, config files). Turn it into
/// a [`Shape`](super::Shape) with
/// [`create_from_config`](crate::factory::create_from_config).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeConfig {
    /// Which shape the measurements describe
    pub kind: ShapeKind,

    /// Radius for a circle, three sides for a triangle
    pub measurements: Vec<f64>,
}

impl ShapeConfig {
    pub fn new(kind: ShapeKind, measurements: Vec<f64>) -> Self {
        Self { kind, measurements }
    }

    /// Circle with the given radius
    pub fn circle(radius: f64) -> Self {
        Self::new(ShapeKind::Circle, vec![radius])
    }

    /// Triangle with the given sides
    pub fn triangle(a: f64, b: f64, c: f64) -> Self {
        Self::new(ShapeKind::Triangle, vec![a, b, c])
    }

    /// Validate the configuration without building anything
    ///
    /// # Errors
    /// Returns `InvalidMeasurements` if the measurement count does not
    /// match the kind or the values are not a realizable shape.
    pub fn validate(&self) -> ShapeResult<()> {
        let candidate = self.measurements.as_slice();

        // Each kind's rule rejects a wrong count on its own
        let valid = match self.kind {
            ShapeKind::Circle => Circle::is_valid(candidate),
            ShapeKind::Triangle => Triangle::is_valid(candidate),
        };

        if valid {
            Ok(())
        } else {
            Err(reject(self.kind, candidate))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ShapeError;

    #[test]
    fn test_config_creation() {
        let config = ShapeConfig::circle(2.0);
        assert_eq!(config.kind, ShapeKind::Circle);
        assert_eq!(config.measurements, vec![2.0]);
        assert!(config.validate().is_ok());

        let config = ShapeConfig::triangle(3.0, 4.0, 5.0);
        assert_eq!(config.kind, ShapeKind::Triangle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let config = ShapeConfig::new(ShapeKind::Triangle, vec![3.0, 4.0]);
        assert_eq!(
            config.validate(),
            Err(ShapeError::InvalidMeasurements {
                kind: ShapeKind::Triangle,
                count: 2,
            })
        );

        let config = ShapeConfig::new(ShapeKind::Circle, vec![3.0, 4.0, 5.0]);
        assert_eq!(
            config.validate(),
            Err(ShapeError::InvalidMeasurements {
                kind: ShapeKind::Circle,
                count: 3,
            })
        );

        let config = ShapeConfig::new(ShapeKind::Circle, Vec::new());
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_config() {
        let config: ShapeConfig =
            serde_json::from_str(r#"{"kind":"circle","measurements":[2.0]}"#).unwrap();
        assert_eq!(config, ShapeConfig::circle(2.0));

        // Raw configs deserialize as-is; validation is a separate step
        let config: ShapeConfig =
            serde_json::from_str(r#"{"kind":"triangle","measurements":[1.0]}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation() {
        assert!(ShapeConfig::circle(-1.0).validate().is_err());
        assert!(ShapeConfig::triangle(1.0, 2.0, 3.0).validate().is_err());
        assert!(ShapeConfig::triangle(f64::MAX, f64::MAX, f64::MAX)
            .validate()
            .is_ok());
    }
}
