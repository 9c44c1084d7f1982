// ============================================================================
// Shape Factory
// Creates shapes from validated configuration
// ============================================================================

use crate::domain::{Shape, ShapeConfig};
use crate::numeric::ShapeResult;

/// Creates a shape from configuration
///
/// # Arguments
/// * `config` - Kind plus raw measurements
///
/// # Returns
/// * `ShapeResult<Shape>` - Validated shape or `InvalidMeasurements`
///
/// # Example
/// ```
/// use shape_area::prelude::*;
/// use shape_area::factory::create_from_config;
///
/// let shape = create_from_config(&ShapeConfig::triangle(3.0, 4.0, 5.0)).unwrap();
/// assert_eq!(shape.area(), 6.0);
/// ```
pub fn create_from_config(config: &ShapeConfig) -> ShapeResult<Shape> {
    // Validate configuration first
    config.validate()?;

    let shape = Shape::build(config.kind, &config.measurements)?;
    tracing::debug!(%shape, "shape created from config");

    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShapeKind;
    use crate::interfaces::PlaneShape;
    use crate::numeric::ShapeError;
    use std::f64::consts::PI;

    #[test]
    fn test_create_circle() {
        let shape = create_from_config(&ShapeConfig::circle(4.0)).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(shape.area(), 16.0 * PI);
    }

    #[test]
    fn test_create_triangle() {
        let shape = create_from_config(&ShapeConfig::triangle(14.0, 9.0, 6.0)).unwrap();
        assert_eq!(shape.measurements(), &[14.0, 9.0, 6.0]);
    }

    #[test]
    fn test_create_invalid() {
        let result = create_from_config(&ShapeConfig::circle(0.0));
        assert_eq!(
            result,
            Err(ShapeError::InvalidMeasurements {
                kind: ShapeKind::Circle,
                count: 1,
            })
        );

        let result = create_from_config(&ShapeConfig::new(ShapeKind::Circle, vec![1.0, 2.0]));
        assert!(result.is_err());
    }
}
