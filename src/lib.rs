// ============================================================================
// Shape Area Library
// Validated plane shapes with overflow-aware area computation
// ============================================================================

//! # Shape Area
//!
//! Plane shapes built from a minimal set of measurements, validated before
//! any area is computed.
//!
//! ## Features
//!
//! - **Validate-then-measure**: a shape value only exists if its
//!   measurements describe a realizable shape
//! - **Circle** (radius) and **Triangle** (three sides, Heron's formula)
//! - **Overflow as a value**: areas that exceed `f64::MAX` come back as `+inf`
//! - **Right-angle check** that reports `Indeterminate` instead of guessing
//!   when squaring overflows
//!
//! ## Example
//!
//! ```rust
//! use shape_area::prelude::*;
//!
//! let circle = Circle::new(4.0).unwrap();
//! assert_eq!(circle.area(), 16.0 * std::f64::consts::PI);
//!
//! let triangle = Triangle::new(3.0, 4.0, 5.0).unwrap();
//! assert_eq!(triangle.area(), 6.0);
//! assert_eq!(triangle.is_right_triangle(), RightAngleCheck::RightAngle);
//!
//! // Rebuilding never mutates; a rejected rebuild leaves the original intact
//! assert!(circle.with_measurements(&[10.1, 5.0]).is_err());
//! assert_eq!(circle.radius(), 4.0);
//!
//! // Sides that violate the triangle inequality never become a Triangle
//! assert!(Triangle::new(1.0, 2.0, 3.0).is_err());
//! ```

pub mod domain;
pub mod factory;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Circle, RightAngleCheck, Shape, ShapeConfig, ShapeKind, Triangle};
    pub use crate::factory::create_from_config;
    pub use crate::interfaces::PlaneShape;
    pub use crate::numeric::{ShapeError, ShapeResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use std::f64::consts::PI;

    #[test]
    fn test_end_to_end_shapes() {
        let configs = vec![
            ShapeConfig::circle(4.0),
            ShapeConfig::triangle(14.0, 9.0, 6.0),
            ShapeConfig::triangle(3.0, 4.0, 5.0),
        ];

        let shapes: Vec<Shape> = configs
            .iter()
            .map(create_from_config)
            .collect::<ShapeResult<_>>()
            .unwrap();

        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].area(), 16.0 * PI);
        assert!(shapes.iter().all(|s| s.area() > 0.0));

        let right: Vec<_> = shapes
            .iter()
            .filter_map(Shape::as_triangle)
            .map(Triangle::is_right_triangle)
            .collect();
        assert_eq!(
            right,
            vec![RightAngleCheck::NotRightAngle, RightAngleCheck::RightAngle]
        );
    }

    #[test]
    fn test_overflow_is_a_value_not_an_error() {
        let third = f64::MAX / 3.0;

        let circle = Circle::new(f64::MAX / 2.0).unwrap();
        let triangle = Triangle::new(third, third, third).unwrap();

        assert_eq!(circle.area(), f64::INFINITY);
        assert_eq!(triangle.area(), f64::INFINITY);
        assert_eq!(triangle.is_right_triangle(), RightAngleCheck::Indeterminate);
    }

    #[test]
    fn test_shapes_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Circle>();
        assert_send_sync::<Triangle>();
        assert_send_sync::<Shape>();
    }

    proptest! {
        #[test]
        fn prop_valid_circle_area(radius in f64::MIN_POSITIVE..=f64::MAX) {
            let circle = Circle::new(radius).unwrap();
            prop_assert_eq!(circle.area(), PI * radius * radius);
            prop_assert_eq!(circle.measurements(), &[radius][..]);
        }

        #[test]
        fn prop_finite_circle_area(radius in 1e-150f64..1e150) {
            // Squares stay well inside f64 range here
            let circle = Circle::new(radius).unwrap();
            let area = circle.area();
            prop_assert!(area.is_finite());
            prop_assert!(area > 0.0);
            prop_assert_eq!(area, PI * radius * radius);
        }

        #[test]
        fn prop_circle_area_by_exponent(mantissa in 1.0f64..2.0, exp in -500i32..500) {
            let radius = mantissa * 2f64.powi(exp);
            let circle = Circle::new(radius).unwrap();
            prop_assert_eq!(circle.area().to_bits(), (PI * radius * radius).to_bits());
        }

        #[test]
        fn prop_non_positive_radius_rejected(radius in -1e300f64..=0.0) {
            prop_assert!(Circle::new(radius).is_err());
        }

        #[test]
        fn prop_inequality_violation_rejected(
            a in 1e-3f64..1e3,
            b in 1e-3f64..1e3,
            extra in 0.0f64..1e3,
        ) {
            // c >= a + b can never close a triangle
            let c = a + b + extra;
            prop_assert!(Triangle::new(a, b, c).is_err());
            prop_assert!(Triangle::new(c, a, b).is_err());
        }

        #[test]
        fn prop_triangle_area_non_negative(
            a in 1e-3f64..1e6,
            b in 1e-3f64..1e6,
            t in 0.01f64..0.99,
        ) {
            // Pick c strictly between |a - b| and a + b
            let low = (a - b).abs();
            let c = low + (a + b - low) * t;
            let triangle = Triangle::new(a, b, c).unwrap();
            let area = triangle.area();
            prop_assert!(area >= 0.0);

            let p = (a + b + c) / 2.0;
            let heron = (p * (p - a) * (p - b) * (p - c)).sqrt();
            prop_assert_eq!(area.to_bits(), heron.to_bits());
        }
    }

    quickcheck! {
        fn qc_rejected_rebuild_keeps_circle(extra: Vec<f64>) -> bool {
            let circle = Circle::new(7.0).unwrap();
            let mut candidate = vec![1.0, 2.0];
            candidate.extend(extra);

            circle.with_measurements(&candidate).is_err() && circle.radius() == 7.0
        }
    }
}
