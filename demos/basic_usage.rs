// ============================================================================
// Basic Usage Example
// ============================================================================

use shape_area::prelude::*;
use shape_area::utils::init_logging;
use tracing::Level;

fn main() {
    init_logging(Level::DEBUG);

    println!("=== Shape Area Example ===\n");

    // Circles
    println!("Circles...");
    for radius in [4.0, f64::MAX / 2.0, 0.0, f64::INFINITY] {
        match Circle::new(radius) {
            Ok(circle) => println!("  {} -> area {}", circle, circle.area()),
            Err(e) => println!("  radius {} -> {}", radius, e),
        }
    }

    // Triangles
    println!("\nTriangles...");
    let third = f64::MAX / 3.0;
    for [a, b, c] in [
        [14.0, 9.0, 6.0],
        [3.0, 4.0, 5.0],
        [3.0, 4.0, 6.0],
        [third, third, third],
        [1.0, 2.0, 3.0],
    ] {
        match Triangle::new(a, b, c) {
            Ok(triangle) => println!(
                "  {} -> area {}, right angle: {:?}",
                triangle,
                triangle.area(),
                triangle.is_right_triangle()
            ),
            Err(e) => println!("  ({}, {}, {}) -> {}", a, b, c, e),
        }
    }

    // Rebuild
    println!("\nRebuilding a circle with two measurements...");
    let circle = Circle::new(10.0).unwrap();
    match circle.with_measurements(&[10.1, 5.0]) {
        Ok(rebuilt) => println!("  unexpected: {}", rebuilt),
        Err(e) => println!("  {} (original still {})", e, circle),
    }

    // From configuration
    println!("\nFrom configuration...");
    let configs = [
        ShapeConfig::circle(1.0),
        ShapeConfig::triangle(6.0, 8.0, 10.0),
        ShapeConfig::new(ShapeKind::Triangle, vec![1.0, 1.0]),
    ];
    for config in &configs {
        match create_from_config(config) {
            Ok(shape) => println!("  {} -> area {}", shape, shape.area()),
            Err(e) => println!("  {:?} -> {}", config.measurements, e),
        }
    }

    println!("\n=== Example Complete ===");
}
