// ============================================================================
// Domain Models Module
// Contains the shape variants and their configuration
// ============================================================================

pub mod circle;
pub mod config;
pub mod kind;
pub mod shape;
pub mod triangle;

pub use circle::Circle;
pub use config::ShapeConfig;
pub use kind::ShapeKind;
pub use shape::Shape;
pub use triangle::{RightAngleCheck, Triangle};
