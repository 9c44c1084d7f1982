// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod plane_shape;

pub use plane_shape::PlaneShape;

pub(crate) use plane_shape::reject;
