// ============================================================================
// Utilities Module
// Helpers for binaries built on top of the library
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
