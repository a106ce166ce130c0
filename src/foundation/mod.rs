//! Frame/time primitives, colors and the error taxonomy shared by every other module.

/// RGBA colors.
pub mod color;
/// Frames, ranges, rates and geometry.
pub mod core;
/// Error type.
pub mod error;
