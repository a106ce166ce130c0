//! Scripted pointer animation (moves, glyph changes, clicks).

/// Waypoint-driven pointer path.
pub mod path;

pub use path::{CursorPath, CursorState, Ripple, Waypoint};
