//! Text animation primitives: unit splitting, staggered entrance presets and a typewriter.

/// Staggered word and character entrances.
pub mod reveal;
/// Splitting text into animated units.
pub mod split;
/// Character-by-character typing with a caret.
pub mod typewriter;

pub use reveal::{AnimatedText, Stagger, TextEffect, UnitState};
pub use split::{Unit, UnitSpan, split_units};
pub use typewriter::Typewriter;
