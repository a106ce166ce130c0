//! Composition root: scene sequencing, transitions and the assembled promo.

/// The assembled promo.
pub mod promo;
/// Scene timings and transition windows.
pub mod timeline;
/// Blur-dissolve presentation.
pub mod transition;

pub use promo::{Artifact, ArtifactKind, FontRequest, Promo};
pub use timeline::{ActiveSequence, Presentation, PromoTimings, TransitionSeries};
pub use transition::BlurDissolve;
