//! Frame evaluation: display trees, fingerprints and bounds checks.

/// Range checks over evaluated display trees.
pub mod bounds;
/// Single-frame and range evaluation.
pub mod evaluator;
/// Stable display-tree hashing.
pub mod fingerprint;

pub use bounds::{BoundsViolation, check_bounds};
pub use evaluator::{EvalOpts, EvaluatedFrame, Evaluator};
pub use fingerprint::{FrameFingerprint, fingerprint, fingerprint_node};
