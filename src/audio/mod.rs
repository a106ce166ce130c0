//! Audio cue placement for the external muxer.

/// Cue placement and sample-space conversion.
pub mod cues;

pub use cues::{AudioConfig, AudioCue, AudioManifest, CueSegment, frame_to_sample};
