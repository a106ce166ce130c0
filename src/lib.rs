//! Typeframes promo: a deterministic, frame-addressed description of a 1920x1080 @ 30 fps product
//! promo video.
//!
//! The crate never rasterizes. For every frame it produces a display tree that an external renderer
//! draws, plus audio cue placements and capture artifacts:
//!
//! - Load a [`PromoConfig`] (or use the default) and build a [`Promo`]
//! - Evaluate single frames or ranges with [`Evaluator`]
//! - Stream a range into a [`FrameSink`] with [`export_range`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves, interpolation and oscillators.
pub mod animation;
/// Audio cue placement.
pub mod audio;
/// Scene sequencing and the assembled promo.
pub mod composition;
/// JSON configuration.
pub mod config;
/// Scripted pointer animation.
pub mod cursor;
/// Frame sinks and export.
pub mod encode;
/// Frame evaluation, fingerprints and bounds checks.
pub mod eval;
/// Shared primitives and errors.
pub mod foundation;
/// Tracing subscriber setup.
pub mod logging;
/// Display tree and scene components.
pub mod scene;
/// Text animation primitives.
pub mod text;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Transform2D};
pub use crate::foundation::error::{PromoError, PromoResult};

pub use crate::audio::{AudioCue, AudioManifest};
pub use crate::composition::{Presentation, Promo, TransitionSeries};
pub use crate::config::PromoConfig;
pub use crate::encode::{
    ExportOpts, ExportStats, FrameSink, InMemorySink, JsonLinesSink, SinkConfig, export_all,
    export_range,
};
pub use crate::eval::{
    BoundsViolation, EvalOpts, EvaluatedFrame, Evaluator, FrameFingerprint, check_bounds,
    fingerprint,
};
pub use crate::logging::{LoggingConfig, init_logging};
pub use crate::scene::node::Node;
