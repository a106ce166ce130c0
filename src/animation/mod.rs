//! Frame-to-value mapping: easing curves, breakpoint interpolation, keyframes and procedural
//! oscillators.

/// Keyframed values and the `Lerp` trait.
pub mod anim;
/// Easing curves.
pub mod ease;
/// Piecewise-linear interpolation.
pub mod interpolate;
/// Procedural oscillators.
pub mod proc;
/// Two-point clamped tweens.
pub mod tween;
