use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate_segment, validate_ranges},
    },
    foundation::error::PromoResult,
};

/// Two-breakpoint interpolation, clamped on both sides unless `clamp` is off.
///
/// This is the shape of almost every property animation in the promo: a value that moves from
/// `values[0]` to `values[1]` while the frame moves from `frames[0]` to `frames[1]`, holding the
/// edge values outside that window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// `[start, end]` frames (scene-local).
    pub frames: [f64; 2],
    /// `[from, to]` values.
    pub values: [f64; 2],
    /// Easing applied to progress.
    pub ease: Ease,
    /// Hold the edge values outside `frames`; when off the curve keeps going.
    #[serde(default = "clamp_by_default")]
    pub clamp: bool,
}

fn clamp_by_default() -> bool {
    true
}

impl Tween {
    /// Linear tween.
    pub const fn new(start: f64, end: f64, from: f64, to: f64) -> Self {
        Self {
            frames: [start, end],
            values: [from, to],
            ease: Ease::Linear,
            clamp: true,
        }
    }

    /// `0 -> 1` fade over `[start, end]`.
    pub const fn fade_in(start: f64, end: f64) -> Self {
        Self::new(start, end, 0.0, 1.0)
    }

    /// Replace the easing.
    pub const fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Extrapolate past both ends instead of clamping.
    pub const fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Same curve shifted later by `by` frames.
    pub fn delayed(self, by: f64) -> Self {
        Self {
            frames: [self.frames[0] + by, self.frames[1] + by],
            ..self
        }
    }

    /// Sample at a (possibly fractional) frame.
    pub fn sample(&self, frame: f64) -> f64 {
        interpolate_segment(
            frame,
            self.frames,
            self.values,
            self.interpolate_opts(),
        )
    }

    /// Normalized eased progress at `frame`; `[0, 1]` before overshoot when clamped.
    pub fn progress(&self, frame: f64) -> f64 {
        Tween {
            values: [0.0, 1.0],
            ..*self
        }
        .sample(frame)
    }

    /// `[min, max]` of the declared endpoint values.
    pub fn declared_range(&self) -> [f64; 2] {
        let [a, b] = self.values;
        [a.min(b), a.max(b)]
    }

    /// `[min, max]` reached inside the frame window, including easing overshoot.
    pub fn envelope(&self) -> [f64; 2] {
        let [mut lo, mut hi] = self.declared_range();
        if self.ease.overshoots() {
            const STEPS: usize = 256;
            let [a, b] = self.values;
            for i in 0..=STEPS {
                let v = a + self.ease.apply(i as f64 / STEPS as f64) * (b - a);
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        [lo, hi]
    }

    fn interpolate_opts(&self) -> InterpolateOpts {
        let opts = if self.clamp {
            InterpolateOpts::clamped()
        } else {
            InterpolateOpts::default()
        };
        opts.ease(self.ease)
    }

    /// Validate that the frame window is strictly increasing and finite.
    pub fn validate(&self) -> PromoResult<()> {
        validate_ranges(&self.frames, &self.values)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
