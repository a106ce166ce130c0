use crate::{
    animation::ease::Ease,
    foundation::color::Color,
    foundation::core::Vec2,
    foundation::error::{PromoError, PromoResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (normally `[0, 1]`, may overshoot).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Color::rgba(
            f64::lerp(&a.r, &b.r, t).clamp(0.0, 1.0),
            f64::lerp(&a.g, &b.g, t).clamp(0.0, 1.0),
            f64::lerp(&a.b, &b.b, t).clamp(0.0, 1.0),
            f64::lerp(&a.a, &b.a, t).clamp(0.0, 1.0),
        )
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One keyframe in a keyframed animation.
pub struct Keyframe<T> {
    /// Frame of this key.
    pub frame: f64,
    /// Value at `frame`.
    pub value: T,
    /// Easing function applied toward the next keyframe.
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Interpolation strategy between keyframes.
pub enum InterpMode {
    /// Hold the previous key value until the next keyframe.
    Hold,
    /// Interpolate between keyframes using [`Ease`].
    Linear,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Keyframed animation, holding the edge keys outside the keyed window.
pub struct Keyframes<T> {
    /// Keyframes sorted by `frame`.
    pub keys: Vec<Keyframe<T>>, // sorted by frame
    /// Interpolation mode between adjacent keyframes.
    pub mode: InterpMode,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Validate keyframe ordering.
    pub fn validate(&self) -> PromoResult<()> {
        if self.keys.is_empty() {
            return Err(PromoError::animation(
                "Keyframes must have at least one key",
            ));
        }
        if !self.keys.iter().all(|k| k.frame.is_finite()) {
            return Err(PromoError::animation("Keyframes frames must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(PromoError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Sample at `frame`.
    pub fn sample(&self, frame: f64) -> PromoResult<T> {
        let Some(first) = self.keys.first() else {
            return Err(PromoError::animation("Keyframes has no keys"));
        };

        let idx = self.keys.partition_point(|k| k.frame <= frame);
        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame - a.frame;
        if denom <= 0.0 {
            return Ok(a.value.clone());
        }

        let t = (frame - a.frame) / denom;
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }

    /// Index of the last key at or before `frame`, if any.
    pub fn key_at_or_before(&self, frame: f64) -> Option<usize> {
        self.keys.partition_point(|k| k.frame <= frame).checked_sub(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
