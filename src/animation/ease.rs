use crate::foundation::error::{PromoError, PromoResult};
use std::str::FromStr;

/// Overshoot used by the back curves when no explicit value is given.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-out.
    OutQuart,
    /// Anticipating ease-in with the given overshoot.
    InBack(f64),
    /// Overshooting ease-out with the given overshoot.
    OutBack(f64),
    /// CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    Bezier(f64, f64, f64, f64),
}

impl Ease {
    /// Apply this easing function to normalized progress `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        self.apply_unclamped(t.clamp(0.0, 1.0))
    }

    /// Apply without clamping `t`. Polynomial curves extend naturally; bezier curves clamp.
    pub fn apply_unclamped(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InBack(s) => back_in(t, s),
            Self::OutBack(s) => 1.0 - back_in(1.0 - t, s),
            Self::Bezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t.clamp(0.0, 1.0)),
        }
    }

    /// Return `true` when outputs can leave `[0, 1]` for inputs in `[0, 1]`.
    pub fn overshoots(self) -> bool {
        match self {
            Self::InBack(s) | Self::OutBack(s) => s > 0.0,
            Self::Bezier(_, y1, _, y2) => !(0.0..=1.0).contains(&y1) || !(0.0..=1.0).contains(&y2),
            _ => false,
        }
    }

    /// Resolve a named preset (`power2.out`, `smooth`, ...).
    pub fn from_name(name: &str) -> PromoResult<Self> {
        let name = name.trim().to_ascii_lowercase();
        let ease = match name.as_str() {
            "linear" | "none" => Self::Linear,
            "power1.in" => Self::InQuad,
            "power1.out" => Self::OutQuad,
            "power1.inout" => Self::InOutQuad,
            "power2.in" => Self::InCubic,
            "power2.out" => Self::OutCubic,
            "power2.inout" => Self::InOutCubic,
            "power3.out" => Self::OutQuart,
            "back.in" => Self::InBack(DEFAULT_BACK_OVERSHOOT),
            "back.out" => Self::OutBack(DEFAULT_BACK_OVERSHOOT),
            "smooth" => Self::InOutCubic,
            "slow" => Self::Bezier(0.22, 1.0, 0.36, 1.0),
            other => {
                return Err(PromoError::animation(format!("unknown ease '{other}'")));
            }
        };
        Ok(ease)
    }
}

impl FromStr for Ease {
    type Err = PromoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

fn back_in(t: f64, s: f64) -> f64 {
    t * t * ((s + 1.0) * t - s)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    fn coord(p1: f64, p2: f64, s: f64) -> f64 {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    }
    fn slope(p1: f64, p2: f64, s: f64) -> f64 {
        let u = 1.0 - s;
        3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    // Newton first, bisection when the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let dx = coord(x1, x2, s) - x;
        if dx.abs() < 1e-7 {
            return coord(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - dx / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..48 {
        let cx = coord(x1, x2, s);
        if (cx - x).abs() < 1e-7 {
            break;
        }
        if cx < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    coord(y1, y2, s)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
