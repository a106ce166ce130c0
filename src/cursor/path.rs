use crate::{
    animation::{
        anim::{InterpMode, Keyframe, Keyframes},
        ease::Ease,
        tween::Tween,
    },
    foundation::{
        color::Color,
        core::{Point, Transform2D, Vec2},
        error::{PromoError, PromoResult},
    },
    scene::node::{CursorStyle, Node, NodeKind, Paint},
};

/// Frames the pointer takes to fade in before its first waypoint.
pub const FADE_IN_FRAMES: f64 = 8.0;
/// Lifetime of a click ripple in frames.
pub const RIPPLE_FRAMES: f64 = 18.0;
/// Final ripple radius as a multiple of the pointer size.
pub const RIPPLE_RADIUS_FACTOR: f64 = 2.2;
/// Length of the press dip in frames.
pub const PRESS_FRAMES: f64 = 8.0;
/// Scale lost at the bottom of the press dip.
pub const PRESS_DEPTH: f64 = 0.15;

/// One scripted pointer waypoint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    /// X in the parent's coordinate space.
    pub x: f64,
    /// Y in the parent's coordinate space.
    pub y: f64,
    /// Frame the pointer arrives here.
    pub frame: f64,
    /// Glyph from this waypoint on.
    #[serde(default)]
    pub cursor: Option<CursorStyle>,
    /// Click on arrival.
    #[serde(default)]
    pub click: bool,
    /// Easing of the move that ends here.
    #[serde(default)]
    pub ease: Option<Ease>,
}

impl Waypoint {
    /// Plain waypoint.
    pub const fn new(x: f64, y: f64, frame: f64) -> Self {
        Self {
            x,
            y,
            frame,
            cursor: None,
            click: false,
            ease: None,
        }
    }

    /// Switch glyph on arrival.
    pub const fn cursor(mut self, cursor: CursorStyle) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Click on arrival.
    pub const fn click(mut self) -> Self {
        self.click = true;
        self
    }

    /// Ease the move into this waypoint.
    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Position as a point.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Expanding circle left by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Click position.
    pub center: Point,
    /// Current radius in pixels.
    pub radius: f64,
    /// Current opacity.
    pub opacity: f64,
}

/// Pointer state at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorState {
    /// Tip position.
    pub position: Point,
    /// Current glyph.
    pub style: CursorStyle,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Press scale in `[1 - PRESS_DEPTH, 1]`.
    pub press_scale: f64,
    /// Active ripples.
    pub ripples: Vec<Ripple>,
}

/// Scripted pointer animation through an ordered list of waypoints.
#[derive(Clone, Debug)]
pub struct CursorPath {
    waypoints: Vec<Waypoint>,
    positions: Keyframes<Vec2>,
    /// Glyph size in pixels.
    pub size: f64,
    /// Glyph color.
    pub color: Color,
    /// Ripple fill color.
    pub ripple_color: Color,
}

impl CursorPath {
    /// Build a validated path. Waypoints must be non-empty, finite and ordered by frame.
    pub fn new(waypoints: Vec<Waypoint>) -> PromoResult<Self> {
        if waypoints.is_empty() {
            return Err(PromoError::validation(
                "cursor path needs at least one waypoint",
            ));
        }
        if !waypoints
            .iter()
            .all(|w| w.x.is_finite() && w.y.is_finite() && w.frame.is_finite())
        {
            return Err(PromoError::validation("cursor waypoints must be finite"));
        }

        // Keyframes ease toward the next key; waypoints ease into themselves.
        let keys = waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| Keyframe {
                frame: w.frame,
                value: Vec2::new(w.x, w.y),
                ease: waypoints
                    .get(i + 1)
                    .and_then(|next| next.ease)
                    .unwrap_or(Ease::Linear),
            })
            .collect();
        let positions = Keyframes {
            keys,
            mode: InterpMode::Linear,
        };
        positions
            .validate()
            .map_err(|e| PromoError::validation(format!("cursor path: {e}")))?;

        Ok(Self {
            waypoints,
            positions,
            size: 22.0,
            color: Color::BLACK,
            ripple_color: Color::rgba(0.0, 0.0, 0.0, 0.3),
        })
    }

    /// Glyph size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Glyph color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Ripple color.
    pub fn ripple_color(mut self, color: Color) -> Self {
        self.ripple_color = color;
        self
    }

    /// Waypoints in order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Pointer state at `frame`.
    pub fn sample(&self, frame: f64) -> PromoResult<CursorState> {
        let pos = self.positions.sample(frame)?;

        let style = self
            .waypoints
            .iter()
            .take_while(|w| w.frame <= frame)
            .filter_map(|w| w.cursor)
            .last()
            .unwrap_or_default();

        let first = self.waypoints[0].frame;
        let opacity = Tween::fade_in(first - FADE_IN_FRAMES, first).sample(frame);

        let mut press_scale = 1.0f64;
        let mut ripples = Vec::new();
        for w in self.waypoints.iter().filter(|w| w.click) {
            let d = frame - w.frame;
            if (0.0..=PRESS_FRAMES).contains(&d) {
                let dip = PRESS_DEPTH * (std::f64::consts::PI * d / PRESS_FRAMES).sin();
                press_scale = press_scale.min(1.0 - dip);
            }
            if (0.0..RIPPLE_FRAMES).contains(&d) {
                let l = d / RIPPLE_FRAMES;
                ripples.push(Ripple {
                    center: w.point(),
                    radius: Ease::OutCubic.apply(l) * RIPPLE_RADIUS_FACTOR * self.size,
                    opacity: 1.0 - l,
                });
            }
        }

        Ok(CursorState {
            position: pos.to_point(),
            style,
            opacity,
            press_scale,
            ripples,
        })
    }

    /// Display tree at `frame`: ripples underneath the pointer glyph.
    pub fn render(&self, id: &str, frame: f64) -> PromoResult<Node> {
        let state = self.sample(frame)?;

        let ripples = state.ripples.iter().enumerate().map(|(i, r)| {
            Node::rect(format!("{id}.ripple.{i}"))
                .at(r.center.x - r.radius, r.center.y - r.radius)
                .size(2.0 * r.radius, 2.0 * r.radius)
                .radius(r.radius)
                .background(Paint::solid(self.ripple_color))
                .opacity(r.opacity * state.opacity)
        });

        let pointer = Node::of_kind(
            format!("{id}.pointer"),
            NodeKind::Pointer {
                cursor: state.style,
                size: self.size,
                color: self.color,
            },
        )
        .at(state.position.x, state.position.y)
        .opacity(state.opacity)
        .transform(Transform2D::scale(state.press_scale));

        Ok(Node::group(id).children(ripples).child(pointer))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/path.rs"]
mod tests;
