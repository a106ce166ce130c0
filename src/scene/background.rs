use crate::{
    animation::interpolate::{InterpolateOpts, interpolate_segment},
    foundation::{color::Color, error::PromoResult},
    scene::{
        SceneCtx,
        node::{Node, NodeKind, Paint},
        palette,
    },
};

/// Grid cell size in pixels.
pub const GRID_CELL_PX: f64 = 60.0;
/// Grid drift speed in pixels per second (downwards).
pub const GRID_VELOCITY_PX_PER_SEC: f64 = 12.0;
/// Hue at the first frame.
pub const HUE_START: f64 = 220.0;
/// Hue at the last frame.
pub const HUE_END: f64 = 260.0;

const GRID_OPACITY: f64 = 0.5;

/// Persistent backdrop behind every scene: ink fill, drifting grid, hue-shifting glows and a
/// vignette.
///
/// Unlike the scenes it is driven by the composition frame, not a scene-local one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalBackground {
    total_frames: u64,
}

impl GlobalBackground {
    /// Background for a composition of `total_frames`.
    pub fn new(total_frames: u64) -> Self {
        Self { total_frames }
    }

    /// Glow hue in degrees at composition `frame`. Extends to the left, clamps on the right.
    pub fn hue(&self, frame: f64) -> f64 {
        interpolate_segment(
            frame,
            [0.0, self.total_frames as f64],
            [HUE_START, HUE_END],
            InterpolateOpts::default().clamp_right(),
        )
    }

    /// Grid scroll offset in `[0, GRID_CELL_PX)`.
    pub fn grid_offset(&self, ctx: &SceneCtx) -> f64 {
        (ctx.t_secs() * GRID_VELOCITY_PX_PER_SEC).rem_euclid(GRID_CELL_PX)
    }

    /// Display tree at `ctx.frame` (composition frame).
    pub fn render(&self, ctx: &SceneCtx) -> PromoResult<Node> {
        let (w, h) = (ctx.width(), ctx.height());
        let hue = self.hue(ctx.frame);
        let layer = |id: &str| Node::rect(id).at(0.0, 0.0).size(w, h);

        let grid = Node::of_kind(
            "background.grid",
            NodeKind::Grid {
                cell_size: GRID_CELL_PX,
                offset_y: self.grid_offset(ctx),
                color: palette::white(0.025),
                fade_edges: true,
            },
        )
        .at(0.0, 0.0)
        .size(w, h)
        .opacity(GRID_OPACITY);

        Ok(Node::group("background")
            .at(0.0, 0.0)
            .size(w, h)
            .child(layer("background.fill").background(Paint::solid(palette::INK)))
            .child(grid)
            .child(layer("background.glow.primary").background(Paint::radial(
                0.3,
                0.2,
                &[
                    (0.0, Color::hsla(hue, 0.7, 0.5, 0.08)),
                    (0.5, Color::TRANSPARENT),
                ],
            )))
            .child(layer("background.glow.secondary").background(Paint::radial(
                0.7,
                0.8,
                &[
                    (0.0, Color::hsla(hue + 40.0, 0.6, 0.4, 0.06)),
                    (0.5, Color::TRANSPARENT),
                ],
            )))
            .child(layer("background.vignette").background(Paint::radial(
                0.5,
                0.5,
                &[(0.5, Color::TRANSPARENT), (1.0, palette::black(0.5))],
            ))))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/background.rs"]
mod tests;
