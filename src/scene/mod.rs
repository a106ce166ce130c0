//! Display tree model and the promo's scene components.
//!
//! Every scene is a pure function of its scene-local frame: calling [`Scene::render`] twice with
//! the same [`SceneCtx`] yields identical trees.

/// Persistent animated background.
pub mod background;
/// Call-to-action scene.
pub mod cta;
/// Opening hero scene.
pub mod hero;
/// Display tree nodes and styles.
pub mod node;
/// Shared colors.
pub mod palette;
/// Product showcase scene with the scripted browser demo.
pub mod showcase;
/// Three-step explainer scene.
pub mod steps;

use crate::foundation::{
    core::{Canvas, Fps},
    error::PromoResult,
};
use node::Node;

/// Inputs available to a scene for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Scene-local frame (0 at the first frame of the scene's sequence).
    pub frame: f64,
    /// Composition frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
}

impl SceneCtx {
    /// Scene-local time in seconds.
    pub fn t_secs(&self) -> f64 {
        self.fps.frame_pos_to_secs(self.frame)
    }

    /// Seconds elapsed since scene-local frame `origin` (negative before it).
    pub fn secs_since(&self, origin: f64) -> f64 {
        self.fps.frame_pos_to_secs(self.frame - origin)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f64 {
        f64::from(self.canvas.width)
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f64 {
        f64::from(self.canvas.height)
    }
}

/// A self-contained timed animation segment.
pub trait Scene: Send + Sync {
    /// Short stable name, used as the root node id.
    fn name(&self) -> &'static str;

    /// Length of the scene's sequence in frames.
    fn duration_frames(&self) -> u64;

    /// Build the display tree for `ctx.frame`.
    fn render(&self, ctx: &SceneCtx) -> PromoResult<Node>;
}

/// Full-canvas root container shared by every scene.
pub(crate) fn scene_root(name: &str, ctx: &SceneCtx) -> Node {
    Node::group(name).at(0.0, 0.0).size(ctx.width(), ctx.height())
}

/// Full-canvas centered column for a scene's main content.
pub(crate) fn content_column(id: impl Into<String>, ctx: &SceneCtx, gap: f64) -> Node {
    Node::group(id)
        .at(0.0, 0.0)
        .size(ctx.width(), ctx.height())
        .layout(node::Layout::column(gap))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
