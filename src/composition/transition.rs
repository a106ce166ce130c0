use crate::{
    composition::timeline::Presentation,
    foundation::error::{PromoError, PromoResult},
    scene::node::Node,
};

/// Default peak blur of a dissolve in pixels.
pub const DEFAULT_DISSOLVE_BLUR_PX: f64 = 16.0;

/// Cross-fade where the outgoing scene blurs away while the incoming one sharpens into focus.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlurDissolve {
    /// Blur at the far end of the transition.
    pub max_blur_px: f64,
}

impl Default for BlurDissolve {
    fn default() -> Self {
        Self {
            max_blur_px: DEFAULT_DISSOLVE_BLUR_PX,
        }
    }
}

impl BlurDissolve {
    /// Reject negative or non-finite blur.
    pub fn validate(&self) -> PromoResult<()> {
        if !self.max_blur_px.is_finite() || self.max_blur_px < 0.0 {
            return Err(PromoError::validation(
                "blur dissolve max_blur_px must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// `(opacity, blur_px)` for a sequence in `presentation`.
    pub fn style(&self, presentation: Presentation) -> (f64, f64) {
        match presentation {
            Presentation::Steady => (1.0, 0.0),
            Presentation::Entering(p) => (p, (1.0 - p) * self.max_blur_px),
            Presentation::Exiting(p) => (1.0 - p, p * self.max_blur_px),
        }
    }

    /// Apply the dissolve to a scene's root node.
    pub fn apply(&self, node: Node, presentation: Presentation) -> Node {
        let (opacity, blur) = self.style(presentation);
        let base_opacity = node.style.opacity;
        let base_blur = node.style.blur_px;
        node.opacity(base_opacity * opacity).blur(base_blur + blur)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/transition.rs"]
mod tests;
