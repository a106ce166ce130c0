use crate::{
    eval::evaluator::EvaluatedFrame,
    foundation::color::Color,
    scene::node::{Node, NodeKind, Paint},
};

/// A display-tree property outside its valid range.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BoundsViolation {
    /// Path of node ids from the root, joined with `/`.
    pub node_path: String,
    /// Offending property.
    pub property: &'static str,
    /// Offending value.
    pub value: f64,
}

impl std::fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} = {}", self.node_path, self.property, self.value)
    }
}

/// Check every node of an evaluated frame.
///
/// Opacity must lie in `[0, 1]`, blur radii and sizes must be non-negative, scales must be
/// positive, colors normalized, and every number finite.
pub fn check_bounds(frame: &EvaluatedFrame) -> Vec<BoundsViolation> {
    let mut out = Vec::new();
    walk(&frame.root, "", &mut out);
    out
}

fn walk(n: &Node, parent: &str, out: &mut Vec<BoundsViolation>) {
    let path = if parent.is_empty() {
        n.id.clone()
    } else {
        format!("{parent}/{}", n.id)
    };
    let mut c = Checker {
        path: &path,
        out: &mut *out,
    };
    let s = &n.style;

    c.range("opacity", s.opacity, 0.0, 1.0);
    c.non_negative("blur_px", s.blur_px);
    c.positive("scale.x", s.transform.scale.x);
    c.positive("scale.y", s.transform.scale.y);
    c.finite("translate.x", s.transform.translate.x);
    c.finite("translate.y", s.transform.translate.y);
    c.finite("rotation_rad", s.transform.rotation_rad);
    if let Some(p) = s.position {
        c.finite("position.x", p.x);
        c.finite("position.y", p.y);
    }
    if let Some(sz) = s.size {
        c.non_negative("size.width", sz.width);
        c.non_negative("size.height", sz.height);
    }
    c.non_negative("corner_radius", s.corner_radius);
    if let Some(bg) = &s.background {
        for col in bg.colors() {
            c.color("background", col);
        }
        if let Paint::Linear { angle_deg, .. } = bg {
            c.finite("background.angle_deg", *angle_deg);
        }
    }
    if let Some(b) = s.border {
        c.non_negative("border.width", b.width);
        c.color("border.color", b.color);
    }
    for sh in &s.shadows {
        c.non_negative("shadow.blur", sh.blur);
        c.color("shadow.color", sh.color);
    }

    match &n.kind {
        NodeKind::Text { font, .. } => {
            c.positive("font.size_px", font.size_px);
            c.color("font.color", font.color);
        }
        NodeKind::Grid {
            cell_size,
            offset_y,
            color,
            ..
        } => {
            c.positive("grid.cell_size", *cell_size);
            c.range("grid.offset_y", *offset_y, 0.0, *cell_size);
            c.color("grid.color", *color);
        }
        NodeKind::Pointer { size, color, .. } => {
            c.positive("pointer.size", *size);
            c.color("pointer.color", *color);
        }
        NodeKind::Group
        | NodeKind::Rect
        | NodeKind::Image { .. }
        | NodeKind::BrowserFrame { .. } => {}
    }

    for child in &n.children {
        walk(child, &path, out);
    }
}

struct Checker<'a> {
    path: &'a str,
    out: &'a mut Vec<BoundsViolation>,
}

impl Checker<'_> {
    fn push(&mut self, property: &'static str, value: f64) {
        self.out.push(BoundsViolation {
            node_path: self.path.to_owned(),
            property,
            value,
        });
    }

    fn finite(&mut self, property: &'static str, v: f64) {
        if !v.is_finite() {
            self.push(property, v);
        }
    }

    fn range(&mut self, property: &'static str, v: f64, lo: f64, hi: f64) {
        if !(v.is_finite() && v >= lo && v <= hi) {
            self.push(property, v);
        }
    }

    fn non_negative(&mut self, property: &'static str, v: f64) {
        if !(v.is_finite() && v >= 0.0) {
            self.push(property, v);
        }
    }

    fn positive(&mut self, property: &'static str, v: f64) {
        if !(v.is_finite() && v > 0.0) {
            self.push(property, v);
        }
    }

    fn color(&mut self, property: &'static str, col: Color) {
        if let Some(bad) = [col.r, col.g, col.b, col.a]
            .into_iter()
            .find(|v| !(v.is_finite() && (0.0..=1.0).contains(v)))
        {
            self.push(property, bad);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/bounds.rs"]
mod tests;
