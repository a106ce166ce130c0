use crate::{
    eval::evaluator::EvaluatedFrame,
    foundation::{color::Color, core::Transform2D},
    scene::node::{Layout, Node, NodeKind, Paint, Style, TextStyle},
};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f3d_7e21_a9c4_0b68;

/// Stable 128-bit digest of a display tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint of the frame's display tree.
///
/// The frame index, artifacts and audio are not hashed, so two frames that look the same share a
/// fingerprint.
pub fn fingerprint(frame: &EvaluatedFrame) -> FrameFingerprint {
    fingerprint_node(&frame.root)
}

/// Fingerprint of a display tree.
pub fn fingerprint_node(root: &Node) -> FrameFingerprint {
    let mut h = StableHasher::new();
    write_node(&mut h, root);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // Fold -0.0 into 0.0 so sign-only differences do not split fingerprints.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, n: &Node) {
    h.write_str(&n.id);
    write_kind(h, &n.kind);
    write_style(h, &n.style);
    match &n.layout {
        None => h.write_u8(0),
        Some(l) => {
            h.write_u8(1);
            write_layout(h, l);
        }
    }
    h.write_u64(n.children.len() as u64);
    for c in &n.children {
        write_node(h, c);
    }
}

fn write_kind(h: &mut StableHasher, k: &NodeKind) {
    match k {
        NodeKind::Group => h.write_u8(0),
        NodeKind::Rect => h.write_u8(1),
        NodeKind::Text { text, font } => {
            h.write_u8(2);
            h.write_str(text);
            write_text_style(h, font);
        }
        NodeKind::Image { src } => {
            h.write_u8(3);
            h.write_str(src);
        }
        NodeKind::Grid {
            cell_size,
            offset_y,
            color,
            fade_edges,
        } => {
            h.write_u8(4);
            h.write_f64(*cell_size);
            h.write_f64(*offset_y);
            write_color(h, *color);
            h.write_bool(*fade_edges);
        }
        NodeKind::BrowserFrame { url, tab_title } => {
            h.write_u8(5);
            h.write_str(url);
            h.write_str(tab_title);
        }
        NodeKind::Pointer {
            cursor,
            size,
            color,
        } => {
            h.write_u8(6);
            h.write_u8(*cursor as u8);
            h.write_f64(*size);
            write_color(h, *color);
        }
    }
}

fn write_style(h: &mut StableHasher, s: &Style) {
    h.write_f64(s.opacity);
    write_transform(h, &s.transform);
    h.write_f64(s.blur_px);
    match s.position {
        None => h.write_u8(0),
        Some(p) => {
            h.write_u8(1);
            h.write_f64(p.x);
            h.write_f64(p.y);
        }
    }
    match s.size {
        None => h.write_u8(0),
        Some(sz) => {
            h.write_u8(1);
            h.write_f64(sz.width);
            h.write_f64(sz.height);
        }
    }
    match &s.background {
        None => h.write_u8(0),
        Some(p) => {
            h.write_u8(1);
            write_paint(h, p);
        }
    }
    h.write_f64(s.corner_radius);
    match s.border {
        None => h.write_u8(0),
        Some(b) => {
            h.write_u8(1);
            h.write_f64(b.width);
            write_color(h, b.color);
        }
    }
    h.write_u64(s.shadows.len() as u64);
    for sh in &s.shadows {
        h.write_f64(sh.offset.x);
        h.write_f64(sh.offset.y);
        h.write_f64(sh.blur);
        write_color(h, sh.color);
    }
}

fn write_transform(h: &mut StableHasher, t: &Transform2D) {
    h.write_f64(t.translate.x);
    h.write_f64(t.translate.y);
    h.write_f64(t.rotation_rad);
    h.write_f64(t.scale.x);
    h.write_f64(t.scale.y);
    h.write_f64(t.anchor.x);
    h.write_f64(t.anchor.y);
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    let stops = match p {
        Paint::Solid { color } => {
            h.write_u8(0);
            write_color(h, *color);
            return;
        }
        Paint::Linear { angle_deg, stops } => {
            h.write_u8(1);
            h.write_f64(*angle_deg);
            stops
        }
        Paint::Radial { center, stops } => {
            h.write_u8(2);
            h.write_f64(center.x);
            h.write_f64(center.y);
            stops
        }
    };
    h.write_u64(stops.len() as u64);
    for s in stops {
        h.write_f64(s.offset);
        write_color(h, s.color);
    }
}

fn write_text_style(h: &mut StableHasher, t: &TextStyle) {
    h.write_f64(t.size_px);
    h.write_u64(u64::from(t.weight));
    write_color(h, t.color);
    h.write_f64(t.letter_spacing_em);
    h.write_f64(t.line_height);
    h.write_u8(t.align as u8);
    match t.max_width_px {
        None => h.write_u8(0),
        Some(w) => {
            h.write_u8(1);
            h.write_f64(w);
        }
    }
    h.write_bool(t.uppercase);
}

fn write_layout(h: &mut StableHasher, l: &Layout) {
    h.write_u8(l.direction as u8);
    h.write_f64(l.gap);
    h.write_u8(l.align as u8);
    h.write_u8(l.justify as u8);
    h.write_f64(l.padding[0]);
    h.write_f64(l.padding[1]);
    h.write_bool(l.wrap);
}

fn write_color(h: &mut StableHasher, c: Color) {
    h.write_f64(c.r);
    h.write_f64(c.g);
    h.write_f64(c.b);
    h.write_f64(c.a);
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
