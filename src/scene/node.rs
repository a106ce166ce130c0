use crate::foundation::{
    color::Color,
    core::{Point, Transform2D, Vec2},
};
use kurbo::Size;

/// One element of an evaluated display tree.
///
/// A tree is rebuilt for every frame; nothing in it carries state across frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// Stable identifier, unique among siblings.
    pub id: String,
    /// What the renderer draws for this node.
    pub kind: NodeKind,
    /// Resolved visual properties for the current frame.
    pub style: Style,
    /// Flow layout applied to `children`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Children in painter's order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Drawable kind of a [`Node`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Pure container.
    Group,
    /// Rectangle (rounded by `corner_radius`) filled with `background`.
    Rect,
    /// Text run.
    Text {
        /// Text content.
        text: String,
        /// Typography.
        font: TextStyle,
    },
    /// Remote or local raster/vector image.
    Image {
        /// Image URL or path.
        src: String,
    },
    /// Scrolling line grid.
    Grid {
        /// Cell size in pixels.
        cell_size: f64,
        /// Vertical scroll offset in `[0, cell_size)`.
        offset_y: f64,
        /// Line color.
        color: Color,
        /// Fade grid lines toward the canvas edges.
        fade_edges: bool,
    },
    /// Browser window frame around its children.
    BrowserFrame {
        /// Address bar contents.
        url: String,
        /// Active tab title.
        tab_title: String,
    },
    /// Mouse pointer glyph.
    Pointer {
        /// Pointer glyph.
        cursor: CursorStyle,
        /// Glyph size in pixels.
        size: f64,
        /// Glyph fill color.
        color: Color,
    },
}

/// Mouse pointer glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    /// Arrow.
    #[default]
    Default,
    /// I-beam.
    Text,
    /// Hand.
    Pointer,
}

/// Resolved per-frame visual properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    /// Opacity in `[0, 1]`, multiplied into descendants.
    pub opacity: f64,
    /// Transform around the node center.
    #[serde(skip_serializing_if = "Transform2D::is_identity")]
    pub transform: Transform2D,
    /// Gaussian blur radius in pixels.
    #[serde(skip_serializing_if = "is_zero")]
    pub blur_px: f64,
    /// Absolute position of the top-left corner within the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Explicit size; content-sized when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Paint>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "is_zero")]
    pub corner_radius: f64,
    /// Stroke around the node bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Drop shadows / glows, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shadows: Vec<Shadow>,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform2D::default(),
            blur_px: 0.0,
            position: None,
            size: None,
            background: None,
            corner_radius: 0.0,
            border: None,
            shadows: Vec::new(),
        }
    }
}

/// Fill description.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Linear gradient along `angle_deg` (CSS convention, 180 = top to bottom).
    Linear {
        /// Gradient direction.
        angle_deg: f64,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
    /// Elliptical radial gradient.
    Radial {
        /// Center as a fraction of the node bounds.
        center: Point,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Flat color fill.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Linear gradient from `(offset, color)` pairs.
    pub fn linear(angle_deg: f64, stops: &[(f64, Color)]) -> Self {
        Self::Linear {
            angle_deg,
            stops: GradientStop::from_pairs(stops),
        }
    }

    /// Radial gradient centered at fractional `(cx, cy)`.
    pub fn radial(cx: f64, cy: f64, stops: &[(f64, Color)]) -> Self {
        Self::Radial {
            center: Point::new(cx, cy),
            stops: GradientStop::from_pairs(stops),
        }
    }

    /// Colors referenced by this paint.
    pub fn colors(&self) -> Vec<Color> {
        match self {
            Self::Solid { color } => vec![*color],
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => {
                stops.iter().map(|s| s.color).collect()
            }
        }
    }
}

/// Gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: Color,
}

impl GradientStop {
    fn from_pairs(stops: &[(f64, Color)]) -> Vec<Self> {
        stops
            .iter()
            .map(|&(offset, color)| Self { offset, color })
            .collect()
    }
}

/// Stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Drop shadow or glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    /// Offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
}

impl Shadow {
    /// Centered glow.
    pub fn glow(blur: f64, color: Color) -> Self {
        Self {
            offset: Vec2::ZERO,
            blur,
            color,
        }
    }

    /// Offset drop shadow.
    pub fn drop(dx: f64, dy: f64, blur: f64, color: Color) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            blur,
            color,
        }
    }
}

/// Typography for text nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Fill color.
    pub color: Color,
    /// Letter spacing in em.
    #[serde(skip_serializing_if = "is_zero")]
    pub letter_spacing_em: f64,
    /// Line height multiplier.
    pub line_height: f64,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Wrap width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width_px: Option<f64>,
    /// Render upper-cased.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub uppercase: bool,
}

impl TextStyle {
    /// Text of `size_px` and `weight` in `color`, default spacing.
    pub fn new(size_px: f64, weight: u16, color: Color) -> Self {
        Self {
            size_px,
            weight,
            color,
            letter_spacing_em: 0.0,
            line_height: 1.2,
            align: TextAlign::Start,
            max_width_px: None,
            uppercase: false,
        }
    }

    /// Centered alignment.
    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    /// Wrap width.
    pub fn max_width(mut self, px: f64) -> Self {
        self.max_width_px = Some(px);
        self
    }

    /// Line height multiplier.
    pub fn line_height(mut self, lh: f64) -> Self {
        self.line_height = lh;
        self
    }

    /// Letter spacing in em.
    pub fn tracking(mut self, em: f64) -> Self {
        self.letter_spacing_em = em;
        self
    }

    /// Upper-case label styling.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(16.0, 500, Color::WHITE)
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left in LTR scripts.
    #[default]
    Start,
    /// Centered.
    Center,
}

/// Flow layout hint for a node's children.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Layout {
    /// Main axis.
    pub direction: Direction,
    /// Spacing between children in pixels.
    pub gap: f64,
    /// Cross-axis alignment.
    pub align: Align,
    /// Main-axis alignment.
    pub justify: Align,
    /// Inner padding `[vertical, horizontal]` in pixels.
    pub padding: [f64; 2],
    /// Wrap children onto new lines when the main axis overflows.
    pub wrap: bool,
}

impl Layout {
    /// Centered column.
    pub fn column(gap: f64) -> Self {
        Self {
            direction: Direction::Column,
            gap,
            align: Align::Center,
            justify: Align::Center,
            padding: [0.0, 0.0],
            wrap: false,
        }
    }

    /// Row aligned to the cross-axis start.
    pub fn row(gap: f64) -> Self {
        Self {
            direction: Direction::Row,
            gap,
            align: Align::Start,
            justify: Align::Start,
            padding: [0.0, 0.0],
            wrap: false,
        }
    }

    /// Wrapping inline flow used for animated text units.
    pub fn inline() -> Self {
        Self {
            wrap: true,
            ..Self::row(0.0)
        }
    }

    /// Center on both axes.
    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self.justify = Align::Center;
        self
    }

    /// Padding `[vertical, horizontal]`.
    pub fn padding(mut self, vertical: f64, horizontal: f64) -> Self {
        self.padding = [vertical, horizontal];
        self
    }
}

/// Layout main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
}

/// Layout alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Start edge.
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
}

impl Node {
    fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            style: Style::default(),
            layout: None,
            children: Vec::new(),
        }
    }

    /// Empty container.
    pub fn group(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Group)
    }

    /// Rectangle.
    pub fn rect(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Rect)
    }

    /// Text run.
    pub fn text(id: impl Into<String>, text: impl Into<String>, font: TextStyle) -> Self {
        Self::new(
            id,
            NodeKind::Text {
                text: text.into(),
                font,
            },
        )
    }

    /// Image.
    pub fn image(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Image { src: src.into() })
    }

    /// Node of an arbitrary kind.
    pub fn of_kind(id: impl Into<String>, kind: NodeKind) -> Self {
        Self::new(id, kind)
    }

    /// Set opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    /// Set transform.
    pub fn transform(mut self, t: Transform2D) -> Self {
        self.style.transform = t;
        self
    }

    /// Set blur radius.
    pub fn blur(mut self, px: f64) -> Self {
        self.style.blur_px = px;
        self
    }

    /// Absolutely position the top-left corner.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.style.position = Some(Point::new(x, y));
        self
    }

    /// Set explicit size.
    pub fn size(mut self, w: f64, h: f64) -> Self {
        self.style.size = Some(Size::new(w, h));
        self
    }

    /// Set fill.
    pub fn background(mut self, paint: Paint) -> Self {
        self.style.background = Some(paint);
        self
    }

    /// Set corner radius.
    pub fn radius(mut self, r: f64) -> Self {
        self.style.corner_radius = r;
        self
    }

    /// Set a stroke.
    pub fn border(mut self, width: f64, color: Color) -> Self {
        self.style.border = Some(Border { width, color });
        self
    }

    /// Append a shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.style.shadows.push(shadow);
        self
    }

    /// Set flow layout for children.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append an optional child.
    pub fn child_opt(mut self, child: Option<Node>) -> Self {
        self.children.extend(child);
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first pre-order traversal with depth.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node, usize)) {
        fn rec<'a>(n: &'a Node, depth: usize, f: &mut impl FnMut(&'a Node, usize)) {
            f(n, depth);
            for c in &n.children {
                rec(c, depth + 1, f);
            }
        }
        rec(self, 0, f);
    }

    /// First node (pre-order) with `id`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of nodes in the subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Text content of a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of all text nodes in the subtree.
    pub fn collect_text(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |n, _| {
            if let Some(t) = n.text_content() {
                out.push_str(t);
            }
        });
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
