use crate::{
    animation::{ease::Ease, proc::Oscillator, tween::Tween},
    foundation::{
        color::Color,
        core::{Fps, Transform2D, Vec2},
        error::PromoResult,
    },
    scene::{
        Scene, SceneCtx, content_column,
        node::{Layout, Node, Paint, Shadow, TextStyle},
        palette, scene_root,
    },
    text::{AnimatedText, TextEffect},
};

const HERO_BG_URL: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/uploads/1771929075674_r4kwn6318oq_typeframes_hero_bg.png";

/// Background image zoom-out.
pub const BG_SCALE: Tween = Tween::new(0.0, 120.0, 1.1, 1.02).eased(Ease::OutCubic);
/// Logo row fade.
pub const LOGO_OPACITY: Tween = Tween::fade_in(8.0, 28.0);
/// Logo row pop.
pub const LOGO_SCALE: Tween = Tween::new(8.0, 28.0, 0.8, 1.0).eased(Ease::OutBack(1.6));
/// Sparkle icon fade.
pub const SPARKLE_OPACITY: Tween = Tween::fade_in(18.0, 32.0);
/// Sparkle icon rotation in degrees.
pub const SPARKLE_ROTATION: Tween = Tween::new(18.0, 50.0, -30.0, 0.0).eased(Ease::OutBack(2.0));
/// Decorative line width in pixels.
pub const LINE_WIDTH: Tween = Tween::new(50.0, 75.0, 0.0, 200.0).eased(Ease::OutCubic);

const BG_OPACITY: f64 = 0.35;
const BG_BLEED_PX: f64 = 40.0;

/// Soft glowing circle drifting on sine paths for ambient depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingOrb {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Diameter in pixels.
    pub size: f64,
    /// Core color.
    pub color: Color,
    /// Drift speed (rad/s).
    pub speed: f64,
    /// Appearance delay in seconds.
    pub delay_secs: f64,
}

/// Resolved orb properties at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbState {
    /// Drift offset.
    pub offset: Vec2,
    /// Breathing scale.
    pub scale: f64,
    /// Opacity.
    pub opacity: f64,
    /// Blur radius.
    pub blur_px: f64,
}

const ORB_FLOAT_Y_PX: f64 = 18.0;
const ORB_FLOAT_X_PX: f64 = 12.0;
const ORB_FADE_FRAMES: f64 = 20.0;
const ORB_MAX_OPACITY: f64 = 0.6;

impl FloatingOrb {
    /// State at scene-local `frame`.
    pub fn state(&self, frame: f64, fps: Fps) -> OrbState {
        let delay = fps.secs_to_frames_f64(self.delay_secs);
        let t = fps.frame_pos_to_secs(frame - delay);

        let float_y = Oscillator::sine(0.0, ORB_FLOAT_Y_PX, self.speed).sample_secs(t);
        let float_x = Oscillator::cosine(0.0, ORB_FLOAT_X_PX, self.speed * 0.7).sample_secs(t);
        let scale = Oscillator::sine(0.95, 0.05, self.speed * 1.3).sample_secs(t);
        let fade_in = Tween::fade_in(delay, delay + ORB_FADE_FRAMES).sample(frame);

        OrbState {
            offset: Vec2::new(float_x, float_y),
            scale,
            opacity: fade_in * ORB_MAX_OPACITY,
            blur_px: self.size * 0.3,
        }
    }

    /// Display node at scene-local `frame`.
    pub fn render(&self, id: impl Into<String>, frame: f64, fps: Fps) -> Node {
        let s = self.state(frame, fps);
        Node::rect(id)
            .at(self.x, self.y)
            .size(self.size, self.size)
            .radius(self.size / 2.0)
            .background(Paint::radial(
                0.5,
                0.5,
                &[(0.0, self.color), (0.7, Color::TRANSPARENT)],
            ))
            .transform(Transform2D {
                translate: s.offset,
                scale: Vec2::new(s.scale, s.scale),
                ..Transform2D::default()
            })
            .opacity(s.opacity)
            .blur(s.blur_px)
    }
}

/// The three hero orbs.
pub const ORBS: [FloatingOrb; 3] = [
    FloatingOrb {
        x: 150.0,
        y: 120.0,
        size: 200.0,
        color: palette::BLUE,
        speed: 0.8,
        delay_secs: 0.0,
    },
    FloatingOrb {
        x: 1050.0,
        y: 80.0,
        size: 160.0,
        color: palette::VIOLET,
        speed: 1.1,
        delay_secs: 0.3,
    },
    FloatingOrb {
        x: 600.0,
        y: 500.0,
        size: 120.0,
        color: palette::BLUE_LIGHT,
        speed: 0.6,
        delay_secs: 0.5,
    },
];

/// Opening scene: logo lock-up, headline and sub-headline over a zooming backdrop.
#[derive(Clone, Debug)]
pub struct HeroScene {
    duration: u64,
    headline: AnimatedText,
    subheadline: AnimatedText,
}

impl HeroScene {
    /// Hero scene lasting `duration` frames.
    pub fn new(duration: u64) -> Self {
        let headline = AnimatedText::new(
            TextEffect::FadeInWords,
            "hero.headline",
            "Studio-grade videos from a single prompt",
            25.0,
            0.08,
            0.6,
        )
        .ease(Ease::OutQuart)
        .font(
            TextStyle::new(52.0, 700, Color::WHITE)
                .centered()
                .max_width(900.0)
                .line_height(1.15),
        );

        let subheadline = AnimatedText::new(
            TextEffect::BlurReveal,
            "hero.subheadline",
            "Describe your vision and watch it transform into professional-grade video. \
             Motion graphics, animations, and effects — all generated in seconds.",
            45.0,
            0.03,
            0.6,
        )
        .font(
            TextStyle::new(22.0, 500, palette::white(0.6))
                .centered()
                .max_width(680.0)
                .line_height(1.5),
        );

        Self {
            duration,
            headline,
            subheadline,
        }
    }

    /// Animated headline.
    pub fn headline(&self) -> &AnimatedText {
        &self.headline
    }

    fn backdrop(ctx: &SceneCtx) -> Node {
        let w = ctx.width() + 2.0 * BG_BLEED_PX;
        let h = ctx.height() + 2.0 * BG_BLEED_PX;
        Node::group("hero.bg")
            .at(-BG_BLEED_PX, -BG_BLEED_PX)
            .size(w, h)
            .transform(Transform2D::scale(BG_SCALE.sample(ctx.frame)))
            .opacity(BG_OPACITY)
            .child(Node::image("hero.bg.image", HERO_BG_URL).size(w, h))
    }

    fn overlays(ctx: &SceneCtx) -> [Node; 2] {
        let (w, h) = (ctx.width(), ctx.height());
        [
            Node::rect("hero.overlay.glow")
                .at(0.0, 0.0)
                .size(w, h)
                .background(Paint::radial(
                    0.5,
                    0.4,
                    &[(0.0, palette::blue(0.15)), (0.6, Color::TRANSPARENT)],
                )),
            Node::rect("hero.overlay.shade")
                .at(0.0, 0.0)
                .size(w, h)
                .background(Paint::linear(
                    180.0,
                    &[(0.0, palette::ink(0.3)), (1.0, palette::ink(0.9))],
                )),
        ]
    }

    fn logo(ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let sparkle = Node::image("hero.logo.sparkle", palette::SPARKLE_ICON_48)
            .size(48.0, 48.0)
            .opacity(SPARKLE_OPACITY.sample(f))
            .transform(Transform2D::rotate_deg(SPARKLE_ROTATION.sample(f)))
            .shadow(Shadow::glow(12.0, palette::blue(0.6)));

        let wordmark = Node::text(
            "hero.logo.wordmark",
            "TypeFrames",
            TextStyle::new(64.0, 800, Color::WHITE).tracking(-0.02),
        )
        .shadow(Shadow::drop(0.0, 4.0, 30.0, palette::blue(0.3)));

        Node::group("hero.logo")
            .layout(Layout::row(16.0).centered())
            .opacity(LOGO_OPACITY.sample(f))
            .transform(Transform2D::scale(LOGO_SCALE.sample(f)))
            .child(sparkle)
            .child(wordmark)
    }

    fn divider(ctx: &SceneCtx) -> Node {
        Node::rect("hero.line")
            .size(LINE_WIDTH.sample(ctx.frame), 2.0)
            .radius(2.0)
            .background(Paint::linear(
                90.0,
                &[
                    (0.0, Color::TRANSPARENT),
                    (0.5, palette::BLUE),
                    (1.0, Color::TRANSPARENT),
                ],
            ))
    }
}

impl Scene for HeroScene {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn duration_frames(&self) -> u64 {
        self.duration
    }

    fn render(&self, ctx: &SceneCtx) -> PromoResult<Node> {
        let orbs = ORBS
            .iter()
            .enumerate()
            .map(|(i, orb)| orb.render(format!("hero.orb.{i}"), ctx.frame, ctx.fps));

        let content = content_column("hero.content", ctx, 24.0)
            .child(Self::logo(ctx))
            .child(Self::divider(ctx))
            .child(self.headline.render(ctx.frame, ctx.fps))
            .child(self.subheadline.render(ctx.frame, ctx.fps));

        Ok(scene_root(self.name(), ctx)
            .child(Self::backdrop(ctx))
            .children(Self::overlays(ctx))
            .children(orbs)
            .child(content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero.rs"]
mod tests;
