use crate::{
    animation::{ease::Ease, proc::Oscillator, tween::Tween},
    foundation::{color::Color, core::Transform2D, error::PromoResult},
    scene::{
        Scene, SceneCtx, content_column,
        node::{Layout, Node, Paint, Shadow, TextStyle},
        palette, scene_root,
    },
    text::{AnimatedText, TextEffect},
};

/// Central glow breathing scale.
pub const GLOW_SCALE: Oscillator = Oscillator::sine(1.0, 0.08, 1.5);
/// Central glow breathing opacity.
pub const GLOW_OPACITY: Oscillator = Oscillator::sine(0.2, 0.05, 1.5);
/// Sparkle fade.
pub const SPARKLE_OPACITY: Tween = Tween::fade_in(0.0, 15.0);
/// Sparkle pop.
pub const SPARKLE_SCALE: Tween = Tween::new(0.0, 15.0, 0.5, 1.0).eased(Ease::OutBack(2.0));
/// Button fade.
pub const BUTTON_OPACITY: Tween = Tween::fade_in(35.0, 50.0);
/// Button rise.
pub const BUTTON_Y: Tween = Tween::new(35.0, 50.0, 20.0, 0.0).eased(Ease::OutBack(1.8));
/// Button glow alpha pulse.
pub const BUTTON_GLOW: Oscillator = Oscillator::sine(0.3, 0.15, 3.0);

const GLOW_SIZE: f64 = 600.0;
const BADGE_FRAMES: f64 = 12.0;

/// Trust badge under the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    /// Label.
    pub text: &'static str,
    /// Entrance frame.
    pub delay: f64,
}

impl Badge {
    /// Opacity at `frame`.
    pub fn opacity(&self, frame: f64) -> f64 {
        Tween::fade_in(self.delay, self.delay + BADGE_FRAMES).sample(frame)
    }

    /// Vertical offset at `frame`.
    pub fn translate_y(&self, frame: f64) -> f64 {
        Tween::new(self.delay, self.delay + BADGE_FRAMES, 10.0, 0.0)
            .eased(Ease::OutCubic)
            .sample(frame)
    }

    fn render(&self, id: String, frame: f64) -> Node {
        Node::group(id.clone())
            .layout(Layout::row(6.0).centered())
            .opacity(self.opacity(frame))
            .transform(Transform2D::translate(0.0, self.translate_y(frame)))
            .child(
                Node::rect(format!("{id}.dot"))
                    .size(6.0, 6.0)
                    .radius(3.0)
                    .background(Paint::solid(palette::GREEN)),
            )
            .child(Node::text(
                format!("{id}.text"),
                self.text,
                TextStyle::new(14.0, 500, palette::white(0.4)),
            ))
    }
}

/// Trust badges in display order.
pub const BADGES: [Badge; 2] = [
    Badge {
        text: "No credit card required",
        delay: 55.0,
    },
    Badge {
        text: "Free to get started",
        delay: 62.0,
    },
];

/// Closing call to action.
#[derive(Clone, Debug)]
pub struct CtaScene {
    duration: u64,
    headline: AnimatedText,
    subtext: AnimatedText,
}

impl CtaScene {
    /// CTA scene lasting `duration` frames.
    pub fn new(duration: u64) -> Self {
        let headline = AnimatedText::new(
            TextEffect::BounceChars,
            "cta.headline",
            "Ready to animate your imagination?",
            5.0,
            0.03,
            0.7,
        )
        .font(
            TextStyle::new(48.0, 800, Color::WHITE)
                .centered()
                .max_width(1000.0),
        );
        let subtext = AnimatedText::new(
            TextEffect::FadeInWords,
            "cta.subtext",
            "Join thousands of founders and creators building high-quality video content",
            22.0,
            0.05,
            0.5,
        )
        .font(
            TextStyle::new(20.0, 400, palette::white(0.55))
                .centered()
                .max_width(600.0)
                .line_height(1.5),
        );

        Self {
            duration,
            headline,
            subtext,
        }
    }

    /// Bouncing headline.
    pub fn headline(&self) -> &AnimatedText {
        &self.headline
    }

    fn glow(ctx: &SceneCtx) -> Node {
        let t = ctx.t_secs();
        let c = ctx.canvas.center();
        Node::rect("cta.glow")
            .at(c.x - GLOW_SIZE / 2.0, c.y - GLOW_SIZE / 2.0)
            .size(GLOW_SIZE, GLOW_SIZE)
            .radius(GLOW_SIZE / 2.0)
            .background(Paint::radial(
                0.5,
                0.5,
                &[(0.0, palette::blue(0.2)), (0.7, Color::TRANSPARENT)],
            ))
            .transform(Transform2D::scale(GLOW_SCALE.sample_secs(t)))
            .opacity(GLOW_OPACITY.sample_secs(t))
            .blur(60.0)
    }

    fn button(ctx: &SceneCtx) -> Node {
        let f = ctx.frame;
        let glow = BUTTON_GLOW.sample_secs(ctx.t_secs());
        let face = Node::rect("cta.button.face")
            .radius(12.0)
            .background(Paint::linear(
                135.0,
                &[(0.0, palette::BLUE), (1.0, palette::BLUE_LIGHT)],
            ))
            .shadow(Shadow::glow(30.0, palette::blue(glow)))
            .shadow(Shadow::drop(0.0, 4.0, 20.0, palette::black(0.3)))
            .layout(Layout::row(10.0).centered().padding(16.0, 40.0))
            .child(Node::text(
                "cta.button.label",
                "Create Your First Video",
                TextStyle::new(18.0, 700, Color::WHITE).tracking(0.01),
            ))
            .child(Node::image("cta.button.arrow", palette::ARROW_RIGHT_ICON).size(20.0, 20.0));

        Node::group("cta.button")
            .opacity(BUTTON_OPACITY.sample(f))
            .transform(Transform2D::translate(0.0, BUTTON_Y.sample(f)))
            .child(face)
    }
}

impl Scene for CtaScene {
    fn name(&self) -> &'static str {
        "cta"
    }

    fn duration_frames(&self) -> u64 {
        self.duration
    }

    fn render(&self, ctx: &SceneCtx) -> PromoResult<Node> {
        let f = ctx.frame;
        let sparkle = Node::group("cta.sparkle")
            .opacity(SPARKLE_OPACITY.sample(f))
            .transform(Transform2D::scale(SPARKLE_SCALE.sample(f)))
            .child(
                Node::image("cta.sparkle.icon", palette::SPARKLE_ICON_56)
                    .size(56.0, 56.0)
                    .shadow(Shadow::glow(20.0, palette::blue(0.5))),
            );

        let badges = Node::group("cta.badges")
            .layout(Layout::row(24.0))
            .children(
                BADGES
                    .iter()
                    .enumerate()
                    .map(|(i, b)| b.render(format!("cta.badge.{i}"), f)),
            );

        let content = content_column("cta.content", ctx, 24.0)
            .child(sparkle)
            .child(self.headline.render(f, ctx.fps))
            .child(self.subtext.render(f, ctx.fps))
            .child(Self::button(ctx))
            .child(badges);

        Ok(scene_root(self.name(), ctx)
            .child(Self::glow(ctx))
            .child(content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/cta.rs"]
mod tests;
