use crate::{
    animation::{ease::Ease, proc::Oscillator, tween::Tween},
    foundation::{
        color::Color,
        core::{Fps, Transform2D},
        error::PromoResult,
    },
    scene::{
        Scene, SceneCtx, content_column,
        node::{Align, Layout, Node, Paint, TextStyle},
        palette, scene_root,
    },
    text::{AnimatedText, TextEffect},
};

/// Static content of one step card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepDescriptor {
    /// Two-digit label, e.g. `"01"`.
    pub number: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Icon URL.
    pub icon_url: &'static str,
    /// Accent color.
    pub color: Color,
}

/// The three workflow steps, left to right.
pub const STEPS: [StepDescriptor; 3] = [
    StepDescriptor {
        number: "01",
        title: "Share Your Vision",
        description: "Describe the vibe, message, and visual style in plain English.",
        icon_url: "https://api.iconify.design/ph/pencil-simple-line-fill.svg?color=%232563EB&width=40",
        color: palette::BLUE,
    },
    StepDescriptor {
        number: "02",
        title: "AI Generation",
        description: "Our engine builds scenes, animations, and transitions automatically.",
        icon_url: "https://api.iconify.design/ph/sparkle-fill.svg?color=%238B5CF6&width=40",
        color: palette::VIOLET,
    },
    StepDescriptor {
        number: "03",
        title: "Export & Reuse",
        description: "Get high-quality exports or reuse creations as templates.",
        icon_url: "https://api.iconify.design/ph/rocket-launch-fill.svg?color=%2310B981&width=40",
        color: palette::GREEN,
    },
];

/// Header fade.
pub const HEADER_OPACITY: Tween = Tween::fade_in(0.0, 15.0);
/// Connector line draw progress.
pub const CONNECTOR_PROGRESS: Tween = Tween::fade_in(20.0, 80.0).eased(Ease::InOutCubic);

/// First card's entrance frame.
pub const FIRST_CARD_DELAY: f64 = 18.0;
/// Entrance offset between consecutive cards.
pub const CARD_STAGGER: f64 = 14.0;
/// Entrance length of a card.
pub const CARD_ENTRY_FRAMES: f64 = 18.0;
/// Entry progress past which the idle float, pulse and glow take over.
pub const IDLE_THRESHOLD: f64 = 0.9;

const CARD_WIDTH: f64 = 340.0;
const CARD_HEIGHT: f64 = 300.0;
const CARD_GAP: f64 = 32.0;
const ICON_BOX: f64 = 56.0;
const ICON_SIZE: f64 = 32.0;

/// Resolved animation values of one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardState {
    /// Entry progress, may overshoot 1.
    pub entry: f64,
    /// Card opacity (entry clamped to `[0, 1]`).
    pub opacity: f64,
    /// Vertical offset including the idle float.
    pub translate_y: f64,
    /// Icon scale.
    pub icon_scale: f64,
    /// Accent glow opacity.
    pub glow_opacity: f64,
}

/// One animated step card.
#[derive(Clone, Debug)]
pub struct StepCard {
    step: StepDescriptor,
    index: usize,
    delay: f64,
    title: AnimatedText,
    description: AnimatedText,
}

impl StepCard {
    /// Card `index` showing `step`.
    pub fn new(step: StepDescriptor, index: usize) -> Self {
        let delay = FIRST_CARD_DELAY + CARD_STAGGER * index as f64;
        let title = AnimatedText::new(
            TextEffect::FadeInChars,
            format!("steps.card.{index}.title"),
            step.title,
            delay + 8.0,
            0.02,
            0.4,
        )
        .ease(Ease::OutCubic)
        .font(TextStyle::new(24.0, 700, Color::WHITE));
        let description = AnimatedText::new(
            TextEffect::FadeInWords,
            format!("steps.card.{index}.description"),
            step.description,
            delay + 14.0,
            0.04,
            0.4,
        )
        .ease(Ease::OutCubic)
        .font(TextStyle::new(15.0, 400, palette::white(0.55)).line_height(1.5));

        Self {
            step,
            index,
            delay,
            title,
            description,
        }
    }

    /// Entrance start frame.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Animation values at scene-local `frame`.
    pub fn state(&self, frame: f64, fps: Fps) -> CardState {
        let d = self.delay;
        let i = self.index as f64;
        let entry = Tween::fade_in(d, d + CARD_ENTRY_FRAMES)
            .eased(Ease::OutBack(1.4))
            .sample(frame);
        let y = Tween::new(d, d + CARD_ENTRY_FRAMES, 60.0, 0.0)
            .eased(Ease::OutCubic)
            .sample(frame);

        let t = fps.frame_pos_to_secs(frame - d);
        let (float_y, icon_scale, glow_opacity) = if entry > IDLE_THRESHOLD {
            (
                Oscillator::sine(0.0, 4.0, 1.5).with_phase(i).sample_secs(t),
                Oscillator::sine(1.0, 0.05, 2.5)
                    .with_phase(0.5 * i)
                    .sample_secs(t),
                Oscillator::sine(0.15, 0.05, 2.0).with_phase(i).sample_secs(t),
            )
        } else {
            let pop = Tween::new(d + 5.0, d + 22.0, 0.5, 1.0)
                .eased(Ease::OutBack(2.0))
                .sample(frame);
            (0.0, pop, 0.0)
        };

        CardState {
            entry,
            opacity: entry.clamp(0.0, 1.0),
            translate_y: y + float_y,
            icon_scale,
            glow_opacity,
        }
    }

    /// Display node at scene-local `frame`.
    pub fn render(&self, frame: f64, fps: Fps) -> Node {
        let s = self.state(frame, fps);
        let id = format!("steps.card.{}", self.index);
        let color = self.step.color;

        let glow = Node::rect(format!("{id}.glow"))
            .at((CARD_WIDTH - 200.0) / 2.0, -40.0)
            .size(200.0, 100.0)
            .radius(50.0)
            .background(Paint::solid(color))
            .blur(50.0)
            .opacity(s.glow_opacity);

        let label = Node::text(
            format!("{id}.label"),
            format!("Step {}", self.step.number),
            TextStyle::new(14.0, 700, color).tracking(0.15).uppercase(),
        );

        let icon = Node::rect(format!("{id}.icon"))
            .size(ICON_BOX, ICON_BOX)
            .radius(14.0)
            .background(Paint::solid(color.with_alpha(f64::from(0x15u8) / 255.0)))
            .border(1.0, color.with_alpha(f64::from(0x30u8) / 255.0))
            .transform(Transform2D::scale(s.icon_scale))
            .layout(Layout::row(0.0).centered())
            .child(
                Node::image(format!("{id}.icon.image"), self.step.icon_url)
                    .size(ICON_SIZE, ICON_SIZE),
            );

        Node::rect(id)
            .size(CARD_WIDTH, CARD_HEIGHT)
            .radius(20.0)
            .background(Paint::solid(palette::white(0.04)))
            .border(1.0, palette::white(0.08))
            .layout(Layout {
                align: Align::Start,
                ..Layout::column(12.0).padding(36.0, 28.0)
            })
            .opacity(s.opacity)
            .transform(Transform2D::translate(0.0, s.translate_y))
            .child(glow)
            .child(label)
            .child(icon)
            .child(self.title.render(frame, fps))
            .child(self.description.render(frame, fps))
    }
}

/// "How it works" scene: header plus three staggered step cards.
#[derive(Clone, Debug)]
pub struct StepsScene {
    duration: u64,
    label: AnimatedText,
    title: AnimatedText,
    cards: Vec<StepCard>,
}

impl StepsScene {
    /// Steps scene lasting `duration` frames.
    pub fn new(duration: u64) -> Self {
        let label = AnimatedText::new(
            TextEffect::FadeInWords,
            "steps.label",
            "How It Works",
            0.0,
            0.06,
            0.5,
        )
        .font(
            TextStyle::new(16.0, 600, palette::BLUE)
                .tracking(0.15)
                .uppercase()
                .centered(),
        );
        let title = AnimatedText::new(
            TextEffect::FadeInWords,
            "steps.title",
            "From Prompt to Production",
            8.0,
            0.06,
            0.5,
        )
        .font(TextStyle::new(44.0, 700, Color::WHITE).centered());
        let cards = STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| StepCard::new(*step, i))
            .collect();

        Self {
            duration,
            label,
            title,
            cards,
        }
    }

    /// Cards in order.
    pub fn cards(&self) -> &[StepCard] {
        &self.cards
    }

    fn connector(&self, frame: f64) -> Node {
        let n = self.cards.len() as f64;
        let full = n * CARD_WIDTH + (n - 1.0).max(0.0) * CARD_GAP;
        Node::rect("steps.connector")
            .at(0.0, CARD_HEIGHT / 2.0)
            .size(full * CONNECTOR_PROGRESS.sample(frame), 1.0)
            .background(Paint::linear(
                90.0,
                &[
                    (0.0, palette::blue(0.0)),
                    (0.5, palette::blue(0.4)),
                    (1.0, Color::TRANSPARENT),
                ],
            ))
    }
}

impl Scene for StepsScene {
    fn name(&self) -> &'static str {
        "steps"
    }

    fn duration_frames(&self) -> u64 {
        self.duration
    }

    fn render(&self, ctx: &SceneCtx) -> PromoResult<Node> {
        let f = ctx.frame;
        let header = Node::group("steps.header")
            .layout(Layout::column(12.0))
            .opacity(HEADER_OPACITY.sample(f))
            .child(self.label.render(f, ctx.fps))
            .child(self.title.render(f, ctx.fps));

        let row = Node::group("steps.row")
            .layout(Layout::row(CARD_GAP))
            .child(self.connector(f))
            .children(self.cards.iter().map(|c| c.render(f, ctx.fps)));

        Ok(scene_root(self.name(), ctx).child(
            content_column("steps.content", ctx, 48.0)
                .child(header)
                .child(row),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/steps.rs"]
mod tests;
