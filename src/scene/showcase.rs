use crate::{
    animation::{ease::Ease, tween::Tween},
    cursor::{CursorPath, Waypoint},
    foundation::{
        color::Color,
        core::{Fps, Transform2D, Vec2},
        error::PromoResult,
    },
    scene::{
        Scene, SceneCtx, content_column,
        node::{Align, CursorStyle, Layout, Node, NodeKind, Paint, Shadow, TextStyle},
        palette, scene_root,
    },
    text::{AnimatedText, TextEffect, Typewriter},
};

/// Browser window fade.
pub const BROWSER_OPACITY: Tween = Tween::fade_in(0.0, 20.0);
/// Browser window rise.
pub const BROWSER_Y: Tween = Tween::new(0.0, 20.0, 40.0, 0.0).eased(Ease::OutCubic);
/// Browser window settle.
pub const BROWSER_SCALE: Tween = Tween::new(0.0, 20.0, 0.96, 1.0).eased(Ease::OutBack(1.2));
/// Generation progress in percent.
pub const PROGRESS: Tween = Tween::new(50.0, 100.0, 0.0, 100.0).eased(Ease::InOutCubic);
/// Finished preview fade.
pub const PREVIEW_OPACITY: Tween = Tween::fade_in(105.0, 118.0);
/// Finished preview settle.
pub const PREVIEW_SCALE: Tween = Tween::new(105.0, 118.0, 0.95, 1.0).eased(Ease::OutBack(1.5));

/// Frame after which the progress bar shows.
pub const RENDER_START: f64 = 50.0;
/// Frame after which the finished preview replaces the progress bar.
pub const RENDER_DONE: f64 = 100.0;

const BROWSER_W: f64 = 900.0;
const BROWSER_H: f64 = 480.0;
const PROMPT: &str = "Create a product launch video with smooth transitions and bold typography";

/// Phase of the mocked generation UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Prompt being typed, nothing generated yet.
    Idle,
    /// Progress bar running.
    Generating,
    /// Preview shown.
    Done,
}

impl GenerationPhase {
    /// Phase at scene-local `frame`.
    pub fn at(frame: f64) -> Self {
        if frame > RENDER_DONE {
            Self::Done
        } else if frame > RENDER_START {
            Self::Generating
        } else {
            Self::Idle
        }
    }
}

/// The pointer script played over the browser window.
pub fn showcase_cursor() -> PromoResult<CursorPath> {
    let smooth = Ease::InOutCubic;
    let slow = Ease::Bezier(0.22, 1.0, 0.36, 1.0);
    Ok(CursorPath::new(vec![
        Waypoint::new(200.0, 80.0, 10.0).cursor(CursorStyle::Default),
        Waypoint::new(450.0, 120.0, 30.0)
            .cursor(CursorStyle::Text)
            .ease(smooth),
        Waypoint::new(450.0, 120.0, 40.0).click(),
        Waypoint::new(500.0, 340.0, 70.0)
            .cursor(CursorStyle::Pointer)
            .ease(smooth),
        Waypoint::new(500.0, 340.0, 80.0).click(),
        Waypoint::new(560.0, 380.0, 120.0)
            .cursor(CursorStyle::Default)
            .ease(slow),
    ])?
    .size(22.0)
    .color(Color::BLACK)
    .ripple_color(palette::blue(0.6)))
}

/// Product demo: a browser window with a typed prompt, a progress bar and a finished preview.
#[derive(Clone, Debug)]
pub struct ShowcaseScene {
    duration: u64,
    label: AnimatedText,
    prompt: Typewriter,
    cursor: CursorPath,
}

impl ShowcaseScene {
    /// Showcase scene lasting `duration` frames.
    pub fn new(duration: u64) -> PromoResult<Self> {
        let label = AnimatedText::new(
            TextEffect::FadeInWords,
            "showcase.label",
            "See It In Action",
            0.0,
            0.06,
            0.5,
        )
        .font(
            TextStyle::new(16.0, 600, palette::VIOLET)
                .tracking(0.15)
                .uppercase()
                .centered(),
        );
        let prompt = Typewriter::new("showcase.prompt.text", PROMPT, 0.04)
            .caret(palette::BLUE)
            .font(TextStyle::new(15.0, 500, Color::WHITE).line_height(1.5));

        Ok(Self {
            duration,
            label,
            prompt,
            cursor: showcase_cursor()?,
        })
    }

    /// Prompt typewriter.
    pub fn prompt(&self) -> &Typewriter {
        &self.prompt
    }

    /// Pointer script.
    pub fn cursor(&self) -> &CursorPath {
        &self.cursor
    }

    fn prompt_card(&self, frame: f64, fps: Fps) -> Node {
        Node::rect("showcase.prompt")
            .radius(12.0)
            .background(Paint::solid(palette::white(0.04)))
            .border(1.0, palette::white(0.08))
            .layout(Layout {
                align: Align::Start,
                ..Layout::column(8.0).padding(16.0, 20.0)
            })
            .child(Node::text(
                "showcase.prompt.label",
                "Your Prompt",
                TextStyle::new(12.0, 600, palette::white(0.4))
                    .uppercase()
                    .tracking(0.1),
            ))
            .child(self.prompt.render(frame, fps))
    }

    fn progress(frame: f64) -> Node {
        let pct = PROGRESS.sample(frame);
        let track_w = BROWSER_W * 0.6;
        let bar = Node::rect("showcase.progress.bar")
            .size(track_w * pct / 100.0, 4.0)
            .radius(2.0)
            .background(Paint::linear(
                90.0,
                &[(0.0, palette::BLUE), (1.0, palette::VIOLET)],
            ))
            .shadow(Shadow::glow(12.0, palette::blue(0.5)));

        Node::group("showcase.progress")
            .layout(Layout::column(8.0))
            .child(Node::text(
                "showcase.progress.label",
                "Generating your video...",
                TextStyle::new(13.0, 500, palette::white(0.5)),
            ))
            .child(
                Node::rect("showcase.progress.track")
                    .size(track_w, 4.0)
                    .radius(2.0)
                    .background(Paint::solid(palette::white(0.08)))
                    .child(bar),
            )
    }

    fn preview(frame: f64) -> Node {
        let play = Node::rect("showcase.preview.play")
            .size(48.0, 48.0)
            .radius(24.0)
            .background(Paint::solid(palette::blue(0.9)))
            .shadow(Shadow::drop(0.0, 4.0, 20.0, palette::blue(0.4)));

        let badge = Node::rect("showcase.preview.duration")
            .at(320.0 - 8.0 - 40.0, 180.0 - 8.0 - 20.0)
            .radius(4.0)
            .background(Paint::solid(palette::black(0.7)))
            .layout(Layout::row(0.0).padding(3.0, 8.0))
            .child(Node::text(
                "showcase.preview.duration.text",
                "0:30",
                TextStyle::new(11.0, 500, palette::white(0.8)),
            ));

        let thumb = Node::rect("showcase.preview.thumb")
            .size(320.0, 180.0)
            .radius(10.0)
            .background(Paint::linear(
                135.0,
                &[
                    (0.0, Color::rgb8(0x1A, 0x1A, 0x2E)),
                    (0.5, Color::rgb8(0x16, 0x21, 0x3E)),
                    (1.0, Color::rgb8(0x0F, 0x34, 0x60)),
                ],
            ))
            .border(1.0, palette::white(0.1))
            .shadow(Shadow::drop(0.0, 8.0, 32.0, palette::black(0.4)))
            .layout(Layout::row(0.0).centered())
            .child(play)
            .child(badge);

        let status = Node::group("showcase.preview.status")
            .layout(Layout::row(6.0).centered())
            .child(
                Node::rect("showcase.preview.status.dot")
                    .size(8.0, 8.0)
                    .radius(4.0)
                    .background(Paint::solid(palette::GREEN))
                    .shadow(Shadow::glow(8.0, palette::GREEN)),
            )
            .child(Node::text(
                "showcase.preview.status.text",
                "Rendering Complete · 4K · High Fidelity",
                TextStyle::new(13.0, 600, palette::GREEN),
            ));

        Node::group("showcase.preview")
            .layout(Layout::column(12.0))
            .opacity(PREVIEW_OPACITY.sample(frame))
            .transform(Transform2D::scale(PREVIEW_SCALE.sample(frame)))
            .child(thumb)
            .child(status)
    }

    fn app_ui(&self, frame: f64, fps: Fps) -> Node {
        let stage = match GenerationPhase::at(frame) {
            GenerationPhase::Idle => None,
            GenerationPhase::Generating => Some(Self::progress(frame)),
            GenerationPhase::Done => Some(Self::preview(frame)),
        };

        let generation = Node::rect("showcase.generation")
            .radius(12.0)
            .background(Paint::solid(palette::white(0.02)))
            .border(1.0, palette::white(0.06))
            .layout(Layout::column(16.0))
            .child_opt(stage);

        Node::rect("showcase.ui")
            .size(BROWSER_W, BROWSER_H)
            .background(Paint::solid(palette::INK))
            .layout(Layout {
                align: Align::Start,
                ..Layout::column(16.0).padding(24.0, 24.0)
            })
            .child(self.prompt_card(frame, fps))
            .child(generation)
    }
}

impl Scene for ShowcaseScene {
    fn name(&self) -> &'static str {
        "showcase"
    }

    fn duration_frames(&self) -> u64 {
        self.duration
    }

    fn render(&self, ctx: &SceneCtx) -> PromoResult<Node> {
        let f = ctx.frame;
        let browser = Node::of_kind(
            "showcase.browser.frame",
            NodeKind::BrowserFrame {
                url: "https://typeframes.com".to_owned(),
                tab_title: "TypeFrames - AI Video Creation".to_owned(),
            },
        )
        .size(BROWSER_W, BROWSER_H)
        .radius(16.0)
        .child(self.app_ui(f, ctx.fps));

        let scale = BROWSER_SCALE.sample(f);
        let stage = Node::group("showcase.browser")
            .opacity(BROWSER_OPACITY.sample(f))
            .transform(Transform2D {
                translate: Vec2::new(0.0, BROWSER_Y.sample(f)),
                scale: Vec2::new(scale, scale),
                ..Transform2D::default()
            })
            .child(browser)
            .child(self.cursor.render("showcase.cursor", f)?);

        Ok(scene_root(self.name(), ctx).child(
            content_column("showcase.content", ctx, 28.0)
                .child(self.label.render(f, ctx.fps))
                .child(stage),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/showcase.rs"]
mod tests;
