use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::{Fps, Transform2D},
    scene::node::{Layout, Node, TextAlign, TextStyle},
    text::split::{Unit, split_units, unit_count},
};

/// Per-unit entrance timing shared by all staggered text effects.
///
/// Unit `i` animates over `[start + i * stagger, start + i * stagger + duration]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// First unit's start frame (scene-local).
    pub start_frame: f64,
    /// Delay between consecutive units in seconds.
    pub stagger_secs: f64,
    /// Per-unit animation length in seconds.
    pub duration_secs: f64,
    /// Easing applied to each unit's progress.
    pub ease: Ease,
}

impl Stagger {
    /// Linear progress window of unit `index`.
    pub fn unit_window(&self, index: usize, fps: Fps) -> Tween {
        let start = self.start_frame + fps.secs_to_frames_f64(self.stagger_secs) * index as f64;
        Tween::fade_in(start, start + fps.secs_to_frames_f64(self.duration_secs))
    }

    /// Linear `[0, 1]` progress of unit `index` at `frame`.
    pub fn linear_progress(&self, index: usize, frame: f64, fps: Fps) -> f64 {
        self.unit_window(index, fps).sample(frame)
    }

    /// Frame at which the last of `units` units finishes.
    pub fn end_frame(&self, units: usize, fps: Fps) -> f64 {
        if units == 0 {
            return self.start_frame;
        }
        self.unit_window(units - 1, fps).frames[1]
    }
}

/// Staggered text entrance presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEffect {
    /// Words fade in while rising 20px.
    FadeInWords,
    /// Characters fade in while rising 12px.
    FadeInChars,
    /// Words fade in while un-blurring from 12px.
    BlurReveal,
    /// Characters pop in with an overshooting rise and scale.
    BounceChars,
}

/// Visual state of one text unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub translate_y: f64,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Uniform scale.
    pub scale: f64,
}

const FADE_RISE_WORDS_PX: f64 = 20.0;
const FADE_RISE_CHARS_PX: f64 = 12.0;
const BLUR_FROM_PX: f64 = 12.0;
const BOUNCE_RISE_PX: f64 = 40.0;
const BOUNCE_SCALE_FROM: f64 = 0.6;

impl TextEffect {
    /// Split granularity.
    pub fn unit(self) -> Unit {
        match self {
            Self::FadeInWords | Self::BlurReveal => Unit::Word,
            Self::FadeInChars | Self::BounceChars => Unit::Char,
        }
    }

    /// Easing used when none is given.
    pub fn default_ease(self) -> Ease {
        match self {
            Self::FadeInWords => Ease::OutQuart,
            Self::FadeInChars => Ease::OutCubic,
            Self::BlurReveal => Ease::OutCubic,
            Self::BounceChars => Ease::OutBack(1.7),
        }
    }

    /// Unit state for eased progress `p`.
    pub fn unit_state(self, p: f64) -> UnitState {
        match self {
            Self::FadeInWords => UnitState {
                opacity: p.clamp(0.0, 1.0),
                translate_y: (1.0 - p) * FADE_RISE_WORDS_PX,
                blur_px: 0.0,
                scale: 1.0,
            },
            Self::FadeInChars => UnitState {
                opacity: p.clamp(0.0, 1.0),
                translate_y: (1.0 - p) * FADE_RISE_CHARS_PX,
                blur_px: 0.0,
                scale: 1.0,
            },
            Self::BlurReveal => UnitState {
                opacity: p.clamp(0.0, 1.0),
                translate_y: 0.0,
                blur_px: ((1.0 - p) * BLUR_FROM_PX).max(0.0),
                scale: 1.0,
            },
            Self::BounceChars => UnitState {
                opacity: (2.0 * p).clamp(0.0, 1.0),
                translate_y: (1.0 - p) * BOUNCE_RISE_PX,
                blur_px: 0.0,
                scale: BOUNCE_SCALE_FROM + (1.0 - BOUNCE_SCALE_FROM) * p,
            },
        }
    }
}

/// A string animated with one of the [`TextEffect`] presets.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedText {
    /// Node id of the rendered group.
    pub id: String,
    /// Source text.
    pub text: String,
    /// Entrance preset.
    pub effect: TextEffect,
    /// Stagger timing.
    pub timing: Stagger,
    /// Typography shared by every unit.
    pub font: TextStyle,
}

impl AnimatedText {
    /// Text animated with `effect`, starting at `start_frame`, `stagger_secs` apart, each unit
    /// taking `duration_secs`.
    pub fn new(
        effect: TextEffect,
        id: impl Into<String>,
        text: impl Into<String>,
        start_frame: f64,
        stagger_secs: f64,
        duration_secs: f64,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            effect,
            timing: Stagger {
                start_frame,
                stagger_secs,
                duration_secs,
                ease: effect.default_ease(),
            },
            font: TextStyle::default(),
        }
    }

    /// Override the easing.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.timing.ease = ease;
        self
    }

    /// Set typography.
    pub fn font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Number of animated units.
    pub fn units(&self) -> usize {
        unit_count(&self.text, self.effect.unit())
    }

    /// Frame at which the last unit settles.
    pub fn end_frame(&self, fps: Fps) -> f64 {
        self.timing.end_frame(self.units(), fps)
    }

    /// State of unit `index` at `frame`.
    pub fn unit_state(&self, index: usize, frame: f64, fps: Fps) -> UnitState {
        let l = self.timing.linear_progress(index, frame, fps);
        self.effect.unit_state(self.timing.ease.apply(l))
    }

    /// Display tree at `frame`: a wrapping inline group with one text node per span.
    pub fn render(&self, frame: f64, fps: Fps) -> Node {
        let mut layout = Layout::inline();
        if self.font.align == TextAlign::Center {
            layout = layout.centered();
        }

        let children = split_units(&self.text, self.effect.unit())
            .into_iter()
            .enumerate()
            .map(|(i, span)| {
                let id = format!("{}.{i}", self.id);
                let node = Node::text(id, span.text, self.font.clone());
                match span.stagger_index {
                    None => node,
                    Some(ui) => {
                        let s = self.unit_state(ui, frame, fps);
                        node.opacity(s.opacity).blur(s.blur_px).transform(Transform2D {
                            scale: kurbo::Vec2::new(s.scale, s.scale),
                            ..Transform2D::translate(0.0, s.translate_y)
                        })
                    }
                }
            });

        Node::group(self.id.clone())
            .layout(layout)
            .children(children)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/reveal.rs"]
mod tests;
