use crate::{
    foundation::{color::Color, core::Fps},
    scene::node::{Layout, Node, Paint, TextStyle},
};

/// Caret blink period in frames once typing has finished.
pub const CARET_BLINK_PERIOD: u64 = 16;

/// Text typed out one character at a time, followed by a caret.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    /// Node id of the rendered group.
    pub id: String,
    /// Full text.
    pub text: String,
    /// Frame the first character appears (scene-local).
    pub start_frame: f64,
    /// Seconds per character.
    pub speed_secs: f64,
    /// Caret color.
    pub caret_color: Color,
    /// Typography.
    pub font: TextStyle,
}

impl Typewriter {
    /// Typewriter starting at frame 0.
    pub fn new(id: impl Into<String>, text: impl Into<String>, speed_secs: f64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            start_frame: 0.0,
            speed_secs,
            caret_color: Color::WHITE,
            font: TextStyle::default(),
        }
    }

    /// Caret color.
    pub fn caret(mut self, color: Color) -> Self {
        self.caret_color = color;
        self
    }

    /// Typography.
    pub fn font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Total characters.
    pub fn total_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Frames per character.
    pub fn frames_per_char(&self, fps: Fps) -> f64 {
        fps.secs_to_frames_f64(self.speed_secs)
    }

    /// Characters visible at `frame`.
    pub fn visible_chars(&self, frame: f64, fps: Fps) -> usize {
        let total = self.total_chars();
        let per = self.frames_per_char(fps);
        if per <= 0.0 {
            return total;
        }
        let elapsed = frame - self.start_frame;
        if elapsed < 0.0 {
            return 0;
        }
        ((elapsed / per).floor() as usize).min(total)
    }

    /// Frame at which the last character appears.
    pub fn end_frame(&self, fps: Fps) -> f64 {
        self.start_frame + self.frames_per_char(fps) * self.total_chars() as f64
    }

    /// Caret visibility: solid while typing, blinking afterwards.
    pub fn caret_visible(&self, frame: f64, fps: Fps) -> bool {
        let end = self.end_frame(fps);
        if frame < end {
            return true;
        }
        let since = (frame - end).floor() as u64;
        since % CARET_BLINK_PERIOD < CARET_BLINK_PERIOD / 2
    }

    /// Display tree at `frame`.
    pub fn render(&self, frame: f64, fps: Fps) -> Node {
        let shown: String = self.text.chars().take(self.visible_chars(frame, fps)).collect();
        let caret_h = self.font.size_px * self.font.line_height;
        let caret = Node::rect(format!("{}.caret", self.id))
            .size(2.0, caret_h)
            .background(Paint::solid(self.caret_color))
            .opacity(if self.caret_visible(frame, fps) { 1.0 } else { 0.0 });

        Node::group(self.id.clone())
            .layout(Layout::inline())
            .child(Node::text(
                format!("{}.typed", self.id),
                shown,
                self.font.clone(),
            ))
            .child(caret)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/typewriter.rs"]
mod tests;
