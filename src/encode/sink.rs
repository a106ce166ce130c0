use crate::{
    audio::AudioManifest,
    composition::{FontRequest, Promo},
    eval::EvaluatedFrame,
    foundation::{
        core::{Fps, FrameIndex},
        error::{PromoError, PromoResult},
    },
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Composition length in frames.
    pub total_frames: u64,
    /// Font the renderer must load.
    pub font: FontRequest,
    /// Audio to mix under the video, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioManifest>,
}

impl SinkConfig {
    /// Sink configuration for the whole promo, audio included.
    pub fn for_promo(promo: &Promo) -> Self {
        let canvas = promo.canvas();
        Self {
            width: canvas.width,
            height: canvas.height,
            fps: promo.fps(),
            total_frames: promo.total_frames(),
            font: promo.font().clone(),
            audio: Some(promo.audio().clone()),
        }
    }
}

/// Consumer of evaluated frames.
///
/// `push_frame` is called in strictly increasing frame order between one `begin` and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()>;
    /// Push the next frame.
    fn push_frame(&mut self, frame: &EvaluatedFrame) -> PromoResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> PromoResult<()>;
}

#[derive(Debug, Default)]
struct FrameOrder {
    last: Option<FrameIndex>,
}

impl FrameOrder {
    fn advance(&mut self, idx: FrameIndex) -> PromoResult<()> {
        if let Some(last) = self.last
            && idx <= last
        {
            return Err(PromoError::evaluation(format!(
                "frame {} pushed after frame {}",
                idx.0, last.0
            )));
        }
        self.last = Some(idx);
        Ok(())
    }
}

/// Keeps everything in memory; for tests and tooling.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    order: FrameOrder,
    frames: Vec<EvaluatedFrame>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames received, in order.
    pub fn frames(&self) -> &[EvaluatedFrame] {
        &self.frames
    }

    /// Whether `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()> {
        self.cfg = Some(cfg);
        self.order = FrameOrder::default();
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &EvaluatedFrame) -> PromoResult<()> {
        self.order.advance(frame.frame)?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> PromoResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes a header line with the [`SinkConfig`], then one JSON object per frame.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    order: FrameOrder,
    frames_written: u64,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Create (or truncate) `path`.
    pub fn create(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("create frame output '{}': {e}", path.display()),
            )
        })?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            order: FrameOrder::default(),
            frames_written: 0,
        }
    }

    /// Frames written since `begin`.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> PromoResult<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()> {
        self.order = FrameOrder::default();
        self.frames_written = 0;
        self.write_line(&cfg)
    }

    fn push_frame(&mut self, frame: &EvaluatedFrame) -> PromoResult<()> {
        self.order.advance(frame.frame)?;
        self.write_line(frame)?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> PromoResult<()> {
        self.out.flush()?;
        tracing::info!(frames = self.frames_written, "json-lines export finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
