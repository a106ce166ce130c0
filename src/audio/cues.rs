use crate::{
    composition::timeline::TransitionSeries,
    foundation::{
        core::{Fps, FrameIndex, FrameRange},
        error::{PromoError, PromoResult},
    },
};

/// Mix sample rate handed to the external muxer.
pub const MIX_SAMPLE_RATE: u32 = 48_000;
/// Mix channel count.
pub const MIX_CHANNELS: u16 = 2;

const AMBIENT_SFX: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/sfx/1771929069913_9i1ni0eq5pd_sfx_Gentle_ambient_electronic_back.mp3";
const WHOOSH_SFX: &str = "https://pub-e3bfc0083b0644b296a7080b21024c5f.r2.dev/sfx/1771929066670_r7srv8gkvnc_sfx_Soft_futuristic_digital_whoosh.mp3";

/// Audio sources and levels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Looping ambient bed.
    pub ambient_src: String,
    /// Ambient gain in `[0, 1]`.
    pub ambient_volume: f64,
    /// Transition whoosh.
    pub whoosh_src: String,
    /// Whoosh gain in `[0, 1]`.
    pub whoosh_volume: f64,
    /// Frames a whoosh is considered audible.
    pub whoosh_frames: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            ambient_src: AMBIENT_SFX.to_owned(),
            ambient_volume: 0.15,
            whoosh_src: WHOOSH_SFX.to_owned(),
            whoosh_volume: 0.25,
            whoosh_frames: 30,
        }
    }
}

impl AudioConfig {
    /// Check sources are set and volumes are in range.
    pub fn validate(&self) -> PromoResult<()> {
        for (name, src) in [("ambient_src", &self.ambient_src), ("whoosh_src", &self.whoosh_src)] {
            if src.trim().is_empty() {
                return Err(PromoError::validation(format!(
                    "audio.{name} must be non-empty"
                )));
            }
        }
        for (name, v) in [
            ("ambient_volume", self.ambient_volume),
            ("whoosh_volume", self.whoosh_volume),
        ] {
            if !(v.is_finite() && (0.0..=1.0).contains(&v)) {
                return Err(PromoError::validation(format!(
                    "audio.{name} must be in [0, 1]"
                )));
            }
        }
        if self.whoosh_frames == 0 {
            return Err(PromoError::validation("audio.whoosh_frames must be > 0"));
        }
        Ok(())
    }
}

/// One sound placed on the composition timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioCue {
    /// Stable identifier.
    pub id: String,
    /// Source URL or path.
    pub src: String,
    /// First frame the cue sounds.
    pub start_frame: u64,
    /// Linear gain in `[0, 1]`.
    pub volume: f64,
    /// Restart the source when it ends.
    pub looped: bool,
    /// Audible length; `None` plays until the composition ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<u64>,
}

impl AudioCue {
    /// Frames the cue spans inside a composition of `total_frames`.
    pub fn span(&self, total_frames: u64) -> FrameRange {
        let end = match self.duration_frames {
            Some(d) => self.start_frame.saturating_add(d).min(total_frames),
            None => total_frames,
        };
        FrameRange {
            start: FrameIndex(self.start_frame.min(end)),
            end: FrameIndex(end),
        }
    }
}

/// Cue placement in sample space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CueSegment {
    /// Cue id.
    pub id: String,
    /// Source URL or path.
    pub src: String,
    /// First sample (inclusive).
    pub start_sample: u64,
    /// Last sample (exclusive).
    pub end_sample: u64,
    /// Linear gain.
    pub volume: f64,
    /// Restart the source when it ends.
    pub looped: bool,
}

/// Every audio cue of the composition plus the sample layout the muxer expects.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioManifest {
    /// Samples per second.
    pub sample_rate: u32,
    /// Interleaved channels.
    pub channels: u16,
    /// Composition frame rate.
    pub fps: Fps,
    /// Composition length in frames.
    pub total_frames: u64,
    cues: Vec<AudioCue>,
}

impl AudioManifest {
    /// Empty manifest for a composition of `total_frames`.
    pub fn new(fps: Fps, total_frames: u64) -> Self {
        Self {
            sample_rate: MIX_SAMPLE_RATE,
            channels: MIX_CHANNELS,
            fps,
            total_frames,
            cues: Vec::new(),
        }
    }

    /// Ambient bed from frame 0 plus one whoosh at the midpoint of every transition.
    pub fn for_series(series: &TransitionSeries, fps: Fps, cfg: &AudioConfig) -> PromoResult<Self> {
        cfg.validate()?;
        let mut manifest = Self::new(fps, series.total_frames());
        manifest.push(AudioCue {
            id: "ambient".to_owned(),
            src: cfg.ambient_src.clone(),
            start_frame: 0,
            volume: cfg.ambient_volume,
            looped: true,
            duration_frames: None,
        })?;
        for (i, window) in series.transition_windows().enumerate() {
            manifest.push(AudioCue {
                id: format!("whoosh.{i}"),
                src: cfg.whoosh_src.clone(),
                start_frame: window.start.0 + window.len_frames() / 2,
                volume: cfg.whoosh_volume,
                looped: false,
                duration_frames: Some(cfg.whoosh_frames),
            })?;
        }
        Ok(manifest)
    }

    /// Add a cue. It must start inside the composition with a gain in `[0, 1]`.
    pub fn push(&mut self, cue: AudioCue) -> PromoResult<()> {
        if cue.start_frame >= self.total_frames {
            return Err(PromoError::validation(format!(
                "audio cue '{}' starts at frame {} past the composition end ({})",
                cue.id, cue.start_frame, self.total_frames
            )));
        }
        if !(cue.volume.is_finite() && (0.0..=1.0).contains(&cue.volume)) {
            return Err(PromoError::validation(format!(
                "audio cue '{}' volume must be in [0, 1]",
                cue.id
            )));
        }
        self.cues.push(cue);
        Ok(())
    }

    /// Cues in insertion order.
    pub fn cues(&self) -> &[AudioCue] {
        &self.cues
    }

    /// Cues sounding at `frame`.
    pub fn active_cues(&self, frame: FrameIndex) -> Vec<&AudioCue> {
        self.cues
            .iter()
            .filter(|c| c.span(self.total_frames).contains(frame))
            .collect()
    }

    /// Total mix length in samples.
    pub fn total_samples(&self) -> u64 {
        frame_to_sample(self.total_frames, self.fps, self.sample_rate)
    }

    /// Cue placements in sample space.
    pub fn segments(&self) -> Vec<CueSegment> {
        self.cues
            .iter()
            .map(|c| {
                let span = c.span(self.total_frames);
                CueSegment {
                    id: c.id.clone(),
                    src: c.src.clone(),
                    start_sample: frame_to_sample(span.start.0, self.fps, self.sample_rate),
                    end_sample: frame_to_sample(span.end.0, self.fps, self.sample_rate),
                    volume: c.volume,
                    looped: c.looped,
                }
            })
            .collect()
    }
}

/// Convert a frame count to the nearest sample index at `sample_rate`.
pub fn frame_to_sample(frames: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frames) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + (den / 2)) / den) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/audio/cues.rs"]
mod tests;
