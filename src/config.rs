//! JSON configuration for building a [`crate::composition::Promo`].
//!
//! Every field is optional; an empty object `{}` yields the stock 525-frame promo.

use crate::{
    audio::AudioConfig,
    composition::{
        timeline::{PromoTimings, TransitionSeries},
        transition::BlurDissolve,
    },
    foundation::{
        core::{Canvas, Fps},
        error::{PromoError, PromoResult},
    },
    logging::LoggingConfig,
};
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromoConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Scene and transition lengths.
    pub timings: PromoTimings,
    /// Transition look.
    pub dissolve: BlurDissolve,
    /// Audio sources and levels.
    pub audio: AudioConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl PromoConfig {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PromoResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| PromoError::serde(format!("parse promo config JSON: {e}")))?;
        Ok(cfg)
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("open promo config '{}': {e}", path.display()),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section.
    pub fn validate(&self) -> PromoResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PromoError::validation("canvas width/height must be > 0"));
        }
        TransitionSeries::uniform(&self.timings.scene_durations(), self.timings.transition)?;
        self.dissolve.validate()?;
        self.audio.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(PromoError::validation("logging.level must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
