use crate::foundation::core::Fps;

/// Waveform used by an [`Oscillator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Wave {
    /// `sin`.
    Sine,
    /// `cos`.
    Cosine,
}

/// Procedural oscillation: `offset + amp * wave(t_secs * speed + phase)`.
///
/// `speed` is in radians per second, matching the hand-tuned ambient motion (orb float, glow
/// pulses) of the scenes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Waveform.
    pub wave: Wave,
    /// Peak deviation from `offset`.
    pub amp: f64,
    /// Angular speed (rad/s).
    pub speed: f64,
    /// Phase (rad).
    pub phase: f64,
    /// Center value.
    pub offset: f64,
}

impl Oscillator {
    /// Sine oscillator centered on `offset`.
    pub const fn sine(offset: f64, amp: f64, speed: f64) -> Self {
        Self {
            wave: Wave::Sine,
            amp,
            speed,
            phase: 0.0,
            offset,
        }
    }

    /// Cosine oscillator centered on `offset`.
    pub const fn cosine(offset: f64, amp: f64, speed: f64) -> Self {
        Self {
            wave: Wave::Cosine,
            amp,
            speed,
            phase: 0.0,
            offset,
        }
    }

    /// Replace the phase.
    pub const fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Sample at `t_secs` seconds.
    pub fn sample_secs(&self, t_secs: f64) -> f64 {
        let x = t_secs * self.speed + self.phase;
        let w = match self.wave {
            Wave::Sine => x.sin(),
            Wave::Cosine => x.cos(),
        };
        self.offset + self.amp * w
    }

    /// Sample at a fractional frame position relative to the oscillator's time origin.
    pub fn sample_frame(&self, frame: f64, fps: Fps) -> f64 {
        self.sample_secs(fps.frame_pos_to_secs(frame))
    }

    /// `[min, max]` reachable values.
    pub fn range(&self) -> [f64; 2] {
        let a = self.amp.abs();
        [self.offset - a, self.offset + a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
