use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{PromoError, PromoResult},
};
use smallvec::SmallVec;

/// Scene and transition lengths in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromoTimings {
    /// Hero scene.
    pub hero: u64,
    /// Steps scene.
    pub steps: u64,
    /// Showcase scene.
    pub showcase: u64,
    /// Call-to-action scene.
    pub cta: u64,
    /// Overlap between consecutive scenes.
    pub transition: u64,
}

impl Default for PromoTimings {
    fn default() -> Self {
        Self {
            hero: 150,
            steps: 150,
            showcase: 165,
            cta: 120,
            transition: 20,
        }
    }
}

impl PromoTimings {
    /// Scene durations in playback order.
    pub fn scene_durations(&self) -> [u64; 4] {
        [self.hero, self.steps, self.showcase, self.cta]
    }

    /// Composition length: scene durations minus the overlaps.
    pub fn total_frames(&self) -> u64 {
        let sum: u64 = self.scene_durations().iter().sum();
        sum.saturating_sub(3 * self.transition)
    }
}

/// How a sequence is presented at a given frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", content = "progress", rename_all = "snake_case")]
pub enum Presentation {
    /// Fully shown.
    Steady,
    /// Fading in over the previous sequence; progress in `[0, 1)`.
    Entering(f64),
    /// Fading out under the next sequence; progress in `[0, 1)`.
    Exiting(f64),
}

impl Presentation {
    /// Transition progress, `None` when steady.
    pub fn progress(self) -> Option<f64> {
        match self {
            Self::Steady => None,
            Self::Entering(p) | Self::Exiting(p) => Some(p),
        }
    }
}

/// One sequence visible at a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActiveSequence {
    /// Sequence index in the series.
    pub index: usize,
    /// Frame relative to the sequence start.
    pub local_frame: u64,
    /// Presentation state.
    pub presentation: Presentation,
}

/// Sequences played back to back, each consecutive pair overlapping by a linear-timed transition.
///
/// Sequence `i` starts at `sum(durations[..i]) - sum(transitions[..i])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionSeries {
    durations: Vec<u64>,
    transitions: Vec<u64>,
    starts: Vec<u64>,
    total: u64,
}

impl TransitionSeries {
    /// Build a series. `transitions[i]` overlaps sequence `i` with sequence `i + 1`.
    pub fn new(durations: Vec<u64>, transitions: Vec<u64>) -> PromoResult<Self> {
        if durations.is_empty() {
            return Err(PromoError::validation(
                "transition series needs at least one sequence",
            ));
        }
        if transitions.len() + 1 != durations.len() {
            return Err(PromoError::validation(format!(
                "{} sequences need {} transitions, got {}",
                durations.len(),
                durations.len() - 1,
                transitions.len()
            )));
        }
        if let Some(i) = durations.iter().position(|&d| d == 0) {
            return Err(PromoError::validation(format!(
                "sequence {i} duration must be > 0 frames"
            )));
        }
        for (i, &t) in transitions.iter().enumerate() {
            if t > durations[i] || t > durations[i + 1] {
                return Err(PromoError::validation(format!(
                    "transition {i} ({t} frames) exceeds an adjacent sequence duration"
                )));
            }
        }
        // At most two sequences may overlap at any frame.
        for i in 1..durations.len().saturating_sub(1) {
            if transitions[i - 1] + transitions[i] > durations[i] {
                return Err(PromoError::validation(format!(
                    "transitions around sequence {i} overlap each other"
                )));
            }
        }

        let mut starts = Vec::with_capacity(durations.len());
        let mut cursor = 0u64;
        for (i, &d) in durations.iter().enumerate() {
            starts.push(cursor);
            cursor += d;
            if let Some(&t) = transitions.get(i) {
                cursor -= t;
            }
        }

        tracing::debug!(
            sequences = durations.len(),
            total_frames = cursor,
            "built transition series"
        );

        Ok(Self {
            durations,
            transitions,
            starts,
            total: cursor,
        })
    }

    /// Series with the same overlap between every pair.
    pub fn uniform(durations: &[u64], transition: u64) -> PromoResult<Self> {
        let transitions = vec![transition; durations.len().saturating_sub(1)];
        Self::new(durations.to_vec(), transitions)
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Always `false` for a validated series.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Total length in frames.
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    /// Absolute frame range of sequence `index`.
    pub fn range_of(&self, index: usize) -> Option<FrameRange> {
        Some(FrameRange::with_len(
            *self.starts.get(index)?,
            self.durations[index],
        ))
    }

    /// Absolute frame window of the transition entering sequence `index` (`index >= 1`).
    pub fn transition_window(&self, index: usize) -> Option<FrameRange> {
        let t = *self.transitions.get(index.checked_sub(1)?)?;
        Some(FrameRange::with_len(self.starts[index], t))
    }

    /// Transition windows in order.
    pub fn transition_windows(&self) -> impl Iterator<Item = FrameRange> + '_ {
        (1..self.len()).filter_map(|i| self.transition_window(i))
    }

    /// Sequences visible at `frame`, in painter's order (exiting below entering).
    pub fn active_at(&self, frame: FrameIndex) -> SmallVec<[ActiveSequence; 2]> {
        let mut out = SmallVec::new();
        for index in 0..self.len() {
            let start = self.starts[index];
            let range = FrameRange::with_len(start, self.durations[index]);
            if !range.contains(frame) {
                continue;
            }
            let local_frame = frame.0 - start;
            let presentation = if let Some(p) = self
                .transition_window(index)
                .and_then(|w| linear_progress(w, frame))
            {
                Presentation::Entering(p)
            } else if let Some(p) = self
                .transition_window(index + 1)
                .and_then(|w| linear_progress(w, frame))
            {
                Presentation::Exiting(p)
            } else {
                Presentation::Steady
            };
            out.push(ActiveSequence {
                index,
                local_frame,
                presentation,
            });
        }
        out
    }
}

/// Linear timing: `(frame - start) / len` inside the window.
fn linear_progress(window: FrameRange, frame: FrameIndex) -> Option<f64> {
    if !window.contains(frame) {
        return None;
    }
    let offset = frame.0 - window.start.0;
    Some(offset as f64 / window.len_frames() as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/timeline.rs"]
mod tests;
