use crate::{
    composition::{Artifact, Promo},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{PromoError, PromoResult},
    },
    scene::node::Node,
};
use rayon::prelude::*;

/// Everything the renderer needs for one output frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Composition frame.
    pub frame: FrameIndex,
    /// Display tree.
    pub root: Node,
    /// Artifacts to capture at this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    /// Ids of the audio cues sounding at this frame.
    pub audio: Vec<String>,
}

/// Range evaluation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOpts {
    /// Evaluate frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker threads; `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Stateless frame evaluator.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame. Frames at or past the composition end are errors.
    #[tracing::instrument(skip(promo))]
    pub fn eval_frame(promo: &Promo, frame: FrameIndex) -> PromoResult<EvaluatedFrame> {
        let root = promo.render(frame)?;
        let audio = promo
            .audio()
            .active_cues(frame)
            .into_iter()
            .map(|c| c.id.clone())
            .collect();
        Ok(EvaluatedFrame {
            frame,
            root,
            artifacts: promo.artifacts_at(frame),
            audio,
        })
    }

    /// Evaluate every frame of `range`, returned in frame order.
    #[tracing::instrument(skip(promo), fields(start = range.start.0, end = range.end.0))]
    pub fn eval_range(
        promo: &Promo,
        range: FrameRange,
        opts: EvalOpts,
    ) -> PromoResult<Vec<EvaluatedFrame>> {
        check_range(promo, range)?;
        if !opts.parallel {
            return Self::eval_range_in(promo, range, None);
        }
        let pool = build_thread_pool(opts.threads)?;
        Self::eval_range_in(promo, range, Some(&pool))
    }

    /// Evaluate `range` on `pool`, or on the calling thread when `pool` is `None`.
    ///
    /// Lets callers that evaluate many ranges keep one pool alive across them.
    pub fn eval_range_in(
        promo: &Promo,
        range: FrameRange,
        pool: Option<&rayon::ThreadPool>,
    ) -> PromoResult<Vec<EvaluatedFrame>> {
        check_range(promo, range)?;
        match pool {
            None => range.iter().map(|f| Self::eval_frame(promo, f)).collect(),
            Some(pool) => pool.install(|| {
                (range.start.0..range.end.0)
                    .into_par_iter()
                    .map(|f| Self::eval_frame(promo, FrameIndex(f)))
                    .collect()
            }),
        }
    }
}

fn check_range(promo: &Promo, range: FrameRange) -> PromoResult<()> {
    if range.end.0 > promo.total_frames() {
        return Err(PromoError::evaluation(format!(
            "range end {} exceeds composition duration {}",
            range.end.0,
            promo.total_frames()
        )));
    }
    Ok(())
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> PromoResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PromoError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PromoError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
