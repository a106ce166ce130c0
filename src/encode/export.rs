use crate::{
    composition::Promo,
    encode::sink::{FrameSink, SinkConfig},
    eval::{Evaluator, FrameFingerprint, evaluator::build_thread_pool, fingerprint},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{PromoError, PromoResult},
    },
};

/// Export options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOpts {
    /// Evaluate each chunk on a rayon pool.
    pub parallel: bool,
    /// Worker threads; `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Frames evaluated per chunk before they are handed to the sink.
    pub chunk_size: usize,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

/// Export statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ExportStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Frames whose display tree matched the previous frame's.
    pub frames_static: u64,
}

/// Evaluate `range` chunk by chunk and stream the frames into `sink` in order.
#[tracing::instrument(skip(promo, sink), fields(start = range.start.0, end = range.end.0))]
pub fn export_range(
    promo: &Promo,
    range: FrameRange,
    opts: ExportOpts,
    sink: &mut dyn FrameSink,
) -> PromoResult<ExportStats> {
    if range.is_empty() {
        return Err(PromoError::validation("export range must be non-empty"));
    }
    if range.end.0 > promo.total_frames() {
        return Err(PromoError::validation(
            "export range must be within composition duration",
        ));
    }

    let chunk_size = opts.chunk_size.max(1) as u64;
    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };

    sink.begin(SinkConfig::for_promo(promo))?;

    let mut stats = ExportStats::default();
    let mut prev: Option<FrameFingerprint> = None;
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))?;
        for frame in Evaluator::eval_range_in(promo, chunk, pool.as_ref())? {
            let fp = fingerprint(&frame);
            if prev == Some(fp) {
                stats.frames_static += 1;
            }
            prev = Some(fp);
            sink.push_frame(&frame)?;
            stats.frames_total += 1;
        }
        tracing::debug!(chunk_start, chunk_end, "exported chunk");
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::info!(
        frames = stats.frames_total,
        static_frames = stats.frames_static,
        "export finished"
    );
    Ok(stats)
}

/// Export the whole promo.
pub fn export_all(
    promo: &Promo,
    opts: ExportOpts,
    sink: &mut dyn FrameSink,
) -> PromoResult<ExportStats> {
    export_range(
        promo,
        FrameRange::with_len(0, promo.total_frames()),
        opts,
        sink,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/encode/export.rs"]
mod tests;
