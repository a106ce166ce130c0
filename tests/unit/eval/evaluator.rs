use super::*;
use crate::config::PromoConfig;

fn promo() -> Promo {
    Promo::new(&PromoConfig::default()).unwrap()
}

#[test]
fn eval_frame_carries_artifacts_and_audio() {
    let p = promo();
    let f0 = Evaluator::eval_frame(&p, FrameIndex(0)).unwrap();
    assert_eq!(f0.frame, FrameIndex(0));
    assert_eq!(f0.artifacts, vec![Artifact::thumbnail()]);
    assert_eq!(f0.audio, vec!["ambient".to_owned()]);

    let f = Evaluator::eval_frame(&p, FrameIndex(270)).unwrap();
    assert!(f.artifacts.is_empty());
    assert_eq!(f.audio, vec!["ambient".to_owned(), "whoosh.1".to_owned()]);
}

#[test]
fn eval_frame_rejects_past_end() {
    let p = promo();
    assert!(Evaluator::eval_frame(&p, FrameIndex(525)).is_err());
}

#[test]
fn eval_range_is_ordered() {
    let p = promo();
    let r = FrameRange::with_len(120, 40);
    let frames = Evaluator::eval_range(&p, r, EvalOpts::default()).unwrap();
    assert_eq!(frames.len(), 40);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.frame, FrameIndex(120 + i as u64));
    }
}

#[test]
fn parallel_matches_sequential() {
    let p = promo();
    let r = FrameRange::with_len(100, 64);
    let seq = Evaluator::eval_range(&p, r, EvalOpts::default()).unwrap();
    let par = Evaluator::eval_range(
        &p,
        r,
        EvalOpts {
            parallel: true,
            threads: Some(4),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn one_pool_serves_many_ranges() {
    let p = promo();
    let pool = build_thread_pool(Some(2)).unwrap();
    assert_eq!(pool.current_num_threads(), 2);
    for start in [0u64, 130, 405] {
        let r = FrameRange::with_len(start, 25);
        let seq = Evaluator::eval_range_in(&p, r, None).unwrap();
        let par = Evaluator::eval_range_in(&p, r, Some(&pool)).unwrap();
        assert_eq!(seq, par);
    }
    assert!(Evaluator::eval_range_in(&p, FrameRange::with_len(520, 10), Some(&pool)).is_err());
}

#[test]
fn eval_range_rejects_out_of_bounds_and_zero_threads() {
    let p = promo();
    assert!(Evaluator::eval_range(&p, FrameRange::with_len(500, 30), EvalOpts::default()).is_err());
    let zero = EvalOpts {
        parallel: true,
        threads: Some(0),
    };
    assert!(Evaluator::eval_range(&p, FrameRange::with_len(0, 2), zero).is_err());
}

#[test]
fn empty_range_yields_nothing() {
    let p = promo();
    let frames = Evaluator::eval_range(&p, FrameRange::with_len(5, 0), EvalOpts::default()).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn evaluated_frame_serializes() {
    let p = promo();
    let f = Evaluator::eval_frame(&p, FrameIndex(1)).unwrap();
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["frame"], 1);
    assert_eq!(v["root"]["id"], "promo");
    assert!(v.get("artifacts").is_none());
}
