use super::*;

fn default_series() -> TransitionSeries {
    let t = PromoTimings::default();
    TransitionSeries::uniform(&t.scene_durations(), t.transition).unwrap()
}

#[test]
fn default_timings_total_525_frames() {
    let t = PromoTimings::default();
    assert_eq!(t.total_frames(), 525);
    assert_eq!(default_series().total_frames(), 525);
}

#[test]
fn sequences_start_after_previous_minus_overlap() {
    let s = default_series();
    let starts: Vec<u64> = (0..s.len()).map(|i| s.range_of(i).unwrap().start.0).collect();
    assert_eq!(starts, vec![0, 130, 260, 405]);
    assert_eq!(s.range_of(3).unwrap().end.0, 525);
    assert!(s.range_of(4).is_none());
}

#[test]
fn transition_windows_open_at_each_entering_start() {
    let s = default_series();
    let w: Vec<(u64, u64)> = s
        .transition_windows()
        .map(|r| (r.start.0, r.end.0))
        .collect();
    assert_eq!(w, vec![(130, 150), (260, 280), (405, 425)]);
    assert!(s.transition_window(0).is_none());
}

#[test]
fn steady_frames_have_one_active_sequence() {
    let s = default_series();
    let a = s.active_at(FrameIndex(60));
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].index, 0);
    assert_eq!(a[0].local_frame, 60);
    assert_eq!(a[0].presentation, Presentation::Steady);
}

#[test]
fn overlap_frames_have_exiting_then_entering() {
    let s = default_series();
    let a = s.active_at(FrameIndex(140));
    assert_eq!(a.len(), 2);
    assert_eq!(a[0].index, 0);
    assert_eq!(a[0].local_frame, 140);
    assert_eq!(a[0].presentation, Presentation::Exiting(0.5));
    assert_eq!(a[1].index, 1);
    assert_eq!(a[1].local_frame, 10);
    assert_eq!(a[1].presentation, Presentation::Entering(0.5));
}

#[test]
fn progress_is_linear_and_starts_at_zero() {
    let s = default_series();
    let first = s.active_at(FrameIndex(130));
    assert_eq!(first[1].presentation.progress(), Some(0.0));
    let last = s.active_at(FrameIndex(149));
    assert_eq!(last[1].presentation.progress(), Some(19.0 / 20.0));
    let after = s.active_at(FrameIndex(150));
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].index, 1);
    assert_eq!(after[0].presentation, Presentation::Steady);
}

#[test]
fn never_more_than_two_active() {
    let s = default_series();
    for f in 0..s.total_frames() {
        let n = s.active_at(FrameIndex(f)).len();
        assert!((1..=2).contains(&n), "frame {f}: {n} active");
    }
    assert!(s.active_at(FrameIndex(525)).is_empty());
}

#[test]
fn zero_transition_is_a_hard_cut() {
    let s = TransitionSeries::uniform(&[10, 10], 0).unwrap();
    assert_eq!(s.total_frames(), 20);
    assert!(s.transition_windows().all(|w| w.is_empty()));
    let a = s.active_at(FrameIndex(10));
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].index, 1);
    assert_eq!(a[0].presentation, Presentation::Steady);
}

#[test]
fn rejects_invalid_series() {
    assert!(TransitionSeries::new(vec![], vec![]).is_err());
    assert!(TransitionSeries::new(vec![10, 10], vec![]).is_err());
    assert!(TransitionSeries::new(vec![10, 0], vec![0]).is_err());
    assert!(TransitionSeries::uniform(&[10, 5], 6).is_err());
    // 6 + 6 > 10: the two windows would overlap inside the middle sequence.
    assert!(TransitionSeries::uniform(&[20, 10, 20], 6).is_err());
    assert!(TransitionSeries::uniform(&[20, 10, 20], 5).is_ok());
}

#[test]
fn presentation_serializes_tagged() {
    let v = serde_json::to_value(Presentation::Entering(0.25)).unwrap();
    assert_eq!(v, serde_json::json!({"state": "entering", "progress": 0.25}));
    let v = serde_json::to_value(Presentation::Steady).unwrap();
    assert_eq!(v, serde_json::json!({"state": "steady"}));
}

#[test]
fn timings_parse_with_defaults() {
    let t: PromoTimings = serde_json::from_str(r#"{"cta": 90}"#).unwrap();
    assert_eq!(t.cta, 90);
    assert_eq!(t.hero, 150);
    assert!(serde_json::from_str::<PromoTimings>(r#"{"intro": 1}"#).is_err());
}
