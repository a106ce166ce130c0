use super::*;

#[test]
fn clamps_outside_window() {
    let t = Tween::new(50.0, 75.0, 0.0, 200.0).eased(Ease::OutCubic);
    assert_eq!(t.sample(0.0), 0.0);
    assert_eq!(t.sample(50.0), 0.0);
    assert_eq!(t.sample(75.0), 200.0);
    assert_eq!(t.sample(149.0), 200.0);
}

#[test]
fn non_overshooting_tween_stays_in_declared_range() {
    let t = Tween::new(0.0, 20.0, 40.0, 0.0).eased(Ease::OutCubic);
    let [lo, hi] = t.declared_range();
    assert_eq!([lo, hi], [0.0, 40.0]);
    assert_eq!(t.envelope(), [lo, hi]);
    for f in -10..=40 {
        let v = t.sample(f as f64);
        assert!((lo..=hi).contains(&v), "frame {f}: {v}");
    }
}

#[test]
fn overshooting_envelope_covers_samples() {
    let t = Tween::new(8.0, 28.0, 0.8, 1.0).eased(Ease::OutBack(1.6));
    let [lo, hi] = t.envelope();
    assert!(hi > 1.0);
    for f in 0..=40 {
        let v = t.sample(f as f64);
        assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
    }
}

#[test]
fn delayed_shifts_window() {
    let t = Tween::fade_in(0.0, 18.0).delayed(32.0);
    assert_eq!(t.frames, [32.0, 50.0]);
    assert_eq!(t.sample(41.0), 0.5);
}

#[test]
fn progress_is_normalized() {
    let t = Tween::new(0.0, 10.0, 60.0, 0.0);
    assert_eq!(t.progress(5.0), 0.5);
    assert_eq!(t.sample(5.0), 30.0);
}

#[test]
fn validate_rejects_empty_window() {
    assert!(Tween::new(5.0, 5.0, 0.0, 1.0).validate().is_err());
    assert!(Tween::new(0.0, 5.0, 0.0, 1.0).validate().is_ok());
    // Degenerate windows still sample as a step.
    let step = Tween::new(5.0, 5.0, 0.0, 1.0);
    assert_eq!(step.sample(4.0), 0.0);
    assert_eq!(step.sample(5.0), 1.0);
}

#[test]
fn unclamped_tween_keeps_its_slope() {
    let t = Tween::new(10.0, 20.0, 0.0, 100.0).unclamped();
    assert!(!t.clamp);
    assert_eq!(t.sample(0.0), -100.0);
    assert_eq!(t.sample(15.0), 50.0);
    assert_eq!(t.sample(30.0), 200.0);
    assert_eq!(Tween::new(10.0, 20.0, 0.0, 100.0).sample(30.0), 100.0);
}

#[test]
fn clamp_defaults_on_when_deserialized() {
    let t: Tween =
        serde_json::from_str(r#"{"frames":[0,10],"values":[0,1],"ease":"Linear"}"#).unwrap();
    assert!(t.clamp);
    assert_eq!(t.sample(20.0), 1.0);
    let t: Tween = serde_json::from_str(
        r#"{"frames":[0,10],"values":[0,1],"ease":"Linear","clamp":false}"#,
    )
    .unwrap();
    assert_eq!(t.sample(20.0), 2.0);
}
