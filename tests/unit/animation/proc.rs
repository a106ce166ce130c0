use super::*;

#[test]
fn sine_starts_at_offset() {
    let o = Oscillator::sine(0.95, 0.05, 1.3);
    assert_eq!(o.sample_secs(0.0), 0.95);
}

#[test]
fn cosine_starts_at_peak() {
    let o = Oscillator::cosine(0.0, 12.0, 0.56);
    assert_eq!(o.sample_secs(0.0), 12.0);
}

#[test]
fn samples_stay_in_range() {
    let fps = Fps::new(30, 1).unwrap();
    let o = Oscillator::sine(0.15, 0.05, 2.0).with_phase(1.0);
    let [lo, hi] = o.range();
    for f in -60..600 {
        let v = o.sample_frame(f as f64, fps);
        assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
    }
}

#[test]
fn frame_sampling_uses_seconds() {
    let fps = Fps::new(30, 1).unwrap();
    let o = Oscillator::sine(0.0, 1.0, std::f64::consts::PI);
    // Half a second at pi rad/s is a quarter turn.
    assert!((o.sample_frame(15.0, fps) - 1.0).abs() < 1e-12);
}
