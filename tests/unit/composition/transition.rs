use super::*;

#[test]
fn steady_is_untouched() {
    let d = BlurDissolve::default();
    assert_eq!(d.style(Presentation::Steady), (1.0, 0.0));
}

#[test]
fn entering_sharpens_while_exiting_blurs() {
    let d = BlurDissolve::default();
    assert_eq!(d.style(Presentation::Entering(0.0)), (0.0, 16.0));
    assert_eq!(d.style(Presentation::Entering(0.75)), (0.75, 4.0));
    assert_eq!(d.style(Presentation::Exiting(0.0)), (1.0, 0.0));
    assert_eq!(d.style(Presentation::Exiting(0.25)), (0.75, 4.0));
}

#[test]
fn crossfade_opacities_sum_to_one() {
    let d = BlurDissolve { max_blur_px: 8.0 };
    for i in 0..20 {
        let p = f64::from(i) / 20.0;
        let (a, _) = d.style(Presentation::Exiting(p));
        let (b, _) = d.style(Presentation::Entering(p));
        assert!((a + b - 1.0).abs() < 1e-12);
    }
}

#[test]
fn apply_multiplies_opacity_and_adds_blur() {
    let d = BlurDissolve::default();
    let node = Node::group("scene").opacity(0.5).blur(2.0);
    let out = d.apply(node, Presentation::Exiting(0.5));
    assert_eq!(out.style.opacity, 0.25);
    assert_eq!(out.style.blur_px, 10.0);
}

#[test]
fn validate_rejects_negative_blur() {
    assert!(BlurDissolve { max_blur_px: -1.0 }.validate().is_err());
    assert!(
        BlurDissolve {
            max_blur_px: f64::NAN
        }
        .validate()
        .is_err()
    );
    assert!(BlurDissolve { max_blur_px: 0.0 }.validate().is_ok());
}
