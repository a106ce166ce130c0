use super::*;

const ALL_MONOTONE: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::Bezier(0.22, 1.0, 0.36, 1.0),
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL_MONOTONE {
        assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
    }
    for e in [Ease::InBack(1.6), Ease::OutBack(2.0)] {
        assert!(e.apply(0.0).abs() < 1e-9);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn monotone_curves_stay_in_unit_interval() {
    for e in ALL_MONOTONE {
        assert!(!e.overshoots());
        for i in 0..=100 {
            let v = e.apply(i as f64 / 100.0);
            assert!((-1e-9..=1.0 + 1e-9).contains(&v), "{e:?} -> {v}");
        }
    }
}

#[test]
fn out_back_overshoots_one() {
    let e = Ease::OutBack(1.6);
    assert!(e.overshoots());
    let peak = (0..=100)
        .map(|i| e.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!(peak < 1.2);
}

#[test]
fn apply_clamps_input() {
    assert_eq!(Ease::InCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::InCubic.apply(4.0), 1.0);
    assert_eq!(Ease::InQuad.apply_unclamped(2.0), 4.0);
}

#[test]
fn bezier_matches_symmetric_midpoint() {
    let e = Ease::Bezier(0.42, 0.0, 0.58, 1.0);
    assert!((e.apply(0.5) - 0.5).abs() < 1e-4);
}

#[test]
fn named_presets_resolve() {
    assert_eq!(Ease::from_name("power3.out").unwrap(), Ease::OutQuart);
    assert_eq!("Power2.Out".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert_eq!(Ease::from_name("smooth").unwrap(), Ease::InOutCubic);
    assert!(matches!(Ease::from_name("slow").unwrap(), Ease::Bezier(..)));
    assert!(Ease::from_name("elastic.wobble").is_err());
}
