use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: f64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::default(),
    }
}

#[test]
fn glow_breathes_within_bounds() {
    for f in 0..120 {
        let t = f as f64 / 30.0;
        let s = GLOW_SCALE.sample_secs(t);
        let o = GLOW_OPACITY.sample_secs(t);
        assert!((0.92 - 1e-9..=1.08 + 1e-9).contains(&s));
        assert!((0.15 - 1e-9..=0.25 + 1e-9).contains(&o));
    }
}

#[test]
fn button_rises_into_place() {
    assert_eq!(BUTTON_OPACITY.sample(30.0), 0.0);
    assert!((BUTTON_Y.sample(30.0) - 20.0).abs() < 1e-9);
    assert!(BUTTON_Y.sample(50.0).abs() < 1e-12);
    let dip = (35..=50)
        .map(|f| BUTTON_Y.sample(f as f64))
        .fold(f64::MAX, f64::min);
    assert!(dip < 0.0);
}

#[test]
fn badges_enter_in_order() {
    assert_eq!(BADGES[0].opacity(55.0), 0.0);
    assert_eq!(BADGES[0].opacity(67.0), 1.0);
    assert_eq!(BADGES[1].opacity(67.0), 5.0 / 12.0);
    assert_eq!(BADGES[1].translate_y(62.0), 10.0);
    assert_eq!(BADGES[1].translate_y(74.0), 0.0);
}

#[test]
fn headline_bounces_per_character() {
    let scene = CtaScene::new(120);
    assert_eq!(scene.headline().effect, TextEffect::BounceChars);
    let tree = scene.render(&ctx(119.0)).unwrap();
    let text = tree.collect_text();
    assert!(text.contains("Ready to animate your imagination?"));
    assert!(text.contains("Create Your First Video"));
    assert!(text.contains("Free to get started"));
    assert_eq!(tree.find("cta.headline.0").unwrap().style.opacity, 1.0);
}
