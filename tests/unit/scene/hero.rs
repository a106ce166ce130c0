use super::*;
use crate::foundation::core::Canvas;

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn ctx(frame: f64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: fps(),
        canvas: Canvas::default(),
    }
}

#[test]
fn entrance_tweens_hit_their_endpoints() {
    assert_eq!(BG_SCALE.sample(0.0), 1.1);
    assert!((BG_SCALE.sample(120.0) - 1.02).abs() < 1e-12);
    assert_eq!(LOGO_OPACITY.sample(8.0), 0.0);
    assert_eq!(LOGO_OPACITY.sample(28.0), 1.0);
    assert_eq!(SPARKLE_ROTATION.sample(0.0), -30.0);
    assert!(SPARKLE_ROTATION.sample(50.0).abs() < 1e-12);
    assert_eq!(LINE_WIDTH.sample(40.0), 0.0);
    assert!((LINE_WIDTH.sample(75.0) - 200.0).abs() < 1e-9);
}

#[test]
fn logo_scale_overshoots_before_settling() {
    let peak = (8..=28)
        .map(|f| LOGO_SCALE.sample(f as f64))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!((LOGO_SCALE.sample(28.0) - 1.0).abs() < 1e-12);
}

#[test]
fn delayed_orb_is_hidden_until_its_delay() {
    let orb = ORBS[2];
    let delay = 0.5 * 30.0;
    assert_eq!(orb.state(delay, fps()).opacity, 0.0);
    assert!((orb.state(delay + 20.0, fps()).opacity - 0.6).abs() < 1e-12);
    assert_eq!(orb.state(0.0, fps()).blur_px, 36.0);
}

#[test]
fn orb_drift_stays_within_amplitude() {
    for orb in ORBS {
        for f in 0..150 {
            let s = orb.state(f as f64, fps());
            assert!(s.offset.x.abs() <= 12.0 + 1e-9);
            assert!(s.offset.y.abs() <= 18.0 + 1e-9);
            assert!((0.9 - 1e-9..=1.0 + 1e-9).contains(&s.scale));
        }
    }
}

#[test]
fn orb_starts_at_rest_on_its_delay() {
    let s = ORBS[0].state(0.0, fps());
    assert_eq!(s.offset, Vec2::new(12.0, 0.0));
    assert_eq!(s.scale, 0.95);
}

#[test]
fn render_contains_all_layers() {
    let scene = HeroScene::new(150);
    let tree = scene.render(&ctx(60.0)).unwrap();
    for id in [
        "hero.bg",
        "hero.overlay.glow",
        "hero.overlay.shade",
        "hero.orb.0",
        "hero.orb.2",
        "hero.logo.wordmark",
        "hero.line",
        "hero.headline",
        "hero.subheadline",
    ] {
        assert!(tree.find(id).is_some(), "missing {id}");
    }
    assert!(tree.collect_text().contains("Studio-grade videos from a single prompt"));
}

#[test]
fn headline_is_hidden_at_first_frame() {
    let scene = HeroScene::new(150);
    let tree = scene.render(&ctx(0.0)).unwrap();
    let first_word = tree.find("hero.headline.0").unwrap();
    assert_eq!(first_word.style.opacity, 0.0);
    assert_eq!(scene.headline().timing.ease, Ease::OutQuart);
}
