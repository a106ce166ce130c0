use super::*;

fn promo() -> Promo {
    Promo::new(&PromoConfig::default()).unwrap()
}

#[test]
fn default_promo_shape() {
    let p = promo();
    assert_eq!(p.total_frames(), 525);
    assert_eq!(p.fps(), Fps::new(30, 1).unwrap());
    assert_eq!(p.canvas(), Canvas::default());
    let names: Vec<&str> = p.scenes().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["hero", "steps", "showcase", "cta"]);
    assert_eq!(p.series().len(), 4);
}

#[test]
fn thumbnail_only_at_frame_zero() {
    let p = promo();
    assert_eq!(p.artifacts_at(FrameIndex(0)), vec![Artifact::thumbnail()]);
    assert!(p.artifacts_at(FrameIndex(1)).is_empty());
    assert_eq!(Artifact::thumbnail().filename, "thumbnail.jpeg");
}

#[test]
fn font_request_is_inter() {
    let f = promo().font().clone();
    assert_eq!(f.family, "Inter");
    assert_eq!(f.weights, vec![400, 500, 600, 700, 800]);
    assert_eq!(f.subsets, vec!["latin".to_owned()]);
}

#[test]
fn render_puts_background_first() {
    let root = promo().render(FrameIndex(10)).unwrap();
    assert_eq!(root.id, "promo");
    let ids: Vec<&str> = root.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["background", "hero"]);
}

#[test]
fn render_during_transition_stacks_both_scenes() {
    let root = promo().render(FrameIndex(140)).unwrap();
    let ids: Vec<&str> = root.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["background", "hero", "steps"]);
    let hero = &root.children[1];
    let steps = &root.children[2];
    assert!((hero.style.opacity - 0.5).abs() < 1e-12);
    assert!((steps.style.opacity - 0.5).abs() < 1e-12);
    assert!((hero.style.blur_px - 8.0).abs() < 1e-12);
    assert!((steps.style.blur_px - 8.0).abs() < 1e-12);
}

#[test]
fn render_last_frame_and_reject_past_end() {
    let p = promo();
    let root = p.render(FrameIndex(524)).unwrap();
    assert_eq!(root.children.last().map(|c| c.id.as_str()), Some("cta"));
    assert!(matches!(
        p.render(FrameIndex(525)),
        Err(PromoError::Evaluation(_))
    ));
}

#[test]
fn custom_timings_flow_through() {
    let mut cfg = PromoConfig::default();
    cfg.timings.transition = 10;
    let p = Promo::new(&cfg).unwrap();
    assert_eq!(p.total_frames(), 555);
    assert_eq!(p.audio().total_frames, 555);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = PromoConfig::default();
    cfg.timings.transition = 200;
    assert!(Promo::new(&cfg).is_err());
}
