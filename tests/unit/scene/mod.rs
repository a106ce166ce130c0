use super::*;

fn ctx(frame: f64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::default(),
    }
}

#[test]
fn time_helpers_use_fps() {
    let c = ctx(45.0);
    assert_eq!(c.t_secs(), 1.5);
    assert_eq!(c.secs_since(15.0), 1.0);
    assert_eq!(c.secs_since(60.0), -0.5);
    assert_eq!(c.width(), 1920.0);
    assert_eq!(c.height(), 1080.0);
}

#[test]
fn root_and_column_cover_the_canvas() {
    let c = ctx(0.0);
    let root = scene_root("hero", &c);
    assert_eq!(root.id, "hero");
    assert_eq!(root.style.size, Some(kurbo::Size::new(1920.0, 1080.0)));
    let col = content_column("hero.content", &c, 24.0);
    assert_eq!(col.layout.map(|l| l.gap), Some(24.0));
}

#[test]
fn every_scene_renders_deterministically() {
    let scenes: Vec<Box<dyn Scene>> = vec![
        Box::new(hero::HeroScene::new(150)),
        Box::new(steps::StepsScene::new(150)),
        Box::new(showcase::ShowcaseScene::new(165).unwrap()),
        Box::new(cta::CtaScene::new(120)),
    ];
    for s in &scenes {
        for f in [0.0, 17.5, 60.0, 119.0] {
            let a = s.render(&ctx(f)).unwrap();
            let b = s.render(&ctx(f)).unwrap();
            assert_eq!(a, b, "{} at {f}", s.name());
            assert_eq!(a.id, s.name());
        }
    }
}
