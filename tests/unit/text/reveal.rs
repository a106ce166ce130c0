use super::*;

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn unit_windows_are_staggered_in_frames() {
    let s = Stagger {
        start_frame: 25.0,
        stagger_secs: 0.08,
        duration_secs: 0.6,
        ease: Ease::OutQuart,
    };
    let w0 = s.unit_window(0, fps());
    let w2 = s.unit_window(2, fps());
    assert_eq!(w0.frames[0], 25.0);
    assert!((w0.frames[1] - 43.0).abs() < 1e-9);
    assert!((w2.frames[0] - 29.8).abs() < 1e-9);
    assert!((s.end_frame(6, fps()) - (25.0 + 5.0 * 2.4 + 18.0)).abs() < 1e-9);
    assert_eq!(s.end_frame(0, fps()), 25.0);
}

#[test]
fn fade_in_words_starts_hidden_and_settles() {
    let t = AnimatedText::new(
        TextEffect::FadeInWords,
        "headline",
        "Studio-grade videos from a single prompt",
        25.0,
        0.08,
        0.6,
    );
    assert_eq!(t.units(), 6);

    let before = t.unit_state(0, 0.0, fps());
    assert_eq!(before.opacity, 0.0);
    assert_eq!(before.translate_y, 20.0);

    let after = t.unit_state(5, t.end_frame(fps()) + 1.0, fps());
    assert_eq!(after.opacity, 1.0);
    assert_eq!(after.translate_y, 0.0);
}

#[test]
fn later_units_lag_earlier_ones() {
    let t = AnimatedText::new(TextEffect::FadeInChars, "t", "AI Generation", 8.0, 0.02, 0.4);
    let f = 12.0;
    let a = t.unit_state(0, f, fps()).opacity;
    let b = t.unit_state(5, f, fps()).opacity;
    assert!(a > b);
}

#[test]
fn blur_reveal_unblurs() {
    let t = AnimatedText::new(TextEffect::BlurReveal, "sub", "watch it transform", 45.0, 0.03, 0.6);
    assert_eq!(t.unit_state(0, 45.0, fps()).blur_px, 12.0);
    assert_eq!(t.unit_state(0, 80.0, fps()).blur_px, 0.0);
}

#[test]
fn bounce_chars_overshoot_but_opacity_is_bounded() {
    let t = AnimatedText::new(TextEffect::BounceChars, "cta", "Ready", 5.0, 0.03, 0.7);
    let mut saw_overshoot = false;
    for f in 0..60 {
        let s = t.unit_state(0, f as f64, fps());
        assert!((0.0..=1.0).contains(&s.opacity));
        assert!(s.scale > 0.0);
        if s.translate_y < 0.0 {
            saw_overshoot = true;
        }
    }
    assert!(saw_overshoot);
}

#[test]
fn bounce_chars_opacity_follows_eased_progress() {
    let t = AnimatedText::new(TextEffect::BounceChars, "cta", "Ready", 5.0, 0.03, 0.7);
    let w = t.timing.unit_window(0, fps());
    // Halfway through the window the eased progress is already past 0.5.
    let mid = (w.frames[0] + w.frames[1]) / 2.0;
    let p = Ease::OutBack(1.7).apply(0.5);
    assert!(p > 0.5);
    assert_eq!(t.unit_state(0, mid, fps()).opacity, 1.0);
    assert!(t.unit_state(0, w.frames[0], fps()).opacity < 1e-9);
}

#[test]
fn zero_duration_units_stay_hidden_until_their_start() {
    let t = AnimatedText::new(TextEffect::FadeInWords, "instant", "Ready to create", 30.0, 0.0, 0.0);
    assert_eq!(t.unit_state(0, 0.0, fps()).opacity, 0.0);
    assert_eq!(t.unit_state(2, 29.0, fps()).opacity, 0.0);
    assert_eq!(t.unit_state(0, 30.0, fps()).opacity, 1.0);
    assert_eq!(t.unit_state(2, 31.0, fps()).opacity, 1.0);
}

#[test]
fn render_emits_one_node_per_span() {
    let t = AnimatedText::new(TextEffect::FadeInWords, "label", "How It Works", 0.0, 0.06, 0.5)
        .font(TextStyle::default().centered());
    let node = t.render(100.0, fps());
    assert_eq!(node.id, "label");
    assert_eq!(node.children.len(), 5);
    assert_eq!(node.collect_text(), "How It Works");
    assert_eq!(node.layout.map(|l| l.justify), Some(crate::scene::node::Align::Center));
    assert!(node.children.iter().all(|c| c.style.opacity == 1.0));
}
