use super::*;
use crate::{
    composition::Promo,
    config::PromoConfig,
    eval::Evaluator,
    foundation::core::FrameIndex,
};

#[test]
fn identical_trees_share_a_fingerprint() {
    let a = Node::rect("r").opacity(0.5).size(10.0, 10.0);
    let b = a.clone();
    assert_eq!(fingerprint_node(&a), fingerprint_node(&b));
}

#[test]
fn any_style_change_moves_the_fingerprint() {
    let base = Node::rect("r").opacity(0.5);
    let fp = fingerprint_node(&base);
    assert_ne!(fp, fingerprint_node(&base.clone().opacity(0.51)));
    assert_ne!(fp, fingerprint_node(&base.clone().blur(1.0)));
    assert_ne!(fp, fingerprint_node(&Node::rect("s").opacity(0.5)));
    assert_ne!(fp, fingerprint_node(&Node::group("r").opacity(0.5)));
}

#[test]
fn negative_zero_is_zero() {
    let a = Node::rect("r").blur(0.0);
    let b = Node::rect("r").blur(-0.0);
    assert_eq!(fingerprint_node(&a), fingerprint_node(&b));
}

#[test]
fn frame_index_is_not_hashed() {
    let p = Promo::new(&PromoConfig::default()).unwrap();
    let mut f = Evaluator::eval_frame(&p, FrameIndex(3)).unwrap();
    let fp = fingerprint(&f);
    f.frame = FrameIndex(99);
    f.artifacts.clear();
    assert_eq!(fingerprint(&f), fp);
}

#[test]
fn animated_frames_differ() {
    let p = Promo::new(&PromoConfig::default()).unwrap();
    let a = Evaluator::eval_frame(&p, FrameIndex(10)).unwrap();
    let b = Evaluator::eval_frame(&p, FrameIndex(11)).unwrap();
    assert_ne!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn display_is_32_hex_digits() {
    let s = fingerprint_node(&Node::group("g")).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
