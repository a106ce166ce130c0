use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_clamp_and_shift() {
    let r = FrameRange::with_len(10, 5);
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(10));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(14));
    assert_eq!(r.shift(-20), FrameRange::with_len(0, 0));
    assert_eq!(r.shift(3), FrameRange::with_len(13, 5));
    assert_eq!(r.iter().count(), 5);
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert!(t.is_identity());
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D::translate(10.0, -2.5);
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn canvas_center_is_half_extent() {
    let c = Canvas::default();
    assert_eq!(c.center(), Point::new(960.0, 540.0));
}
