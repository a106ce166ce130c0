use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::hex("#12345").is_err());
    assert!(Color::hex("#zzzzzz").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn hsla_primary_hues() {
    let red = Color::hsla(0.0, 1.0, 0.5, 1.0);
    assert!((red.r - 1.0).abs() < 1e-9);
    assert!(red.g.abs() < 1e-9);

    let blue = Color::hsla(240.0, 1.0, 0.5, 0.08);
    assert!((blue.b - 1.0).abs() < 1e-9);
    assert!((blue.a - 0.08).abs() < 1e-12);
}

#[test]
fn brand_blue_matches_hex() {
    assert_eq!(Color::hex("#2563EB").unwrap(), Color::rgb8(0x25, 0x63, 0xEB));
    assert_eq!(Color::rgb8(0x25, 0x63, 0xEB).to_rgba8(), [0x25, 0x63, 0xEB, 255]);
}

#[test]
fn css_output_uses_8bit_channels() {
    assert_eq!(
        Color::rgba8(37, 99, 235, 0.15).to_css(),
        "rgba(37,99,235,0.150)"
    );
}
