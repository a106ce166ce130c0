//! Brand colors and remote icon sources.

use crate::foundation::color::Color;

/// Near-black page background (`#0A0A0B`).
pub const INK: Color = Color::rgb8(0x0A, 0x0A, 0x0B);
/// Primary brand blue (`#2563EB`).
pub const BLUE: Color = Color::rgb8(0x25, 0x63, 0xEB);
/// Lighter blue (`#3B82F6`).
pub const BLUE_LIGHT: Color = Color::rgb8(0x3B, 0x82, 0xF6);
/// Violet accent (`#8B5CF6`).
pub const VIOLET: Color = Color::rgb8(0x8B, 0x5C, 0xF6);
/// Success green (`#10B981`).
pub const GREEN: Color = Color::rgb8(0x10, 0xB9, 0x81);

/// White at `alpha`.
pub const fn white(alpha: f64) -> Color {
    Color::rgba(1.0, 1.0, 1.0, alpha)
}

/// Brand blue at `alpha`.
pub const fn blue(alpha: f64) -> Color {
    Color::rgba8(0x25, 0x63, 0xEB, alpha)
}

/// Black at `alpha`.
pub const fn black(alpha: f64) -> Color {
    Color::rgba(0.0, 0.0, 0.0, alpha)
}

/// Page background at `alpha`.
pub const fn ink(alpha: f64) -> Color {
    Color::rgba8(0x0A, 0x0A, 0x0B, alpha)
}

/// Sparkle glyph tinted brand blue.
pub const SPARKLE_ICON_48: &str =
    "https://api.iconify.design/ph/sparkle-fill.svg?color=%232563EB&width=48";
/// Sparkle glyph tinted brand blue, large.
pub const SPARKLE_ICON_56: &str =
    "https://api.iconify.design/ph/sparkle-fill.svg?color=%232563EB&width=56";
/// White right arrow.
pub const ARROW_RIGHT_ICON: &str =
    "https://api.iconify.design/heroicons/arrow-right-solid.svg?color=%23ffffff&width=20";
