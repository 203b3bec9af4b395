/// Straight-alpha sRGB color, components in `[0, 1]`.
///
/// This is what a 2D canvas context takes for fill and stroke styles; no
/// premultiplication happens on this side of the surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses a CSS hex literal: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// Returns `None` for anything else.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Some(Self::from_srgb_u8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Returns the color as sRGB bytes, clamping out-of-range channels.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// CSS `rgba(...)` form, for hosts that hand styles to a real canvas.
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_srgb_u8();
        format!("rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
    }
}
