//! Translucent colors for terminal rendering.
//!
//! Terminals have no alpha channel, so translucent colors are composited onto
//! an opaque backdrop before they reach a cell.

use ratatui::style::Color;

/// An sRGB color with straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with a different alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Component-wise interpolation, alpha included.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composite this color over an opaque `backdrop` ("source over").
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let channel = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        Rgba::rgb(
            channel(self.r, backdrop.r),
            channel(self.g, backdrop.g),
            channel(self.b, backdrop.b),
        )
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}
