//! Color theme for the shimmer screen.
//!
//! Colors are [`Rgba`] rather than terminal colors because the shimmer blends
//! translucent tones over the card surface before they reach a cell.

use crate::animation::Rgba;

// ============================================================================
// Base Tones
// ============================================================================

/// Deep purple screen background
pub const PURPLE_100: Rgba = Rgba::rgb(0x4A, 0x2C, 0x7A);

/// Light purple used for the gradient highlight
pub const PURPLE_200: Rgba = Rgba::rgb(0xBB, 0x86, 0xFC);

/// Amber accent for the resolved avatar
pub const AMBER_600: Rgba = Rgba::rgb(0xFF, 0xB3, 0x00);

/// Placeholder gray for the alpha shimmer
pub const LIGHT_GRAY: Rgba = Rgba::rgb(0xCC, 0xCC, 0xCC);

/// Card surface
pub const SURFACE: Rgba = Rgba::rgb(0xFA, 0xF7, 0xFF);

/// Header text on the background
pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);

/// Body text on the card surface
pub const INK: Rgba = Rgba::rgb(0x21, 0x1A, 0x2E);

/// Muted text and idle borders
pub const DIM: Rgba = Rgba::rgb(0x8A, 0x80, 0x99);

// ============================================================================
// Palette
// ============================================================================

/// The color tokens the screen is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub surface: Rgba,
    pub accent: Rgba,
    pub gradient_base: Rgba,
    pub gradient_highlight: Rgba,
    pub placeholder: Rgba,
    pub header: Rgba,
    pub text: Rgba,
    pub dim: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: PURPLE_100,
            surface: SURFACE,
            accent: AMBER_600,
            gradient_base: PURPLE_100,
            gradient_highlight: PURPLE_200,
            placeholder: LIGHT_GRAY,
            header: WHITE,
            text: INK,
            dim: DIM,
        }
    }
}

impl Palette {
    /// Stops of the moving gradient: opaque-ish base, faint highlight band,
    /// opaque-ish base.
    pub fn gradient_colors(&self) -> [Rgba; 3] {
        [
            self.gradient_base.with_alpha(0.9),
            self.gradient_highlight.with_alpha(0.3),
            self.gradient_base.with_alpha(0.9),
        ]
    }
}
