//! Shimmer placeholder element.
//!
//! Paints a round avatar-shaped block and a full-width text-shaped block,
//! separated by fixed spacing, with either a flat translucent color or a
//! linear gradient. The element holds no state: the same inputs always paint
//! the same cells.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::animation::{GradientSpec, Offset, PixelSize, Rgba, ShimmerOffset};
use crate::error::ConfigError;

use super::Density;

/// Width of the round avatar block, in cells.
pub const AVATAR_WIDTH: u16 = 6;
/// Height of a placeholder or content row, in cells.
pub const ROW_HEIGHT: u16 = 3;
/// Gap between the avatar and whatever follows it.
pub const BLOCK_SPACING: u16 = 2;

const AVATAR_MASK: [&str; ROW_HEIGHT as usize] = [" ▄██▄ ", "██████", " ▀██▀ "];
const TEXT_BLOCK_GLYPH: char = '█';

/// Where the two placeholder shapes go inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderLayout {
    pub avatar: Rect,
    pub text_block: Rect,
}

/// Split a row into the avatar block and the one-line text block next to it.
pub fn placeholder_layout(area: Rect) -> PlaceholderLayout {
    let top = area.y + area.height.saturating_sub(ROW_HEIGHT) / 2;
    let avatar = Rect::new(area.x, top, AVATAR_WIDTH, ROW_HEIGHT).intersection(area);

    let text_x = area.x.saturating_add(AVATAR_WIDTH + BLOCK_SPACING);
    let text_y = top + ROW_HEIGHT / 2;
    let text_block = Rect::new(text_x, text_y, area.right().saturating_sub(text_x), 1).intersection(area);

    PlaceholderLayout { avatar, text_block }
}

/// Paint the round avatar shape, coloring each glyph with `color_at` given the
/// cell position relative to the avatar's origin.
pub(crate) fn paint_avatar(buf: &mut Buffer, area: Rect, surface: Rgba, color_at: impl Fn(u16, u16) -> Rgba) {
    for (row, line) in AVATAR_MASK.iter().enumerate().take(area.height as usize) {
        for (col, glyph) in line.chars().enumerate().take(area.width as usize) {
            if glyph == ' ' {
                continue;
            }
            let (col, row) = (col as u16, row as u16);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(glyph)
                    .set_fg(color_at(col, row).over(surface).into())
                    .set_bg(surface.into());
            }
        }
    }
}

/// How the placeholder shapes are filled.
#[derive(Debug, Clone, PartialEq)]
pub enum ShimmerFill {
    /// One translucent color everywhere.
    Flat(Rgba),
    /// A gradient sampled in each shape's own pixel space.
    Gradient(GradientSpec),
}

impl ShimmerFill {
    fn color_at(&self, point: Offset) -> Rgba {
        match self {
            ShimmerFill::Flat(color) => *color,
            ShimmerFill::Gradient(spec) => spec.color_at(point),
        }
    }
}

/// The two-shape shimmer placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ShimmerElement {
    fill: ShimmerFill,
    surface: Rgba,
    density: Density,
}

impl ShimmerElement {
    /// A placeholder painted with the gradient for the current sweep position.
    ///
    /// # Errors
    ///
    /// Fails when fewer than two colors are given.
    pub fn gradient(colors: &[Rgba], offset: ShimmerOffset, surface: Rgba, density: Density) -> Result<Self, ConfigError> {
        Ok(Self {
            fill: ShimmerFill::Gradient(GradientSpec::from_shimmer(colors, offset)?),
            surface,
            density,
        })
    }

    /// A placeholder painted with a single translucent color.
    pub fn flat(color: Rgba, surface: Rgba, density: Density) -> Self {
        Self {
            fill: ShimmerFill::Flat(color),
            surface,
            density,
        }
    }

    /// Pixel size of the sweep container for a row, and the height of the
    /// placeholder block that sizes the gradient band.
    pub fn sweep_metrics(area: Rect, density: &Density) -> (PixelSize, f32) {
        let row = Rect::new(area.x, area.y, area.width, ROW_HEIGHT.min(area.height));
        let container = density.size_px(row);
        (container, container.height)
    }
}

impl Widget for &ShimmerElement {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = placeholder_layout(area);
        let density = self.density;

        paint_avatar(buf, layout.avatar, self.surface, |col, row| {
            self.fill.color_at(density.cell_center_px(col, row))
        });

        let block = layout.text_block;
        for y in block.top()..block.bottom() {
            for x in block.left()..block.right() {
                let color = self.fill.color_at(density.cell_center_px(x - block.x, y - block.y));
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(TEXT_BLOCK_GLYPH)
                        .set_fg(color.over(self.surface).into())
                        .set_bg(self.surface.into());
                }
            }
        }
    }
}

impl Widget for ShimmerElement {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
