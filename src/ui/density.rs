//! Cell to pixel conversion.
//!
//! Layout happens in terminal cells; gradient math happens in physical pixels.
//! Terminals that report their window size in pixels give an exact ratio,
//! everything else falls back to a typical 8x16 cell.

use crossterm::terminal::WindowSize;
use ratatui::layout::Rect;

use crate::animation::{Offset, PixelSize};

/// Pixels per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    px_per_col: f32,
    px_per_row: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Density {
    pub const FALLBACK: Density = Density {
        px_per_col: 8.0,
        px_per_row: 16.0,
    };

    /// Create a density from explicit cell dimensions. Non-positive values
    /// fall back to the default cell.
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            px_per_col: if px_per_col > 0.0 { px_per_col } else { Self::FALLBACK.px_per_col },
            px_per_row: if px_per_row > 0.0 { px_per_row } else { Self::FALLBACK.px_per_row },
        }
    }

    /// Derive the density from a terminal window size report.
    pub fn from_window_size(size: WindowSize) -> Self {
        if size.columns == 0 || size.rows == 0 || size.width == 0 || size.height == 0 {
            return Self::FALLBACK;
        }
        Self::new(
            size.width as f32 / size.columns as f32,
            size.height as f32 / size.rows as f32,
        )
    }

    /// Ask the terminal for its pixel size.
    pub fn detect() -> Self {
        match crossterm::terminal::window_size() {
            Ok(size) => Self::from_window_size(size),
            Err(err) => {
                tracing::debug!(error = %err, "terminal pixel size unavailable, using fallback density");
                Self::FALLBACK
            }
        }
    }

    pub fn px_per_col(&self) -> f32 {
        self.px_per_col
    }

    pub fn px_per_row(&self) -> f32 {
        self.px_per_row
    }

    pub fn cols_to_px(&self, cols: u16) -> f32 {
        cols as f32 * self.px_per_col
    }

    pub fn rows_to_px(&self, rows: u16) -> f32 {
        rows as f32 * self.px_per_row
    }

    /// Pixel size of a cell rectangle.
    pub fn size_px(&self, rect: Rect) -> PixelSize {
        PixelSize::new(self.cols_to_px(rect.width), self.rows_to_px(rect.height))
    }

    /// Pixel center of the cell at (`col`, `row`), relative to an origin cell.
    pub fn cell_center_px(&self, col: u16, row: u16) -> Offset {
        Offset::new(
            (col as f32 + 0.5) * self.px_per_col,
            (row as f32 + 0.5) * self.px_per_row,
        )
    }
}
