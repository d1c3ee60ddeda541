//! Moving-gradient shimmer: sweep offsets and the linear gradient they drive.

use std::time::Duration;

use super::{lerp, InfiniteRepeatable, RepeatMode, Rgba};
use crate::error::ConfigError;

/// A size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelSize {
    pub width: f32,
    pub height: f32,
}

impl PixelSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A point in physical pixels, relative to the painted shape's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Current sweep position of the gradient band.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShimmerOffset {
    pub x: f32,
    pub y: f32,
    pub band_width: f32,
}

/// Drives the diagonal sweep of the gradient band.
///
/// Each cycle holds both offsets at 0 for `delay`, then moves them linearly to
/// `container + band_width` over `duration` and restarts from 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientShimmer {
    duration: Duration,
    delay: Duration,
    band_fraction: f32,
}

impl GradientShimmer {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_BAND_FRACTION: f32 = 0.2;

    /// # Errors
    ///
    /// Fails on a zero sweep duration or a band fraction outside `(0, 1]`.
    pub fn new(duration: Duration, delay: Duration, band_fraction: f32) -> Result<Self, ConfigError> {
        if duration.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "gradient sweep",
            });
        }
        if !(band_fraction > 0.0 && band_fraction <= 1.0) {
            return Err(ConfigError::BandFractionOutOfRange(band_fraction));
        }
        Ok(Self {
            duration,
            delay,
            band_fraction,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn band_fraction(&self) -> f32 {
        self.band_fraction
    }

    fn animation(&self) -> InfiniteRepeatable {
        InfiniteRepeatable::new(self.duration)
            .with_delay(self.delay)
            .with_repeat_mode(RepeatMode::Restart)
    }

    /// Length of one full cycle, delay included.
    pub fn period(&self) -> Duration {
        self.animation().period()
    }

    /// Width of the bright band for a placeholder block of the given height.
    pub fn band_width(&self, block_height_px: f32) -> f32 {
        self.band_fraction * block_height_px
    }

    /// Sweep offsets after `elapsed` time for a container of the given size.
    pub fn offset_at(&self, elapsed: Duration, container: PixelSize, block_height_px: f32) -> ShimmerOffset {
        let band_width = self.band_width(block_height_px);
        let progress = self.animation().progress(elapsed);
        ShimmerOffset {
            x: lerp(0.0, container.width + band_width, progress),
            y: lerp(0.0, container.height + band_width, progress),
            band_width,
        }
    }
}

impl Default for GradientShimmer {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            delay: Self::DEFAULT_DELAY,
            band_fraction: Self::DEFAULT_BAND_FRACTION,
        }
    }
}

/// One color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Rgba,
    /// Relative position along the gradient axis, in `[0, 1]`.
    pub position: f32,
}

/// A linear gradient between two points.
///
/// Points before `start` take the first stop's color and points past `end`
/// take the last one's.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: Vec<GradientStop>,
    start: Offset,
    end: Offset,
}

impl GradientSpec {
    /// Build a gradient with evenly spaced stops.
    ///
    /// # Errors
    ///
    /// A gradient needs at least two colors.
    pub fn new(colors: &[Rgba], start: Offset, end: Offset) -> Result<Self, ConfigError> {
        if colors.len() < 2 {
            return Err(ConfigError::TooFewGradientColors(colors.len()));
        }
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop {
                color,
                position: i as f32 / last,
            })
            .collect();
        Ok(Self { stops, start, end })
    }

    /// The gradient for a sweep position: it runs from
    /// `(x - band, y - band)` to `(x, y)`.
    pub fn from_shimmer(colors: &[Rgba], offset: ShimmerOffset) -> Result<Self, ConfigError> {
        Self::new(
            colors,
            Offset::new(offset.x - offset.band_width, offset.y - offset.band_width),
            Offset::new(offset.x, offset.y),
        )
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn start(&self) -> Offset {
        self.start
    }

    pub fn end(&self) -> Offset {
        self.end
    }

    /// Color of the gradient at `point`.
    pub fn color_at(&self, point: Offset) -> Rgba {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let length_sq = dx * dx + dy * dy;

        let t = if length_sq <= f32::EPSILON {
            // Degenerate axis: everything past the point is "after" it.
            if point.x >= self.end.x && point.y >= self.end.y {
                1.0
            } else {
                0.0
            }
        } else {
            (((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / length_sq).clamp(0.0, 1.0)
        };

        self.color_at_position(t)
    }

    fn color_at_position(&self, t: f32) -> Rgba {
        let first = self.stops[0];
        if t <= first.position {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if t <= to.position {
                let span = to.position - from.position;
                let local = if span <= f32::EPSILON {
                    1.0
                } else {
                    (t - from.position) / span
                };
                return from.color.lerp(to.color, local);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}
