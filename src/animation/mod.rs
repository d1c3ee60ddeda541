//! Time-based animation primitives for the shimmer placeholders.
//!
//! Every animation here is a pure function of elapsed time. Nothing ticks or
//! holds progress: a shimmer restarts simply by measuring elapsed time from a
//! new origin, which keeps the drivers trivially testable against a virtual
//! clock.
//!
//! - [`InfiniteRepeatable`] - linear progress with delay and repeat mode
//! - [`AlphaShimmer`] - ping-pong alpha pulse
//! - [`GradientShimmer`] - x/y sweep offsets for the moving gradient
//! - [`GradientSpec`] - color stops plus endpoints, sampled per cell
//! - [`Rgba`] - translucent color with compositing

pub mod alpha;
pub mod color;
pub mod gradient;

pub use alpha::AlphaShimmer;
pub use color::Rgba;
pub use gradient::{GradientShimmer, GradientSpec, GradientStop, Offset, PixelSize, ShimmerOffset};

use std::time::Duration;

/// How an infinite animation behaves when one iteration ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Jump back to the initial value and play forward again.
    Restart,
    /// Play the next iteration backwards (ping-pong).
    Reverse,
}

/// A linear tween that repeats forever.
///
/// Each iteration is `delay` of holding the starting value followed by
/// `duration` of linear progress from 0 to 1. With [`RepeatMode::Reverse`]
/// every odd iteration runs from 1 back to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiniteRepeatable {
    pub duration: Duration,
    pub delay: Duration,
    pub repeat_mode: RepeatMode,
}

impl InfiniteRepeatable {
    /// Create a restarting animation with no delay.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            repeat_mode: RepeatMode::Restart,
        }
    }

    /// Set the delay that precedes every iteration.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the repeat mode.
    pub fn with_repeat_mode(mut self, repeat_mode: RepeatMode) -> Self {
        self.repeat_mode = repeat_mode;
        self
    }

    /// Length of a single iteration, delay included.
    pub fn iteration(&self) -> Duration {
        self.delay + self.duration
    }

    /// Time after which the produced sequence repeats exactly.
    pub fn period(&self) -> Duration {
        match self.repeat_mode {
            RepeatMode::Restart => self.iteration(),
            RepeatMode::Reverse => self.iteration() * 2,
        }
    }

    /// Progress in `[0, 1]` after `elapsed` time.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let iteration = self.iteration().as_nanos();
        if self.duration.is_zero() || iteration == 0 {
            return 1.0;
        }

        let elapsed = elapsed.as_nanos();
        let index = elapsed / iteration;
        let within = elapsed % iteration;
        let delay = self.delay.as_nanos();

        let forward = if within < delay {
            0.0
        } else {
            ((within - delay) as f64 / self.duration.as_nanos() as f64) as f32
        };

        match self.repeat_mode {
            RepeatMode::Reverse if index % 2 == 1 => 1.0 - forward,
            _ => forward,
        }
    }
}

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
