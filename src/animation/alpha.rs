//! Alpha-pulsing shimmer driver.

use std::time::Duration;

use super::{InfiniteRepeatable, RepeatMode};
use crate::error::ConfigError;

/// Pulses a placeholder's opacity between 0 and `peak`.
///
/// One cycle rises linearly from 0 to `peak` over the first half, then
/// reverses back down to 0, so the sequence is periodic in `cycle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaShimmer {
    cycle: Duration,
    peak: f32,
}

impl AlphaShimmer {
    pub const DEFAULT_CYCLE: Duration = Duration::from_millis(1000);
    pub const DEFAULT_PEAK: f32 = 0.7;

    /// Create a driver with a custom cycle length and peak alpha.
    ///
    /// # Errors
    ///
    /// Fails on a zero cycle or a peak outside `(0, 1]`.
    pub fn new(cycle: Duration, peak: f32) -> Result<Self, ConfigError> {
        if cycle.is_zero() {
            return Err(ConfigError::ZeroDuration { field: "alpha cycle" });
        }
        if !(peak > 0.0 && peak <= 1.0) {
            return Err(ConfigError::PeakAlphaOutOfRange(peak));
        }
        Ok(Self { cycle, peak })
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    pub fn peak(&self) -> f32 {
        self.peak
    }

    fn animation(&self) -> InfiniteRepeatable {
        InfiniteRepeatable::new(self.cycle / 2).with_repeat_mode(RepeatMode::Reverse)
    }

    /// Alpha value after `elapsed` time since the shimmer appeared.
    pub fn alpha_at(&self, elapsed: Duration) -> f32 {
        self.peak * self.animation().progress(elapsed)
    }
}

impl Default for AlphaShimmer {
    fn default() -> Self {
        Self {
            cycle: Self::DEFAULT_CYCLE,
            peak: Self::DEFAULT_PEAK,
        }
    }
}
