//! Screen configuration.
//!
//! Each section carries its own load delay and shimmer timings so the two
//! demos can be tuned independently. Defaults reproduce the stock behavior:
//! a 5 second simulated load, a 1 second gradient sweep after a 500 ms pause,
//! and a 1 second alpha pulse peaking at 0.7.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use skeleton::config::{ScreenConfig, SectionConfig};
//!
//! let config = ScreenConfig::default()
//!     .with_section(1, SectionConfig::alpha().with_load_delay(Duration::from_secs(2)));
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::animation::{AlphaShimmer, GradientShimmer};
use crate::error::ConfigError;

/// Which placeholder a section shows while loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShimmerStyle {
    /// Translucent gradient band sweeping across the placeholder.
    Gradient(GradientShimmer),
    /// Flat placeholder gray whose opacity pulses.
    Alpha(AlphaShimmer),
}

/// Configuration for one section of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionConfig {
    pub style: ShimmerStyle,
    /// How long the simulated fetch stays in flight.
    pub load_delay: Duration,
}

impl SectionConfig {
    pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(5000);

    /// A section showing the moving-gradient shimmer.
    pub fn gradient() -> Self {
        Self {
            style: ShimmerStyle::Gradient(GradientShimmer::default()),
            load_delay: Self::DEFAULT_LOAD_DELAY,
        }
    }

    /// A section showing the alpha-pulsing shimmer.
    pub fn alpha() -> Self {
        Self {
            style: ShimmerStyle::Alpha(AlphaShimmer::default()),
            load_delay: Self::DEFAULT_LOAD_DELAY,
        }
    }

    /// Set the simulated load delay.
    pub fn with_load_delay(mut self, load_delay: Duration) -> Self {
        self.load_delay = load_delay;
        self
    }

    /// Set the shimmer style.
    pub fn with_style(mut self, style: ShimmerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load_delay.is_zero() {
            return Err(ConfigError::ZeroDuration { field: "load delay" });
        }
        Ok(())
    }
}

/// Configuration for the whole screen, one entry per section in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub sections: Vec<SectionConfig>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            sections: vec![SectionConfig::gradient(), SectionConfig::alpha()],
        }
    }
}

impl ScreenConfig {
    /// Create a ScreenConfig with the two stock sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all sections.
    pub fn with_sections(mut self, sections: Vec<SectionConfig>) -> Self {
        self.sections = sections;
        self
    }

    /// Replace the section at `index`, or append it if `index` is past the end.
    pub fn with_section(mut self, index: usize, section: SectionConfig) -> Self {
        match self.sections.get_mut(index) {
            Some(slot) => *slot = section,
            None => self.sections.push(section),
        }
        self
    }

    /// Set the load delay of every section.
    pub fn with_load_delay(mut self, load_delay: Duration) -> Self {
        for section in &mut self.sections {
            section.load_delay = load_delay;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        self.sections.iter().try_for_each(SectionConfig::validate)
    }

    /// Parse a JSON config. Omitted values fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let config = match file.sections {
            Some(sections) => Self::new().with_sections(
                sections
                    .into_iter()
                    .map(SectionFile::into_config)
                    .collect::<Result<Vec<_>, ConfigError>>()?,
            ),
            None => Self::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    sections: Option<Vec<SectionFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
enum SectionFile {
    Gradient {
        #[serde(default)]
        load_delay_ms: Option<u64>,
        #[serde(default)]
        sweep_ms: Option<u64>,
        #[serde(default)]
        delay_ms: Option<u64>,
        #[serde(default)]
        band_fraction: Option<f32>,
    },
    Alpha {
        #[serde(default)]
        load_delay_ms: Option<u64>,
        #[serde(default)]
        cycle_ms: Option<u64>,
        #[serde(default)]
        peak_alpha: Option<f32>,
    },
}

impl SectionFile {
    fn into_config(self) -> Result<SectionConfig, ConfigError> {
        let millis = |value: Option<u64>, default: Duration| value.map(Duration::from_millis).unwrap_or(default);

        match self {
            SectionFile::Gradient {
                load_delay_ms,
                sweep_ms,
                delay_ms,
                band_fraction,
            } => {
                let shimmer = GradientShimmer::new(
                    millis(sweep_ms, GradientShimmer::DEFAULT_DURATION),
                    millis(delay_ms, GradientShimmer::DEFAULT_DELAY),
                    band_fraction.unwrap_or(GradientShimmer::DEFAULT_BAND_FRACTION),
                )?;
                Ok(SectionConfig::gradient()
                    .with_style(ShimmerStyle::Gradient(shimmer))
                    .with_load_delay(millis(load_delay_ms, SectionConfig::DEFAULT_LOAD_DELAY)))
            }
            SectionFile::Alpha {
                load_delay_ms,
                cycle_ms,
                peak_alpha,
            } => {
                let shimmer = AlphaShimmer::new(
                    millis(cycle_ms, AlphaShimmer::DEFAULT_CYCLE),
                    peak_alpha.unwrap_or(AlphaShimmer::DEFAULT_PEAK),
                )?;
                Ok(SectionConfig::alpha()
                    .with_style(ShimmerStyle::Alpha(shimmer))
                    .with_load_delay(millis(load_delay_ms, SectionConfig::DEFAULT_LOAD_DELAY)))
            }
        }
    }
}
