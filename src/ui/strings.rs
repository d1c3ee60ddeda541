//! Display strings.

use crate::config::ShimmerStyle;

/// Text shown on the screen, keyed the way the resources are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub weather_animated: String,
    pub weather_alpha: String,
    pub temperature: String,
    pub refresh: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            weather_animated: "Weather (animated shimmer)".to_string(),
            weather_alpha: "Weather (alpha shimmer)".to_string(),
            temperature: "21 °C".to_string(),
            refresh: "Refresh".to_string(),
        }
    }
}

impl Strings {
    /// Header for a section showing the given shimmer.
    pub fn section_title(&self, style: &ShimmerStyle) -> &str {
        match style {
            ShimmerStyle::Gradient(_) => &self.weather_animated,
            ShimmerStyle::Alpha(_) => &self.weather_alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AlphaShimmer, GradientShimmer};

    #[test]
    fn test_section_title_follows_style() {
        let strings = Strings::default();
        assert_eq!(
            strings.section_title(&ShimmerStyle::Gradient(GradientShimmer::default())),
            strings.weather_animated
        );
        assert_eq!(
            strings.section_title(&ShimmerStyle::Alpha(AlphaShimmer::default())),
            strings.weather_alpha
        );
    }
}
