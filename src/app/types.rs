//! Type definitions for the application state.
//!
//! - [`SectionId`] - Stable index of a section on the screen
//! - [`SectionView`] - What a section's card shows this frame
//! - [`Section`] - Per-section state owned by the app

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

use crate::config::{SectionConfig, ShimmerStyle};
use crate::loading::{LoadingSimulator, LoadingState};

use super::AppMessage;

/// Position of a section on the screen, counted from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub usize);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section-{}", self.0 + 1)
    }
}

/// What a section's card renders this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionView {
    /// A shimmer placeholder, `elapsed` into its animation.
    Loading { style: ShimmerStyle, elapsed: Duration },
    /// The resolved content row.
    Loaded,
}

/// One independent demo on the screen: a loading simulator plus the shimmer
/// it shows while loading.
#[derive(Debug)]
pub struct Section {
    id: SectionId,
    style: ShimmerStyle,
    simulator: LoadingSimulator,
    mounted: bool,
}

impl Section {
    pub fn new(id: SectionId, config: &SectionConfig) -> Self {
        Self {
            id,
            style: config.style,
            simulator: LoadingSimulator::new(id, config.load_delay),
            mounted: false,
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn style(&self) -> ShimmerStyle {
        self.style
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.simulator.is_loading()
    }

    pub fn loading_state(&self) -> LoadingState {
        self.simulator.state()
    }

    pub fn simulator(&self) -> &LoadingSimulator {
        &self.simulator
    }

    /// Mount the section and kick off its initial load.
    pub fn mount(&mut self, tx: &UnboundedSender<AppMessage>) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(section = %self.id, "section mounted");
        self.simulator.trigger(tx);
    }

    /// Tear the section down, abandoning any pending load.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.simulator.cancel();
        self.mounted = false;
        tracing::debug!(section = %self.id, "section unmounted");
    }

    /// Start a load. No-op while already loading or when unmounted.
    pub fn trigger(&mut self, tx: &UnboundedSender<AppMessage>) -> bool {
        self.mounted && self.simulator.trigger(tx)
    }

    /// Apply a load completion. Returns whether the state changed.
    pub fn finish(&mut self, ticket: u64) -> bool {
        self.mounted && self.simulator.finish(ticket)
    }

    /// The view for this frame.
    pub fn view(&self, now: Instant) -> SectionView {
        match self.simulator.state() {
            LoadingState::Loading { started_at, .. } => SectionView::Loading {
                style: self.style,
                elapsed: now.saturating_duration_since(started_at),
            },
            LoadingState::Idle => SectionView::Loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_section_id_display_is_one_based() {
        assert_eq!(SectionId(0).to_string(), "section-1");
        assert_eq!(SectionId(1).to_string(), "section-2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_tracks_loading_state() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut section = Section::new(SectionId(0), &SectionConfig::alpha());
        assert_eq!(section.view(Instant::now()), SectionView::Loaded);

        section.mount(&tx);
        tokio::time::advance(Duration::from_millis(300)).await;
        match section.view(Instant::now()) {
            SectionView::Loading { elapsed, style } => {
                assert_eq!(elapsed, Duration::from_millis(300));
                assert!(matches!(style, ShimmerStyle::Alpha(_)));
            }
            SectionView::Loaded => panic!("expected shimmer while loading"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmounted_section_ignores_trigger() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut section = Section::new(SectionId(0), &SectionConfig::gradient());
        assert!(!section.trigger(&tx));
        assert!(!section.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_is_idempotent() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut section = Section::new(SectionId(0), &SectionConfig::gradient());
        section.mount(&tx);
        let state = section.loading_state();
        tokio::time::advance(Duration::from_millis(10)).await;
        section.mount(&tx);
        assert_eq!(section.loading_state(), state);
    }
}
