//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Section`] - Per-section loading state and shimmer style
//! - [`SectionView`] - Tagged view state consumed by the renderer
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{Section, SectionId, SectionView};

use tokio::sync::mpsc;

use crate::config::ScreenConfig;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::{Density, Palette, Strings};

/// Main application state
pub struct App {
    /// Sections in display order
    pub sections: Vec<Section>,
    /// Color tokens
    pub palette: Palette,
    /// Display strings
    pub strings: Strings,
    /// Cell to pixel conversion for gradient math
    pub density: Density,
    /// Index of the section whose card has keyboard focus
    pub focus: usize,
    /// First visible content row of the scrollable list
    pub scroll_offset: u16,
    /// Largest valid scroll offset, updated on every render
    pub max_scroll: u16,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Last known mouse position, for hover styling
    pub mouse_position: Option<(u16, u16)>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: the UI must be redrawn
    pub needs_redraw: bool,
    terminal_width: u16,
    terminal_height: u16,
    mounted: bool,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background task messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app from a configuration. Nothing starts until [`App::mount`].
    pub fn new(config: &ScreenConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let sections = config
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| Section::new(SectionId(index), section))
            .collect();

        Self {
            sections,
            palette: Palette::default(),
            strings: Strings::default(),
            density: Density::default(),
            focus: 0,
            scroll_offset: 0,
            max_scroll: 0,
            hit_areas: HitAreaRegistry::new(),
            mouse_position: None,
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            mounted: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Mount the screen: every section starts its initial load.
    ///
    /// Must be called within a tokio runtime.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::info!(sections = self.sections.len(), "screen mounted");
        for section in &mut self.sections {
            section.mount(&self.message_tx);
        }
        self.mark_dirty();
    }

    /// Unmount the screen, abandoning pending loads.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for section in &mut self.sections {
            section.unmount();
        }
        tracing::info!("screen unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    /// Unmount a single section.
    pub fn unmount_section(&mut self, id: SectionId) {
        if let Some(section) = self.sections.get_mut(id.0) {
            section.unmount();
            self.mark_dirty();
        }
    }

    /// Activate a section's refresh control.
    ///
    /// Returns `false` when the section is already loading (the request is
    /// dropped) or does not exist.
    pub fn refresh(&mut self, id: SectionId) -> bool {
        let Some(section) = self.sections.get_mut(id.0) else {
            return false;
        };
        tracing::info!(section = %id, "refresh requested");
        let started = section.trigger(&self.message_tx);
        if started {
            self.mark_dirty();
        }
        started
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}
