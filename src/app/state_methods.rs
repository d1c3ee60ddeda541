//! State accessor and utility methods for the App.

use super::{App, SectionId};
use crate::ui::Density;

impl App {
    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request the event loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// True while any section shows a shimmer, which must be redrawn every frame.
    pub fn is_animating(&self) -> bool {
        self.sections.iter().any(|s| s.is_loading())
    }

    pub fn focused_section(&self) -> SectionId {
        SectionId(self.focus)
    }

    /// Move keyboard focus to the next card, wrapping around.
    pub fn focus_next(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.sections.len();
        self.mark_dirty();
    }

    /// Move keyboard focus to the previous card, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        self.focus = (self.focus + self.sections.len() - 1) % self.sections.len();
        self.mark_dirty();
    }

    /// Scroll the list by `delta` rows, clamped to the content.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll_offset as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
        if target != self.scroll_offset {
            self.scroll_offset = target;
            self.mark_dirty();
        }
    }

    /// Record the scroll range computed by the renderer.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> u16 {
        self.terminal_height
    }

    /// Update terminal dimensions, marking dirty only on change.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.terminal_width != width || self.terminal_height != height {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    /// Replace the cell-to-pixel conversion, e.g. after a resize.
    pub fn set_density(&mut self, density: Density) {
        if self.density != density {
            tracing::debug!(
                px_per_col = density.px_per_col(),
                px_per_row = density.px_per_row(),
                "density resolved"
            );
            self.density = density;
            self.mark_dirty();
        }
    }

    /// Apply every message already queued, without waiting.
    ///
    /// Returns the number of messages handled. Does nothing once the event
    /// loop has taken the receiver.
    pub fn process_pending_messages(&mut self) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.message_rx.as_mut().and_then(|rx| rx.try_recv().ok()) {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }

    /// Wait for the next message and apply it.
    ///
    /// Returns `false` if the receiver was taken or every sender is gone.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }
}
