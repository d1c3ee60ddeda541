//! UI rendering for the shimmer screen.
//!
//! - [`screen`] - Scrollable list of section cards (the screen composer)
//! - [`shimmer`] - Placeholder element painted with a flat color or gradient
//! - [`content_row`] - Resolved row with the refresh control
//! - [`density`] - Cell to pixel conversion for gradient math
//! - [`theme`] / [`strings`] - Injected colors and text

pub mod content_row;
pub mod density;
pub mod interaction;
pub mod screen;
pub mod shimmer;
pub mod strings;
pub mod theme;

pub use content_row::ContentRow;
pub use density::Density;
pub use shimmer::{ShimmerElement, ShimmerFill};
pub use strings::Strings;
pub use theme::Palette;

use ratatui::Frame;
use tokio::time::Instant;

use crate::app::App;

/// Render the UI for the current instant.
pub fn render(frame: &mut Frame, app: &mut App) {
    render_at(frame, app, Instant::now());
}

/// Render the UI as of `now`.
pub fn render_at(frame: &mut Frame, app: &mut App, now: Instant) {
    screen::render_screen(frame, app, now);
}
