//! Common test utilities for integration tests.
//!
//! Helpers for building a mounted app and rendering it to plain text with
//! ratatui's `TestBackend` at a fixed instant.
//!
//! # Example
//!
//! ```ignore
//! let mut app = mounted_app(&ScreenConfig::default());
//! let screen = render_to_string(&mut app, 80, 30, Instant::now());
//! assert!(screen.contains("Weather (animated shimmer)"));
//! ```

#![allow(dead_code)]

use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use skeleton::app::App;
use skeleton::config::ScreenConfig;
use skeleton::ui;
use tokio::time::Instant;

/// The stock load delay.
pub const LOAD_DELAY: Duration = Duration::from_millis(5000);

/// Tall enough to show both sections without scrolling.
pub const FULL_HEIGHT: u16 = 30;

/// Create and mount an app. Must be called within a tokio runtime.
pub fn mounted_app(config: &ScreenConfig) -> App {
    let mut app = App::new(config);
    app.mount();
    app
}

/// Render one frame at `now` and return the backend buffer.
pub fn render_buffer(app: &mut App, width: u16, height: u16, now: Instant) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    app.update_terminal_dimensions(width, height);
    terminal.draw(|f| ui::render_at(f, app, now)).unwrap();
    terminal.backend().buffer().clone()
}

/// Render one frame at `now` and return its text, one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16, now: Instant) -> String {
    buffer_to_string(&render_buffer(app, width, height, now))
}

/// Flatten a buffer to text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Apply completions until no section is loading.
pub async fn settle(app: &mut App) {
    while app.is_animating() {
        assert!(app.process_next_message().await, "message channel closed while loading");
    }
}
