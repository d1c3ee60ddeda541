//! Rendering tests using ratatui's TestBackend.
//!
//! Cell positions are taken from the screen layout for an 80 column terminal
//! rather than hard-coded, so the assertions follow the layout constants.

mod common;

use std::collections::HashSet;
use std::time::Duration;

use common::{buffer_to_string, mounted_app, render_buffer, render_to_string, settle, FULL_HEIGHT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use skeleton::app::{App, SectionId};
use skeleton::config::ScreenConfig;
use skeleton::ui::interaction::ClickAction;
use skeleton::ui::screen::{content_height, layout_sections, SectionLayout};
use skeleton::ui::shimmer::placeholder_layout;
use tokio::time::Instant;

const WIDTH: u16 = 80;
const GRADIENT: usize = 0;
const ALPHA: usize = 1;

fn section_layout(section: usize) -> SectionLayout {
    layout_sections(WIDTH, 2)[section]
}

/// The one-row text block of a section's placeholder.
fn text_block(section: usize) -> Rect {
    placeholder_layout(section_layout(section).body).text_block
}

/// Foreground of a cell a few columns into the alpha section's text block.
fn alpha_cell_fg(app: &mut App, now: Instant) -> Color {
    let block = text_block(ALPHA);
    let buffer = render_buffer(app, WIDTH, FULL_HEIGHT, now);
    buffer[(block.x + 4, block.y)].fg
}

/// Rows of the scrollbar column drawing the thumb.
fn thumb_rows(buffer: &Buffer) -> Vec<u16> {
    let column = buffer.area.right() - 1;
    (buffer.area.top()..buffer.area.bottom())
        .filter(|&y| buffer[(column, y)].symbol() == "█")
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_loading_screen_shows_shimmer_placeholders() {
    let mut app = mounted_app(&ScreenConfig::default());
    let buffer = render_buffer(&mut app, WIDTH, FULL_HEIGHT, Instant::now());
    let screen = buffer_to_string(&buffer);

    assert!(!screen.contains("Refresh"));
    for section in [GRADIENT, ALPHA] {
        let block = text_block(section);
        assert_eq!(buffer[(block.x, block.y)].symbol(), "█", "section {}", section);
    }
    assert!(app.hit_areas.is_empty(), "no refresh controls while loading");
}

#[tokio::test(start_paused = true)]
async fn test_alpha_shimmer_pulses() {
    let start = Instant::now();
    let mut app = mounted_app(&ScreenConfig::default());
    let palette = app.palette;

    let invisible = Color::from(palette.surface);
    let peak = Color::from(palette.placeholder.with_alpha(0.7).over(palette.surface));

    assert_eq!(alpha_cell_fg(&mut app, start), invisible);
    assert_eq!(alpha_cell_fg(&mut app, start + Duration::from_millis(500)), peak);
    assert_eq!(alpha_cell_fg(&mut app, start + Duration::from_millis(1000)), invisible);
    assert_eq!(
        alpha_cell_fg(&mut app, start + Duration::from_millis(250)),
        alpha_cell_fg(&mut app, start + Duration::from_millis(750))
    );
}

#[tokio::test(start_paused = true)]
async fn test_alpha_phase_restarts_with_each_load() {
    let mut app = mounted_app(&ScreenConfig::default());
    settle(&mut app).await;
    let palette = app.palette;

    // Refresh at an instant unrelated to the first load's phase.
    tokio::time::sleep(Duration::from_millis(1234)).await;
    let refreshed_at = Instant::now();
    assert!(app.refresh(SectionId(ALPHA)));

    let invisible = Color::from(palette.surface);
    let peak = Color::from(palette.placeholder.with_alpha(0.7).over(palette.surface));
    assert_eq!(alpha_cell_fg(&mut app, refreshed_at), invisible);
    assert_eq!(alpha_cell_fg(&mut app, refreshed_at + Duration::from_millis(500)), peak);
    assert_eq!(alpha_cell_fg(&mut app, refreshed_at + Duration::from_millis(1000)), invisible);
}

#[tokio::test(start_paused = true)]
async fn test_gradient_band_sweeps_after_delay() {
    let start = Instant::now();
    let mut app = mounted_app(&ScreenConfig::default());

    let block = text_block(GRADIENT);
    let row_colors = |app: &mut App, at: Duration| -> HashSet<Color> {
        let buffer = render_buffer(app, WIDTH, FULL_HEIGHT, start + at);
        (block.left()..block.right())
            .map(|x| buffer[(x, block.y)].fg)
            .collect()
    };

    // Holding during the initial delay: the band has not entered yet.
    assert_eq!(row_colors(&mut app, Duration::ZERO).len(), 1);
    assert_eq!(row_colors(&mut app, Duration::from_millis(400)).len(), 1);

    // Halfway through the sweep the band crosses the text block.
    assert!(row_colors(&mut app, Duration::from_millis(1000)).len() > 1);

    // The cycle restarts after delay plus sweep.
    assert_eq!(
        row_colors(&mut app, Duration::from_millis(1000)),
        row_colors(&mut app, Duration::from_millis(2500))
    );
}

#[tokio::test(start_paused = true)]
async fn test_content_row_registers_clickable_refresh() {
    let mut app = mounted_app(&ScreenConfig::default());
    settle(&mut app).await;

    let screen = render_to_string(&mut app, WIDTH, FULL_HEIGHT, Instant::now());
    assert!(screen.contains("21 °C"));
    assert_eq!(app.hit_areas.len(), 2);

    let rect = app
        .hit_areas
        .area_for(ClickAction::Refresh(SectionId(1)))
        .expect("alpha section refresh control");
    assert_eq!(rect.y, text_block(ALPHA).y);

    app.handle_click(rect.x + 1, rect.y);
    assert!(app.sections[1].is_loading());
    assert!(!app.sections[0].is_loading());
    assert_eq!(app.focus, 1);

    // A click beside the control does nothing.
    app.handle_click(rect.x.saturating_sub(3), rect.y);
    assert!(!app.sections[0].is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_short_terminal_scrolls() {
    let mut app = mounted_app(&ScreenConfig::default());
    settle(&mut app).await;

    let screen = render_to_string(&mut app, WIDTH, 12, Instant::now());
    assert!(app.max_scroll > 0);
    assert!(screen.contains("Weather (animated shimmer)"));
    assert!(app
        .hit_areas
        .area_for(ClickAction::Refresh(SectionId(1)))
        .is_none());

    app.scroll_by(i32::from(app.max_scroll));
    let screen = render_to_string(&mut app, WIDTH, 12, Instant::now());
    assert!(!screen.contains("Weather (animated shimmer)"));
    assert!(screen.contains("Weather (alpha shimmer)"));

    let rect = app
        .hit_areas
        .area_for(ClickAction::Refresh(SectionId(1)))
        .expect("alpha refresh control scrolled into view");
    assert!(rect.bottom() <= 12);
    assert!(app
        .hit_areas
        .area_for(ClickAction::Refresh(SectionId(0)))
        .is_none());

    app.handle_click(rect.x, rect.y);
    assert!(app.sections[1].is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_resize_clamps_scroll() {
    let mut app = mounted_app(&ScreenConfig::default());
    render_buffer(&mut app, WIDTH, 12, Instant::now());
    app.scroll_by(100);
    assert_eq!(app.scroll_offset, app.max_scroll);

    render_buffer(&mut app, WIDTH, FULL_HEIGHT, Instant::now());
    assert_eq!(app.max_scroll, 0);
    assert_eq!(app.scroll_offset, 0);
}

#[tokio::test(start_paused = true)]
async fn test_focused_card_border_uses_accent() {
    let mut app = mounted_app(&ScreenConfig::default());
    let gradient_card = section_layout(GRADIENT).card;
    let alpha_card = section_layout(ALPHA).card;
    let corner_fg = |buffer: &Buffer, card: Rect| {
        let cell = &buffer[(card.x, card.y)];
        assert_eq!(cell.symbol(), "╭");
        cell.fg
    };

    let buffer = render_buffer(&mut app, WIDTH, FULL_HEIGHT, Instant::now());
    assert_eq!(corner_fg(&buffer, gradient_card), Color::from(app.palette.accent));
    assert_eq!(corner_fg(&buffer, alpha_card), Color::from(app.palette.dim));

    app.focus_next();
    let buffer = render_buffer(&mut app, WIDTH, FULL_HEIGHT, Instant::now());
    assert_eq!(corner_fg(&buffer, gradient_card), Color::from(app.palette.dim));
    assert_eq!(corner_fg(&buffer, alpha_card), Color::from(app.palette.accent));
}

#[tokio::test(start_paused = true)]
async fn test_scrollbar_thumb_tracks_content() {
    let mut app = mounted_app(&ScreenConfig::default());
    let height = 12;
    assert!(content_height(2) > height);

    // Track of 10 rows between the arrows. A 12 row viewport over 19 rows of
    // content gives a 4 row thumb.
    let buffer = render_buffer(&mut app, WIDTH, height, Instant::now());
    assert_eq!(thumb_rows(&buffer), vec![1, 2, 3, 4]);

    app.scroll_by(i32::from(app.max_scroll));
    let buffer = render_buffer(&mut app, WIDTH, height, Instant::now());
    assert_eq!(thumb_rows(&buffer), vec![3, 4, 5, 6]);
}

#[tokio::test(start_paused = true)]
async fn test_tiny_terminal_does_not_panic() {
    let mut app = mounted_app(&ScreenConfig::default());
    for (width, height) in [(1, 1), (5, 3), (12, 2), (20, 40)] {
        render_buffer(&mut app, width, height, Instant::now());
    }
}
