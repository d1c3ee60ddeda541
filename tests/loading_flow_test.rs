//! Loading lifecycle tests on a virtual clock.
//!
//! Each test runs on a paused tokio runtime, so sleeping jumps straight to the
//! next timer and the simulated fetches complete in exact virtual time.

mod common;

use std::time::Duration;

use common::{mounted_app, render_to_string, settle, FULL_HEIGHT, LOAD_DELAY};
use skeleton::app::{App, SectionId};
use skeleton::config::{ScreenConfig, SectionConfig};
use skeleton::loading::LoadingState;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_mount_starts_every_section_loading() {
    let app = mounted_app(&ScreenConfig::default());

    assert!(app.is_mounted());
    assert!(app.sections.iter().all(|s| s.is_loading()));
    assert!(app.is_animating());
}

#[tokio::test(start_paused = true)]
async fn test_nothing_loads_before_mount() {
    let app = App::new(&ScreenConfig::default());
    assert!(app.sections.iter().all(|s| !s.is_loading()));
}

#[tokio::test(start_paused = true)]
async fn test_no_completion_before_delay() {
    let mut app = mounted_app(&ScreenConfig::default());

    tokio::time::sleep(LOAD_DELAY - Duration::from_millis(1)).await;

    assert_eq!(app.process_pending_messages(), 0);
    assert!(app.sections.iter().all(|s| s.is_loading()));
}

#[tokio::test(start_paused = true)]
async fn test_completion_arrives_at_delay() {
    let start = Instant::now();
    let mut app = mounted_app(&ScreenConfig::default());

    assert!(app.process_next_message().await);

    assert!(start.elapsed() >= LOAD_DELAY);
    assert!(app.needs_redraw);
}

#[tokio::test(start_paused = true)]
async fn test_retrigger_while_loading_keeps_deadline() {
    let mut app = mounted_app(&ScreenConfig::default());
    let deadline = app.sections[0].simulator().deadline();
    assert!(deadline.is_some());

    tokio::time::sleep(Duration::from_millis(1200)).await;
    assert!(!app.refresh(SectionId(0)));
    assert!(!app.refresh(SectionId(0)));

    assert_eq!(app.sections[0].simulator().deadline(), deadline);

    // Only the original fetch completes, at the original deadline.
    settle(&mut app).await;
    assert!(deadline.is_some_and(|deadline| Instant::now() >= deadline));
    tokio::time::sleep(LOAD_DELAY * 2).await;
    assert_eq!(app.process_pending_messages(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_after_load_starts_new_cycle() {
    let mut app = mounted_app(&ScreenConfig::default());
    settle(&mut app).await;

    let refreshed_at = Instant::now();
    assert!(app.refresh(SectionId(0)));
    assert!(app.sections[0].is_loading());
    assert!(!app.sections[1].is_loading());
    assert_eq!(app.sections[0].simulator().deadline(), Some(refreshed_at + LOAD_DELAY));

    settle(&mut app).await;
    assert!(refreshed_at.elapsed() >= LOAD_DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_unknown_section_is_rejected() {
    let mut app = mounted_app(&ScreenConfig::default());
    settle(&mut app).await;
    assert!(!app.refresh(SectionId(9)));
}

#[tokio::test(start_paused = true)]
async fn test_sections_load_independently() {
    let config = ScreenConfig::default().with_section(
        1,
        SectionConfig::alpha().with_load_delay(Duration::from_millis(1000)),
    );
    let mut app = mounted_app(&config);
    let gradient_deadline = app.sections[0].simulator().deadline();

    assert!(app.process_next_message().await);
    assert!(app.sections[0].is_loading());
    assert!(!app.sections[1].is_loading());

    // Refreshing the fast section leaves the slow one untouched.
    assert!(app.refresh(SectionId(1)));
    assert_eq!(app.sections[0].simulator().deadline(), gradient_deadline);

    assert!(app.process_next_message().await);
    assert!(app.sections[0].is_loading());
    assert!(!app.sections[1].is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_unmounted_section_is_never_mutated() {
    let mut app = mounted_app(&ScreenConfig::default());
    tokio::time::sleep(Duration::from_millis(2000)).await;

    app.unmount_section(SectionId(0));
    let state = app.sections[0].loading_state();
    assert_eq!(state, LoadingState::Idle);

    tokio::time::sleep(LOAD_DELAY).await;
    // Only the still-mounted section reports back.
    assert_eq!(app.process_pending_messages(), 1);

    assert_eq!(app.sections[0].loading_state(), state);
    assert!(!app.sections[0].is_mounted());
    assert!(!app.refresh(SectionId(0)));
}

#[tokio::test(start_paused = true)]
async fn test_unmounting_screen_abandons_pending_loads() {
    let mut app = mounted_app(&ScreenConfig::default());
    tokio::time::sleep(Duration::from_millis(100)).await;

    app.unmount();
    app.needs_redraw = false;

    tokio::time::sleep(LOAD_DELAY * 2).await;
    assert_eq!(app.process_pending_messages(), 0);
    assert!(!app.needs_redraw);
    assert!(!app.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_refresh_one_section_end_to_end() {
    let mut app = mounted_app(&ScreenConfig::default());

    let screen = render_to_string(&mut app, 80, FULL_HEIGHT, Instant::now());
    assert!(screen.contains("Weather (animated shimmer)"));
    assert!(screen.contains("Weather (alpha shimmer)"));
    assert!(!screen.contains("Refresh"));
    assert!(!screen.contains("21 °C"));

    settle(&mut app).await;

    let screen = render_to_string(&mut app, 80, FULL_HEIGHT, Instant::now());
    assert_eq!(screen.matches("Refresh").count(), 2);
    assert_eq!(screen.matches("21 °C").count(), 2);

    assert!(app.refresh(SectionId(0)));
    let screen = render_to_string(&mut app, 80, FULL_HEIGHT, Instant::now());
    assert_eq!(screen.matches("Refresh").count(), 1);

    // The remaining content row belongs to the alpha section.
    let lines: Vec<&str> = screen.lines().collect();
    let alpha_header = lines
        .iter()
        .position(|line| line.contains("Weather (alpha shimmer)"))
        .unwrap();
    let refresh_line = lines.iter().position(|line| line.contains("Refresh")).unwrap();
    assert!(refresh_line > alpha_header);

    settle(&mut app).await;
    let screen = render_to_string(&mut app, 80, FULL_HEIGHT, Instant::now());
    assert_eq!(screen.matches("Refresh").count(), 2);
}
