//! Skeleton - shimmer loading placeholders in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod loading;
pub mod logging;
pub mod terminal;
pub mod ui;
