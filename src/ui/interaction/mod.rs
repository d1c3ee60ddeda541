//! Mouse interaction for the shimmer screen.
//!
//! The renderer registers the refresh controls it draws; clicks are resolved
//! against the areas from the most recent frame.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
