//! Hit area system for mouse interactions.
//!
//! Components register clickable regions while rendering, and the event loop
//! asks the registry which action a click lands on.

use ratatui::layout::Rect;

use crate::app::SectionId;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Press a section's refresh control
    Refresh(SectionId),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas produced by the most recent render.
///
/// Cleared at the start of each render. Later registrations win where areas
/// overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area. Empty rects are ignored.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if !rect.is_empty() {
            self.areas.push(HitArea::new(rect, action));
        }
    }

    /// The action for the topmost area containing the point, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// The area registered for `action`, if it is on screen.
    pub fn area_for(&self, action: ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
