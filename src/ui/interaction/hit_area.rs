//! Hit area registry mapping screen rectangles to counters.

use ratatui::layout::Rect;

use crate::geometry::Point;
use crate::widgets::local_point;

/// A counter's on-screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    /// The cells occupied by the counter
    pub rect: Rect,
    /// Index of the counter in the host's list
    pub slot: usize,
}

impl HitArea {
    pub fn new(rect: Rect, slot: usize) -> Self {
        Self { rect, slot }
    }

    /// Check if a cell is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Result of a successful hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterHit {
    pub slot: usize,
    /// The pointer location in the counter's local coordinates
    pub point: Point,
}

/// Registry for managing counter hit areas.
///
/// Areas are registered during rendering and cleared at the start of each
/// render cycle.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Clear all registered areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a counter area.
    ///
    /// Areas registered later take priority over earlier ones where they
    /// overlap (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, slot: usize) {
        self.areas.push(HitArea::new(rect, slot));
    }

    /// Find the topmost counter under the given cell.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<CounterHit> {
        self.areas
            .iter()
            .rev()
            .filter(|area| area.contains(x, y))
            .find_map(|area| {
                local_point(area.rect, x, y).map(|point| CounterHit {
                    slot: area.slot,
                    point,
                })
            })
    }

    /// Area registered for `slot`, if any.
    pub fn area_for(&self, slot: usize) -> Option<&HitArea> {
        self.areas.iter().rev().find(|area| area.slot == slot)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
