//! Plain geometry types in the control's local coordinate space.
//!
//! Coordinates are `f64` so the layout formula stays exact for fractional
//! segment widths. Renderers decide how to snap them onto cells.

use serde::{Deserialize, Serialize};

/// A location in the control's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of the control, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The zero-sized bounds a control has before the host lays it out.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// A segment rectangle relative to the control's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is within this frame.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive. An empty frame contains nothing.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.max_x()
            && point.y >= self.y
            && point.y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_contains_edges() {
        let frame = Frame::new(10.0, 0.0, 20.0, 3.0);

        assert!(frame.contains(Point::new(10.0, 0.0))); // Top-left corner
        assert!(frame.contains(Point::new(29.5, 2.9)));
        assert!(!frame.contains(Point::new(30.0, 1.0))); // Right edge is exclusive
        assert!(!frame.contains(Point::new(9.9, 1.0)));
        assert!(!frame.contains(Point::new(15.0, 3.0))); // Bottom edge is exclusive
        assert!(!frame.contains(Point::new(15.0, -0.1)));
    }

    #[test]
    fn test_empty_frame_contains_nothing() {
        let frame = Frame::new(5.0, 0.0, 0.0, 3.0);
        assert!(frame.is_empty());
        assert!(!frame.contains(Point::new(5.0, 1.0)));

        let flat = Frame::new(0.0, 0.0, 10.0, 0.0);
        assert!(!flat.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_max_edges() {
        let frame = Frame::new(84.0, 0.0, 37.0, 31.0);
        assert_eq!(frame.max_x(), 121.0);
        assert_eq!(frame.max_y(), 31.0);
    }
}
