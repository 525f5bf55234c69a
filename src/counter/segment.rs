//! A single selectable unit of the counter.

use ratatui::style::Color;

use super::style::SegmentAppearance;
use crate::geometry::Frame;

/// One segment, owned by its `SegmentedCounter`.
///
/// Segments carry no reference back to the control; layout, style and fill
/// values are handed to them by the owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: usize,
    active: bool,
    frame: Frame,
    appearance: SegmentAppearance,
    fill: Option<Color>,
}

impl Segment {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            active: false,
            frame: Frame::default(),
            appearance: SegmentAppearance::default(),
            fill: None,
        }
    }

    /// 1-based position of this segment, stable for its lifetime.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn appearance(&self) -> SegmentAppearance {
        self.appearance
    }

    /// Background colour, present only while the segment is active.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub(crate) fn activate(&mut self, fill: Color) {
        self.active = true;
        self.fill = Some(fill);
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.fill = None;
    }

    pub(crate) fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    pub(crate) fn set_appearance(&mut self, appearance: SegmentAppearance) {
        self.appearance = appearance;
    }
}

/// Create `count` inactive segments with ids `1..=count`.
pub(crate) fn build_segments(count: usize) -> Vec<Segment> {
    (1..=count).map(Segment::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_segments_assigns_ids() {
        let segments = build_segments(4);
        let ids: Vec<usize> = segments.iter().map(Segment::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(segments.iter().all(|s| !s.is_active() && s.fill().is_none()));
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut segment = Segment::new(1);
        segment.activate(Color::Red);
        assert!(segment.is_active());
        assert_eq!(segment.fill(), Some(Color::Red));

        segment.deactivate();
        assert!(!segment.is_active());
        assert_eq!(segment.fill(), None);
    }
}
