//! Common test utilities for integration tests.

#![allow(dead_code)]

use segmented_counter::{Segment, SegmentedCounter, Size};

/// A counter sized like the sample screen's controls (31 high).
pub fn sample_counter(segment_count: usize) -> SegmentedCounter {
    SegmentedCounter::with_segment_count(Size::new(205.0, 31.0), segment_count)
        .expect("valid sample counter")
}

/// Ids of the active segments in ascending order.
pub fn active_ids(counter: &SegmentedCounter) -> Vec<usize> {
    counter
        .segments()
        .iter()
        .filter(|s| s.is_active())
        .map(Segment::id)
        .collect()
}

/// Collect the text of one buffer row.
pub fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
    (buffer.area.x..buffer.area.right())
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}
