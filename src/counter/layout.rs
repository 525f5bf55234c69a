//! Layout engine: segment rectangles from bounds, count and padding.
//!
//! Padding is only applied between segments, never before the first or
//! after the last, so `N` segments share `N - 1` gaps. Every segment spans
//! the full control height.

use super::segment::Segment;
use crate::geometry::{Frame, Size};

/// Default gap between adjacent segments, in cells.
pub const DEFAULT_SEGMENT_PADDING: f64 = 1.0;

/// Width shared by every segment.
///
/// Clamped at zero when the padding leaves no room for the segments.
pub fn segment_width(bounds_width: f64, segment_count: usize, padding: f64) -> f64 {
    if segment_count == 0 {
        return 0.0;
    }
    let gaps = padding * (segment_count - 1) as f64;
    ((bounds_width - gaps) / segment_count as f64).max(0.0)
}

/// Frames for `segment_count` segments laid out left to right.
pub fn segment_frames(bounds: Size, segment_count: usize, padding: f64) -> Vec<Frame> {
    let width = segment_width(bounds.width, segment_count, padding);
    (0..segment_count)
        .map(|index| Frame::new((width + padding) * index as f64, 0.0, width, bounds.height))
        .collect()
}

/// Reposition every segment for the given bounds and padding.
pub(crate) fn layout_segments(segments: &mut [Segment], bounds: Size, padding: f64) {
    let frames = segment_frames(bounds, segments.len(), padding);
    for (segment, frame) in segments.iter_mut().zip(frames) {
        segment.set_frame(frame);
    }
}
