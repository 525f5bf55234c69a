//! Visual styling pushed onto segments.
//!
//! Styling never moves a segment or changes which segments are active. The
//! only fill-related effect is re-tinting segments that are already filled
//! when the fill colour changes.

use ratatui::style::Color;

use super::segment::Segment;

/// Default border and fill colour.
pub const DEFAULT_SEGMENT_COLOR: Color = Color::Blue;

/// Default border width.
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Default corner radius.
pub const DEFAULT_CORNER_RADIUS: f64 = 1.0;

/// Border properties as applied to a single segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentAppearance {
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
}

impl Default for SegmentAppearance {
    fn default() -> Self {
        Self {
            border_color: DEFAULT_SEGMENT_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

/// The control-wide style configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
    /// Background used for active segments
    pub fill_color: Color,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            border_color: DEFAULT_SEGMENT_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            fill_color: DEFAULT_SEGMENT_COLOR,
        }
    }
}

impl SegmentStyle {
    /// The per-segment border appearance for this style.
    pub fn appearance(&self) -> SegmentAppearance {
        SegmentAppearance {
            border_color: self.border_color,
            border_width: self.border_width,
            corner_radius: self.corner_radius,
        }
    }
}

/// Apply `style` to every segment.
pub(crate) fn apply_style(segments: &mut [Segment], style: &SegmentStyle) {
    let appearance = style.appearance();
    for segment in segments.iter_mut() {
        segment.set_appearance(appearance);
        if segment.is_active() {
            segment.activate(style.fill_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::segment::build_segments;
    use crate::geometry::Frame;

    #[test]
    fn test_apply_style_updates_borders_only() {
        let mut segments = build_segments(3);
        segments[0].activate(Color::Blue);
        segments[1].set_frame(Frame::new(4.0, 0.0, 3.0, 3.0));

        let style = SegmentStyle {
            border_color: Color::Red,
            border_width: 2.0,
            corner_radius: 0.0,
            fill_color: Color::Blue,
        };
        apply_style(&mut segments, &style);

        for segment in &segments {
            assert_eq!(segment.appearance().border_color, Color::Red);
            assert_eq!(segment.appearance().border_width, 2.0);
            assert_eq!(segment.appearance().corner_radius, 0.0);
        }
        assert!(segments[0].is_active());
        assert!(!segments[1].is_active());
        assert_eq!(segments[1].frame(), Frame::new(4.0, 0.0, 3.0, 3.0));
    }

    #[test]
    fn test_apply_style_retints_active_fill() {
        let mut segments = build_segments(2);
        segments[0].activate(Color::Blue);

        let style = SegmentStyle {
            fill_color: Color::Green,
            ..SegmentStyle::default()
        };
        apply_style(&mut segments, &style);

        assert_eq!(segments[0].fill(), Some(Color::Green));
        assert_eq!(segments[1].fill(), None);
    }
}
