use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::counter::{Segment, SegmentAppearance, SegmentedCounter};
use crate::geometry::{Frame, Point};

/// Border widths at or above this render with thick line glyphs.
const THICK_BORDER_WIDTH: f64 = 2.0;

/// Renders a `SegmentedCounter` into a buffer area.
///
/// The counter's bounds are expected to match the area's size; the host
/// calls `SegmentedCounter::set_bounds` when its layout changes. A segment
/// covers the cells whose centre lies inside its frame and anything outside
/// the area is clipped.
///
/// Features:
/// - Border per segment, rounded when the corner radius is positive
/// - Active segments painted with the fill colour as background
#[derive(Debug, Clone, Copy)]
pub struct SegmentedCounterWidget<'a> {
    counter: &'a SegmentedCounter,
}

impl<'a> SegmentedCounterWidget<'a> {
    pub fn new(counter: &'a SegmentedCounter) -> Self {
        Self { counter }
    }
}

impl Widget for SegmentedCounterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for segment in self.counter.segments() {
            if let Some(cells) = segment_cells(area, segment.frame()) {
                segment_block(segment).render(cells, buf);
            }
        }
    }
}

/// Cell rectangle covered by `frame` when the control occupies `area`.
///
/// Cell `c` is covered when its centre `c + 0.5` lies in the frame's
/// half-open span, the same test [`local_point`] hit testing applies.
/// Returns `None` for frames that cover no cell or fall outside the area.
pub fn segment_cells(area: Rect, frame: Frame) -> Option<Rect> {
    let max_w = f64::from(area.width);
    let max_h = f64::from(area.height);

    let left = first_cell(frame.x).clamp(0.0, max_w);
    let right = first_cell(frame.max_x()).clamp(0.0, max_w);
    let top = first_cell(frame.y).clamp(0.0, max_h);
    let bottom = first_cell(frame.max_y()).clamp(0.0, max_h);

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        area.x + left as u16,
        area.y + top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// First cell whose centre is at or past `edge`.
fn first_cell(edge: f64) -> f64 {
    (edge - 0.5).ceil()
}

/// Convert a terminal cell into the control's local coordinate space.
///
/// The point is the centre of the cell so it agrees with the cells drawn by
/// [`segment_cells`]. Returns `None` when the cell is outside `area`.
pub fn local_point(area: Rect, column: u16, row: u16) -> Option<Point> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    Some(Point::new(
        f64::from(column - area.x) + 0.5,
        f64::from(row - area.y) + 0.5,
    ))
}

fn segment_block(segment: &Segment) -> Block<'static> {
    let appearance = segment.appearance();
    let mut block = Block::default();

    if appearance.border_width > 0.0 {
        block = block
            .borders(Borders::ALL)
            .border_type(border_type(&appearance))
            .border_style(Style::default().fg(appearance.border_color));
    }

    if let Some(fill) = segment.fill() {
        block = block.style(Style::default().bg(fill));
    }

    block
}

fn border_type(appearance: &SegmentAppearance) -> BorderType {
    if appearance.border_width >= THICK_BORDER_WIDTH {
        BorderType::Thick
    } else if appearance.corner_radius > 0.0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}
