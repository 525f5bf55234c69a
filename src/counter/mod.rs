//! The segmented counter control.
//!
//! A row of `segment_count` segments. Touching segment `k` fills segments
//! `1..=k`; touching the first segment again while it is the only filled
//! one clears the control. The host supplies bounds and delivers
//! pointer-down events in local coordinates, then renders the segments
//! (see [`crate::widgets::SegmentedCounterWidget`]).
//!
//! # Example
//!
//! ```
//! use segmented_counter::{Point, SegmentedCounter, Size};
//!
//! let mut counter = SegmentedCounter::new(Size::new(205.0, 3.0)).unwrap();
//! counter.set_segment_padding(5.0).unwrap();
//!
//! // Segment 3 starts at x = 84
//! assert_eq!(counter.handle_pointer_down(Point::new(90.0, 1.0)), Some(3));
//! assert_eq!(counter.current_value(), 3);
//! ```

pub mod fill;
pub mod layout;
mod segment;
pub mod style;

pub use segment::Segment;
pub use style::{SegmentAppearance, SegmentStyle};

use std::fmt;

use ratatui::style::Color;

use crate::error::{CounterError, CounterResult};
use crate::geometry::{Point, Size};

/// Number of segments when none is given.
pub const DEFAULT_SEGMENT_COUNT: usize = 5;

/// Fewest segments a counter may have.
pub const MIN_SEGMENT_COUNT: usize = 2;

/// Callback invoked with the new value after it changes.
pub type ValueChangedHandler = Box<dyn FnMut(usize)>;

/// A touch-driven multi-segment counter.
pub struct SegmentedCounter {
    bounds: Size,
    segment_count: usize,
    segment_padding: f64,
    style: SegmentStyle,
    current_value: usize,
    segments: Vec<Segment>,
    on_value_changed: Option<ValueChangedHandler>,
}

impl fmt::Debug for SegmentedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedCounter")
            .field("bounds", &self.bounds)
            .field("segment_count", &self.segment_count)
            .field("segment_padding", &self.segment_padding)
            .field("style", &self.style)
            .field("current_value", &self.current_value)
            .field("segments", &self.segments)
            .field("on_value_changed", &self.on_value_changed.is_some())
            .finish()
    }
}

impl SegmentedCounter {
    /// Create a counter with [`DEFAULT_SEGMENT_COUNT`] segments.
    pub fn new(bounds: Size) -> CounterResult<Self> {
        Self::with_segment_count(bounds, DEFAULT_SEGMENT_COUNT)
    }

    /// Create a counter with `segment_count` segments laid out in `bounds`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `segment_count` is below
    /// [`MIN_SEGMENT_COUNT`] or the bounds are not finite and non-negative.
    pub fn with_segment_count(bounds: Size, segment_count: usize) -> CounterResult<Self> {
        validate_segment_count(segment_count)?;
        validate_bounds(bounds)?;

        let mut counter = Self {
            bounds,
            segment_count,
            segment_padding: layout::DEFAULT_SEGMENT_PADDING,
            style: SegmentStyle::default(),
            current_value: 0,
            segments: segment::build_segments(segment_count),
            on_value_changed: None,
        };
        counter.update_layout();
        Ok(counter)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn segment_padding(&self) -> f64 {
        self.segment_padding
    }

    pub fn style(&self) -> SegmentStyle {
        self.style
    }

    pub fn segment_border_color(&self) -> Color {
        self.style.border_color
    }

    pub fn segment_fill_color(&self) -> Color {
        self.style.fill_color
    }

    pub fn segment_border_width(&self) -> f64 {
        self.style.border_width
    }

    pub fn segment_corner_radius(&self) -> f64 {
        self.style.corner_radius
    }

    /// Highest filled segment id, or 0 when nothing is filled.
    pub fn current_value(&self) -> usize {
        self.current_value
    }

    /// Segments in ascending id order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Active flag of every segment in ascending id order.
    pub fn active_states(&self) -> Vec<bool> {
        self.segments.iter().map(Segment::is_active).collect()
    }

    /// First segment (by id) whose frame contains `point`.
    pub fn segment_at(&self, point: Point) -> Option<&Segment> {
        self.segments.iter().find(|s| s.frame().contains(point))
    }

    // ========================================================================
    // Geometry setters (full layout pass)
    // ========================================================================

    /// Rebuild the segments for a new count.
    ///
    /// If the current value no longer fits it is lowered to the new count.
    pub fn set_segment_count(&mut self, segment_count: usize) -> CounterResult<()> {
        validate_segment_count(segment_count).inspect_err(log_rejected)?;
        if segment_count == self.segment_count {
            return Ok(());
        }

        let previous = self.current_value;
        self.segment_count = segment_count;
        self.segments = segment::build_segments(segment_count);
        self.current_value = previous.min(segment_count);
        self.update_layout();

        if self.current_value != previous {
            self.notify_value_changed();
        }
        Ok(())
    }

    pub fn set_segment_padding(&mut self, padding: f64) -> CounterResult<()> {
        validate_dimension("segment_padding", padding).inspect_err(log_rejected)?;
        if padding != self.segment_padding {
            self.segment_padding = padding;
            self.update_layout();
        }
        Ok(())
    }

    /// Resize the control. Called by the host whenever its area changes.
    pub fn set_bounds(&mut self, bounds: Size) -> CounterResult<()> {
        validate_bounds(bounds).inspect_err(log_rejected)?;
        if bounds != self.bounds {
            self.bounds = bounds;
            self.update_layout();
        }
        Ok(())
    }

    // ========================================================================
    // Style setters (style-only refresh)
    // ========================================================================

    pub fn set_segment_border_color(&mut self, color: Color) {
        self.style.border_color = color;
        self.refresh_style();
    }

    pub fn set_segment_fill_color(&mut self, color: Color) {
        self.style.fill_color = color;
        self.refresh_style();
    }

    pub fn set_segment_border_width(&mut self, width: f64) -> CounterResult<()> {
        validate_dimension("segment_border_width", width).inspect_err(log_rejected)?;
        self.style.border_width = width;
        self.refresh_style();
        Ok(())
    }

    pub fn set_segment_corner_radius(&mut self, radius: f64) -> CounterResult<()> {
        validate_dimension("segment_corner_radius", radius).inspect_err(log_rejected)?;
        self.style.corner_radius = radius;
        self.refresh_style();
        Ok(())
    }

    // ========================================================================
    // Value and interaction
    // ========================================================================

    /// Set the value programmatically.
    ///
    /// Fills segments `1..=value`. Unlike a touch, setting 1 never toggles
    /// the control back to 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `value > segment_count`.
    pub fn set_current_value(&mut self, value: usize) -> CounterResult<()> {
        if value > self.segment_count {
            let err = CounterError::InvalidValue {
                value,
                segment_count: self.segment_count,
            };
            log_rejected(&err);
            return Err(err);
        }
        self.apply_value(value);
        Ok(())
    }

    /// Apply a touch on segment `touched` (1-based).
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `touched` is not in `1..=segment_count`.
    pub fn fill_segments(&mut self, touched: usize) -> CounterResult<()> {
        if touched == 0 || touched > self.segment_count {
            return Err(CounterError::InvalidValue {
                value: touched,
                segment_count: self.segment_count,
            });
        }
        self.touch(touched);
        Ok(())
    }

    /// Hit-test `point` and apply the fill algorithm to the touched segment.
    ///
    /// Returns the id of the touched segment, or `None` when the point misses
    /// every segment (nothing changes). When frames overlap the lowest id
    /// wins.
    pub fn handle_pointer_down(&mut self, point: Point) -> Option<usize> {
        let touched = self.segment_at(point).map(Segment::id)?;
        self.touch(touched);
        Some(touched)
    }

    /// Register the value-changed callback, replacing any previous one.
    pub fn on_value_changed<F>(&mut self, handler: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.on_value_changed = Some(Box::new(handler));
    }

    /// Remove the value-changed callback.
    pub fn clear_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    // ========================================================================
    // Internal recompute steps
    // ========================================================================

    fn touch(&mut self, touched: usize) {
        let value = fill::resolve_touch(&self.active_states(), touched);
        tracing::debug!(touched, value, "segment touched");
        self.apply_value(value);
    }

    fn apply_value(&mut self, value: usize) {
        let previous = self.current_value;
        self.current_value = value;
        fill::fill_segments_to(&mut self.segments, value, self.style.fill_color);

        if previous != value {
            self.notify_value_changed();
        }
    }

    fn notify_value_changed(&mut self) {
        tracing::info!(
            value = self.current_value,
            segment_count = self.segment_count,
            "counter value changed"
        );
        let value = self.current_value;
        if let Some(handler) = self.on_value_changed.as_mut() {
            handler(value);
        }
    }

    fn update_layout(&mut self) {
        layout::layout_segments(&mut self.segments, self.bounds, self.segment_padding);
        style::apply_style(&mut self.segments, &self.style);
        // Re-derive fill from the value; a layout pass never toggles.
        fill::fill_segments_to(&mut self.segments, self.current_value, self.style.fill_color);
        tracing::debug!(
            width = self.bounds.width,
            height = self.bounds.height,
            segment_count = self.segment_count,
            padding = self.segment_padding,
            "segments laid out"
        );
    }

    fn refresh_style(&mut self) {
        style::apply_style(&mut self.segments, &self.style);
    }
}

fn validate_segment_count(segment_count: usize) -> CounterResult<()> {
    if segment_count < MIN_SEGMENT_COUNT {
        return Err(CounterError::segment_count(segment_count, MIN_SEGMENT_COUNT));
    }
    Ok(())
}

fn validate_dimension(property: &'static str, value: f64) -> CounterResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CounterError::dimension(property, value));
    }
    Ok(())
}

fn validate_bounds(bounds: Size) -> CounterResult<()> {
    validate_dimension("bounds.width", bounds.width)?;
    validate_dimension("bounds.height", bounds.height)
}

fn log_rejected(err: &CounterError) {
    tracing::warn!(error = %err, "counter update rejected");
}
