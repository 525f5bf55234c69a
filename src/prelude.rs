//! Prelude module for convenient imports.
//!
//! ```ignore
//! use segmented_counter::prelude::*;
//! ```

// Control
pub use crate::counter::{
    Segment, SegmentAppearance, SegmentStyle, SegmentedCounter, ValueChangedHandler,
    DEFAULT_SEGMENT_COUNT, MIN_SEGMENT_COUNT,
};

// Geometry
pub use crate::geometry::{Frame, Point, Size};

// Errors
pub use crate::error::{CounterError, CounterResult};

// Rendering
pub use crate::widgets::{local_point, SegmentedCounterWidget};
