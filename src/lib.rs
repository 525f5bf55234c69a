//! Segmented Counter - a touch-driven multi-segment counter widget
//!
//! Tapping a segment fills it and every segment before it; tapping the first
//! segment again while it is the only one filled clears the control. The
//! control computes segment geometry from its bounds and renders through
//! `ratatui`.
//!
//! ```
//! use segmented_counter::{SegmentedCounter, Size};
//!
//! let mut counter = SegmentedCounter::with_segment_count(Size::new(70.0, 3.0), 7).unwrap();
//! counter.set_current_value(2).unwrap();
//! assert_eq!(counter.active_states(), vec![true, true, false, false, false, false, false]);
//! ```

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod prelude;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use counter::{Segment, SegmentStyle, SegmentedCounter};
pub use geometry::{Frame, Point, Size};
