pub mod segmented_counter;

pub use segmented_counter::{local_point, segment_cells, SegmentedCounterWidget};
