//! Result type alias for counter operations.

use super::counter::CounterError;

/// Type alias for Results using `CounterError`.
///
/// # Example
///
/// ```ignore
/// use segmented_counter::error::CounterResult;
///
/// fn reset(counter: &mut SegmentedCounter) -> CounterResult<()> {
///     counter.set_current_value(0)
/// }
/// ```
pub type CounterResult<T> = Result<T, CounterError>;
