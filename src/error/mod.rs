//! Error types for the segmented counter.
//!
//! - **Counter errors**: contract violations rejected before any mutation
//!   (`CounterError`)
//! - **Config errors**: problems loading the host configuration file
//!   (`ConfigError`)
//! - **Result alias**: `CounterResult<T>` for fallible counter operations
//!
//! # Example
//!
//! ```
//! use segmented_counter::{Size, SegmentedCounter};
//! use segmented_counter::error::CounterError;
//!
//! let mut counter = SegmentedCounter::new(Size::new(40.0, 3.0)).unwrap();
//! let err = counter.set_current_value(9).unwrap_err();
//! assert!(matches!(err, CounterError::InvalidValue { value: 9, .. }));
//! assert_eq!(counter.current_value(), 0);
//! ```

mod config;
mod counter;
mod result;

pub use config::ConfigError;
pub use counter::CounterError;
pub use result::CounterResult;
