//! Contract violations raised by `SegmentedCounter`.

use thiserror::Error;

/// A rejected update to a segmented counter.
///
/// Every variant is returned before the counter is mutated, so a failed
/// setter leaves the control exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CounterError {
    /// A configuration property was given an unusable value.
    #[error("invalid {property}: {reason}")]
    InvalidConfiguration {
        property: &'static str,
        reason: String,
    },

    /// The requested value lies outside `0..=segment_count`.
    #[error("value {value} is out of range for {segment_count} segments")]
    InvalidValue { value: usize, segment_count: usize },
}

impl CounterError {
    pub(crate) fn segment_count(count: usize, min: usize) -> Self {
        CounterError::InvalidConfiguration {
            property: "segment_count",
            reason: format!("must be at least {}, got {}", min, count),
        }
    }

    pub(crate) fn dimension(property: &'static str, value: f64) -> Self {
        CounterError::InvalidConfiguration {
            property,
            reason: format!("must be finite and non-negative, got {}", value),
        }
    }

    /// Short message suitable for a status line.
    pub fn user_message(&self) -> String {
        match self {
            CounterError::InvalidConfiguration { property, .. } => {
                format!("Rejected {} change", property.replace('_', " "))
            }
            CounterError::InvalidValue {
                value,
                segment_count,
            } => format!("{} is not between 0 and {}", value, segment_count),
        }
    }
}
