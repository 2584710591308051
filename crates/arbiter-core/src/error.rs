//! Error types for the arbiter resource allocator.
//!
//! Every rejected operation is reported as a discriminated failure
//! carrying the offending consumer, resource class, and bound, so the
//! caller can render a precise diagnostic. None of these errors
//! indicate corrupted state: a rejected operation leaves the arbiter
//! exactly as it was before the call.

use std::error::Error;
use std::fmt;

use crate::id::ConsumerId;

/// Errors from a resource request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// The consumer index is outside `[0, consumer_count)`.
    UnknownConsumer {
        /// The out-of-range index.
        consumer: ConsumerId,
        /// Number of consumers the arbiter was built with.
        consumer_count: usize,
    },
    /// The request vector's width does not match the resource-class count.
    WidthMismatch {
        /// Expected width (resource-class count).
        expected: usize,
        /// Width of the submitted vector.
        actual: usize,
    },
    /// A requested amount exceeds the consumer's remaining need.
    ExceedsNeed {
        /// The requesting consumer.
        consumer: ConsumerId,
        /// Index of the offending resource class.
        resource: usize,
        /// The consumer's remaining need of that class.
        need: u32,
        /// The amount requested.
        requested: u32,
    },
    /// A requested amount exceeds the currently available units.
    ExceedsAvailable {
        /// Index of the offending resource class.
        resource: usize,
        /// Units of that class currently available.
        available: u32,
        /// The amount requested.
        requested: u32,
    },
    /// Granting the request would leave the system in an unsafe state.
    ///
    /// The tentative grant was fully reverted before this was returned.
    UnsafeState {
        /// The requesting consumer.
        consumer: ConsumerId,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConsumer {
                consumer,
                consumer_count,
            } => {
                write!(f, "unknown consumer {consumer} ({consumer_count} consumers)")
            }
            Self::WidthMismatch { expected, actual } => {
                write!(
                    f,
                    "request vector has {actual} entries, expected {expected}"
                )
            }
            Self::ExceedsNeed {
                consumer,
                resource,
                need,
                requested,
            } => {
                write!(
                    f,
                    "consumer {consumer} requested {requested} of resource {resource} but needs at most {need}"
                )
            }
            Self::ExceedsAvailable {
                resource,
                available,
                requested,
            } => {
                write!(
                    f,
                    "requested {requested} of resource {resource} but only {available} available"
                )
            }
            Self::UnsafeState { consumer } => {
                write!(
                    f,
                    "granting the request from consumer {consumer} would leave the system unsafe"
                )
            }
        }
    }
}

impl Error for RequestError {}

/// Errors from a resource release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseError {
    /// The consumer index is outside `[0, consumer_count)`.
    UnknownConsumer {
        /// The out-of-range index.
        consumer: ConsumerId,
        /// Number of consumers the arbiter was built with.
        consumer_count: usize,
    },
    /// The release vector's width does not match the resource-class count.
    WidthMismatch {
        /// Expected width (resource-class count).
        expected: usize,
        /// Width of the submitted vector.
        actual: usize,
    },
    /// A released amount exceeds the consumer's current allocation.
    ExceedsAllocation {
        /// The releasing consumer.
        consumer: ConsumerId,
        /// Index of the offending resource class.
        resource: usize,
        /// Units of that class the consumer currently holds.
        allocated: u32,
        /// The amount released.
        released: u32,
    },
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConsumer {
                consumer,
                consumer_count,
            } => {
                write!(f, "unknown consumer {consumer} ({consumer_count} consumers)")
            }
            Self::WidthMismatch { expected, actual } => {
                write!(
                    f,
                    "release vector has {actual} entries, expected {expected}"
                )
            }
            Self::ExceedsAllocation {
                consumer,
                resource,
                allocated,
                released,
            } => {
                write!(
                    f,
                    "consumer {consumer} released {released} of resource {resource} but holds only {allocated}"
                )
            }
        }
    }
}

impl Error for ReleaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_render_offending_values() {
        let err = RequestError::ExceedsNeed {
            consumer: ConsumerId(1),
            resource: 2,
            need: 3,
            requested: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("consumer 1"));
        assert!(msg.contains("resource 2"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn release_errors_render_offending_values() {
        let err = ReleaseError::ExceedsAllocation {
            consumer: ConsumerId(4),
            resource: 0,
            allocated: 1,
            released: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("consumer 4"));
        assert!(msg.contains("resource 0"));
    }
}
