//! Startup configuration and structural validation.
//!
//! [`ArbiterConfig`] is the builder-input for constructing a [`Ledger`](crate::Ledger).
//! [`validate()`](ArbiterConfig::validate) checks the dimensional
//! invariants once at startup; after it passes, the engine never
//! re-checks matrix shapes on the hot path.

use std::error::Error;
use std::fmt;

use arbiter_core::ResourceVector;

// ── ArbiterConfig ──────────────────────────────────────────────────

/// Initial state for an arbiter: the free pool and the per-consumer
/// maximum-demand matrix.
///
/// The number of resource classes is the width of `available`; the
/// number of consumers is the number of rows in `maximum`. Both are
/// fixed for the lifetime of the ledger built from this config.
///
/// # Examples
///
/// ```
/// use arbiter_core::ResourceVector;
/// use arbiter_engine::ArbiterConfig;
///
/// let config = ArbiterConfig {
///     available: ResourceVector::from_slice(&[10, 5, 7]),
///     maximum: vec![
///         ResourceVector::from_slice(&[7, 5, 3]),
///         ResourceVector::from_slice(&[3, 2, 2]),
///     ],
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArbiterConfig {
    /// Units of each resource class free at startup.
    pub available: ResourceVector,
    /// One row per consumer: the most of each class it may ever hold.
    pub maximum: Vec<ResourceVector>,
}

impl ArbiterConfig {
    /// Number of consumers this config describes.
    pub fn consumer_count(&self) -> usize {
        self.maximum.len()
    }

    /// Number of resource classes this config describes.
    pub fn resource_count(&self) -> usize {
        self.available.width()
    }

    /// Check structural invariants: at least one consumer, at least one
    /// resource class, every maximum row as wide as `available`, and
    /// every maximum row satisfiable from the initial pool.
    ///
    /// At startup nothing is allocated, so the initial pool is the total
    /// of every class; a consumer declaring more than that total could
    /// never obtain its full need, and the starting state would already
    /// be unsafe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maximum.is_empty() {
            return Err(ConfigError::NoConsumers);
        }
        if self.available.width() == 0 {
            return Err(ConfigError::NoResources);
        }
        let expected = self.available.width();
        for (consumer, row) in self.maximum.iter().enumerate() {
            if row.width() != expected {
                return Err(ConfigError::RowWidthMismatch {
                    consumer,
                    expected,
                    actual: row.width(),
                });
            }
        }
        for (consumer, row) in self.maximum.iter().enumerate() {
            if let Some(resource) = row.first_exceeding(&self.available) {
                return Err(ConfigError::MaximumExceedsTotal {
                    consumer,
                    resource,
                    maximum: row[resource],
                    total: self.available[resource],
                });
            }
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors from [`ArbiterConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The maximum matrix has no rows.
    NoConsumers,
    /// The available vector is empty.
    NoResources,
    /// A maximum row's width differs from the available vector's.
    RowWidthMismatch {
        /// Row index of the offending consumer.
        consumer: usize,
        /// Width of `available`.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// A consumer's declared maximum exceeds the total units of a class.
    MaximumExceedsTotal {
        /// Row index of the offending consumer.
        consumer: usize,
        /// Index of the offending resource class.
        resource: usize,
        /// The declared maximum of that class.
        maximum: u32,
        /// Total units of that class (the initial pool).
        total: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConsumers => write!(f, "config describes no consumers"),
            Self::NoResources => write!(f, "config describes no resource classes"),
            Self::RowWidthMismatch {
                consumer,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "maximum row for consumer {consumer} has {actual} entries, expected {expected}"
                )
            }
            Self::MaximumExceedsTotal {
                consumer,
                resource,
                maximum,
                total,
            } => {
                write!(
                    f,
                    "consumer {consumer} declares a maximum of {maximum} for resource {resource} but only {total} exist"
                )
            }
        }
    }
}

impl Error for ConfigError {}
