//! The allocation ledger: sole owner and mutator of the shared state.
//!
//! [`Ledger`] holds `available` plus the per-consumer `maximum`,
//! `allocation`, and `need` matrices, with `need = maximum - allocation`
//! maintained component-wise at all times outside an in-flight
//! operation. A request either fully commits or leaves the state
//! bit-identical to its pre-call value; a release never needs a safety
//! check because returning resources cannot make a safe state unsafe.
//!
//! Every precondition is checked before the first mutation, so the only
//! revert path is the unsafe-after-grant one, which re-applies the
//! exact inverse of the tentative vector operations.

use arbiter_core::{ConsumerId, ReleaseError, RequestError, ResourceVector};

use crate::config::{ArbiterConfig, ConfigError};
use crate::safety::{is_safe, safe_sequence};

// ── StateSnapshot ──────────────────────────────────────────────────

/// A read-only copy of the full ledger state, for display and testing.
///
/// Taking a snapshot never mutates the ledger; two snapshots taken with
/// no intervening successful operation compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Units of each class not currently allocated to any consumer.
    pub available: ResourceVector,
    /// Per-consumer declared maximum demand. Immutable after startup.
    pub maximum: Vec<ResourceVector>,
    /// Per-consumer units currently held.
    pub allocation: Vec<ResourceVector>,
    /// Per-consumer remaining need (`maximum - allocation`).
    pub need: Vec<ResourceVector>,
}

// ── Ledger ─────────────────────────────────────────────────────────

/// Grants and reclaims resource units while keeping the system in a
/// safe state.
///
/// Built once from a validated [`ArbiterConfig`]; dimensions never
/// change afterwards. All mutation goes through [`request`](Ledger::request)
/// and [`release`](Ledger::release).
///
/// # Examples
///
/// ```
/// use arbiter_core::{ConsumerId, ResourceVector};
/// use arbiter_engine::{ArbiterConfig, Ledger};
///
/// let mut ledger = Ledger::new(ArbiterConfig {
///     available: ResourceVector::from_slice(&[3, 3]),
///     maximum: vec![
///         ResourceVector::from_slice(&[2, 2]),
///         ResourceVector::from_slice(&[1, 3]),
///     ],
/// })
/// .unwrap();
///
/// let grant = ResourceVector::from_slice(&[1, 1]);
/// ledger.request(ConsumerId(0), &grant).unwrap();
/// assert_eq!(ledger.snapshot().available, ResourceVector::from_slice(&[2, 2]));
///
/// ledger.release(ConsumerId(0), &grant).unwrap();
/// assert_eq!(ledger.snapshot().available, ResourceVector::from_slice(&[3, 3]));
/// ```
#[derive(Clone, Debug)]
pub struct Ledger {
    available: ResourceVector,
    maximum: Vec<ResourceVector>,
    allocation: Vec<ResourceVector>,
    need: Vec<ResourceVector>,
}

impl Ledger {
    /// Build a ledger from a validated config.
    ///
    /// Allocation starts at zero for every consumer, so `need` starts
    /// equal to `maximum`. Validation rejects any maximum row the
    /// initial pool cannot cover, and with nothing allocated there is
    /// nothing to reclaim, so the accepted initial state is safe: every
    /// consumer's full need already fits the pool.
    pub fn new(config: ArbiterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let zero = ResourceVector::zeroed(config.resource_count());
        let allocation = vec![zero; config.consumer_count()];
        let need = config.maximum.clone();
        Ok(Self {
            available: config.available,
            maximum: config.maximum,
            allocation,
            need,
        })
    }

    /// Number of consumers.
    pub fn consumer_count(&self) -> usize {
        self.maximum.len()
    }

    /// Number of resource classes.
    pub fn resource_count(&self) -> usize {
        self.available.width()
    }

    /// Request `amounts` units for `consumer`.
    ///
    /// Preconditions, checked in order before any mutation: the
    /// consumer exists, the vector width matches, every component is
    /// within the consumer's remaining need, and every component is
    /// within the free pool. A request that passes all preconditions is
    /// tentatively applied and confirmed by the safety check; if the
    /// post-grant state is unsafe the grant is reverted exactly and
    /// [`RequestError::UnsafeState`] is returned.
    ///
    /// On any error the ledger is bit-identical to its pre-call state.
    pub fn request(
        &mut self,
        consumer: ConsumerId,
        amounts: &ResourceVector,
    ) -> Result<(), RequestError> {
        let row = consumer.0;
        if row >= self.consumer_count() {
            return Err(RequestError::UnknownConsumer {
                consumer,
                consumer_count: self.consumer_count(),
            });
        }
        if amounts.width() != self.resource_count() {
            return Err(RequestError::WidthMismatch {
                expected: self.resource_count(),
                actual: amounts.width(),
            });
        }
        if let Some(resource) = amounts.first_exceeding(&self.need[row]) {
            return Err(RequestError::ExceedsNeed {
                consumer,
                resource,
                need: self.need[row][resource],
                requested: amounts[resource],
            });
        }
        if let Some(resource) = amounts.first_exceeding(&self.available) {
            return Err(RequestError::ExceedsAvailable {
                resource,
                available: self.available[resource],
                requested: amounts[resource],
            });
        }

        // Tentative grant.
        self.available -= amounts;
        self.allocation[row] += amounts;
        self.need[row] -= amounts;

        if is_safe(&self.available, &self.allocation, &self.need) {
            return Ok(());
        }

        // Exact inverse of the tentative grant.
        self.available += amounts;
        self.allocation[row] -= amounts;
        self.need[row] += amounts;
        Err(RequestError::UnsafeState { consumer })
    }

    /// Return `amounts` units from `consumer` to the free pool.
    ///
    /// Preconditions, checked before any mutation: the consumer exists,
    /// the vector width matches, and every component is within the
    /// consumer's current allocation. Once they pass, the release
    /// always succeeds; returning resources cannot make the state
    /// unsafe, so no safety check runs.
    pub fn release(
        &mut self,
        consumer: ConsumerId,
        amounts: &ResourceVector,
    ) -> Result<(), ReleaseError> {
        let row = consumer.0;
        if row >= self.consumer_count() {
            return Err(ReleaseError::UnknownConsumer {
                consumer,
                consumer_count: self.consumer_count(),
            });
        }
        if amounts.width() != self.resource_count() {
            return Err(ReleaseError::WidthMismatch {
                expected: self.resource_count(),
                actual: amounts.width(),
            });
        }
        if let Some(resource) = amounts.first_exceeding(&self.allocation[row]) {
            return Err(ReleaseError::ExceedsAllocation {
                consumer,
                resource,
                allocated: self.allocation[row][resource],
                released: amounts[resource],
            });
        }

        self.allocation[row] -= amounts;
        self.available += amounts;
        self.need[row] += amounts;
        Ok(())
    }

    /// Copy the full state for display or inspection.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            available: self.available.clone(),
            maximum: self.maximum.clone(),
            allocation: self.allocation.clone(),
            need: self.need.clone(),
        }
    }

    /// Run the safety check on the current state and return the
    /// completion order found, if any.
    ///
    /// Always `Some` after a successful operation; exposed for
    /// inspection and testing.
    pub fn safe_order(&self) -> Option<Vec<ConsumerId>> {
        safe_sequence(&self.available, &self.allocation, &self.need)
    }
}
