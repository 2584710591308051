//! Integration tests: the reference 5-consumer / 4-class state.
//!
//! Builds the textbook state by requesting each consumer's working set
//! from a full pool, then exercises the grant, rejection, rollback, and
//! release paths against known-good expected values.

use arbiter_core::{ConsumerId, ReleaseError, RequestError, ResourceVector};
use arbiter_engine::{ArbiterConfig, Ledger};

fn rv(counts: &[u32]) -> ResourceVector {
    ResourceVector::from_slice(counts)
}

/// Ledger in the reference state: `available = [1, 5, 2, 0]` with all
/// five consumers holding part of their declared maximum.
fn reference_ledger() -> Ledger {
    let mut ledger = Ledger::new(ArbiterConfig {
        available: rv(&[4, 12, 8, 6]),
        maximum: vec![
            rv(&[3, 2, 1, 1]),
            rv(&[2, 4, 3, 0]),
            rv(&[1, 3, 5, 2]),
            rv(&[2, 2, 2, 2]),
            rv(&[1, 1, 2, 3]),
        ],
    })
    .unwrap();

    let working_sets = [
        rv(&[1, 1, 0, 1]),
        rv(&[1, 2, 1, 0]),
        rv(&[0, 2, 3, 1]),
        rv(&[1, 1, 1, 2]),
        rv(&[0, 1, 1, 2]),
    ];
    for (consumer, amounts) in working_sets.iter().enumerate() {
        ledger
            .request(ConsumerId(consumer), amounts)
            .unwrap_or_else(|e| panic!("setup grant for consumer {consumer} failed: {e}"));
    }
    ledger
}

#[test]
fn reference_state_is_reached_and_safe() {
    let ledger = reference_ledger();
    let snap = ledger.snapshot();
    assert_eq!(snap.available, rv(&[1, 5, 2, 0]));
    assert_eq!(snap.need[0], rv(&[2, 1, 1, 0]));
    assert_eq!(snap.need[4], rv(&[1, 0, 1, 1]));

    let order = ledger.safe_order().expect("reference state must be safe");
    assert_eq!(
        order,
        vec![
            ConsumerId(1),
            ConsumerId(0),
            ConsumerId(2),
            ConsumerId(3),
            ConsumerId(4),
        ]
    );
}

#[test]
fn safe_grant_commits() {
    let mut ledger = reference_ledger();
    ledger.request(ConsumerId(1), &rv(&[1, 0, 1, 0])).unwrap();
    let snap = ledger.snapshot();
    assert_eq!(snap.available, rv(&[0, 5, 1, 0]));
    assert_eq!(snap.allocation[1], rv(&[2, 2, 2, 0]));
    assert_eq!(snap.need[1], rv(&[0, 2, 1, 0]));
    assert!(ledger.safe_order().is_some());
}

#[test]
fn request_beyond_need_is_rejected_without_mutation() {
    let mut ledger = reference_ledger();
    let before = ledger.snapshot();
    let err = ledger
        .request(ConsumerId(0), &rv(&[0, 2, 0, 0]))
        .unwrap_err();
    assert_eq!(
        err,
        RequestError::ExceedsNeed {
            consumer: ConsumerId(0),
            resource: 1,
            need: 1,
            requested: 2,
        }
    );
    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn unsafe_grant_is_reverted_exactly() {
    let mut ledger = reference_ledger();
    let before = ledger.snapshot();
    // Within need and within the pool, but the grant would leave every
    // consumer needing a unit of class 0 with none free.
    let err = ledger
        .request(ConsumerId(0), &rv(&[1, 1, 1, 0]))
        .unwrap_err();
    assert_eq!(
        err,
        RequestError::UnsafeState {
            consumer: ConsumerId(0),
        }
    );
    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn over_release_is_rejected_without_mutation() {
    let mut ledger = reference_ledger();
    let before = ledger.snapshot();
    let err = ledger
        .release(ConsumerId(2), &rv(&[1, 0, 0, 0]))
        .unwrap_err();
    assert_eq!(
        err,
        ReleaseError::ExceedsAllocation {
            consumer: ConsumerId(2),
            resource: 0,
            allocated: 0,
            released: 1,
        }
    );
    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn release_then_rerequest_round_trips() {
    let mut ledger = reference_ledger();
    let before = ledger.snapshot();
    let amounts = rv(&[1, 0, 1, 1]);
    ledger.release(ConsumerId(3), &amounts).unwrap();
    assert_eq!(ledger.snapshot().available, rv(&[2, 5, 3, 1]));
    ledger.request(ConsumerId(3), &amounts).unwrap();
    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn unknown_consumer_is_rejected_by_both_operations() {
    let mut ledger = reference_ledger();
    let before = ledger.snapshot();
    assert!(matches!(
        ledger.request(ConsumerId(5), &rv(&[0, 0, 0, 0])),
        Err(RequestError::UnknownConsumer { .. })
    ));
    assert!(matches!(
        ledger.release(ConsumerId(5), &rv(&[0, 0, 0, 0])),
        Err(ReleaseError::UnknownConsumer { .. })
    ));
    assert_eq!(ledger.snapshot(), before);
}
