//! Benchmark profiles for the arbiter resource allocator.
//!
//! Provides pre-built states for benchmarking:
//!
//! - [`reference_profile`]: the 5-consumer / 4-class reference state
//! - [`stress_profile`]: a synthetic wide state that forces the safety
//!   check through many rounds

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arbiter_core::{ConsumerId, ResourceVector};
use arbiter_engine::{ArbiterConfig, Ledger};

/// Build the 5-consumer / 4-class reference state with
/// `available = [1, 5, 2, 0]`.
pub fn reference_profile() -> Ledger {
    let mut ledger = Ledger::new(ArbiterConfig {
        available: ResourceVector::from_slice(&[4, 12, 8, 6]),
        maximum: vec![
            ResourceVector::from_slice(&[3, 2, 1, 1]),
            ResourceVector::from_slice(&[2, 4, 3, 0]),
            ResourceVector::from_slice(&[1, 3, 5, 2]),
            ResourceVector::from_slice(&[2, 2, 2, 2]),
            ResourceVector::from_slice(&[1, 1, 2, 3]),
        ],
    })
    .expect("reference config is valid");

    let working_sets = [
        [1, 1, 0, 1],
        [1, 2, 1, 0],
        [0, 2, 3, 1],
        [1, 1, 1, 2],
        [0, 1, 1, 2],
    ];
    for (consumer, amounts) in working_sets.iter().enumerate() {
        ledger
            .request(ConsumerId(consumer), &ResourceVector::from_slice(amounts))
            .expect("reference grants stay safe");
    }
    ledger
}

/// Build a `consumers × resources` state where every consumer holds one
/// unit of each class and needs one more, with exactly one unit of each
/// class free.
///
/// Each round restarts the scan from index zero and skips the growing
/// finished prefix, so the check walks its quadratic worst case.
pub fn stress_profile(consumers: usize, resources: usize) -> Ledger {
    let total: Vec<u32> = vec![consumers as u32 + 1; resources];
    let one = vec![1u32; resources];
    let two = vec![2u32; resources];
    let mut ledger = Ledger::new(ArbiterConfig {
        available: ResourceVector::from_slice(&total),
        maximum: vec![ResourceVector::from_slice(&two); consumers],
    })
    .expect("stress config is valid");
    for consumer in 0..consumers {
        ledger
            .request(ConsumerId(consumer), &ResourceVector::from_slice(&one))
            .expect("stress grants stay safe");
    }
    ledger
}
