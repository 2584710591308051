//! The safety check: can every consumer still run to completion?
//!
//! A state is *safe* when there exists at least one order in which all
//! consumers can obtain their full remaining need and finish, each one
//! returning everything it holds as it does. The check simulates
//! exactly that: hand a consumer whatever it still needs, let it
//! finish, reclaim its whole allocation, repeat.
//!
//! The check is pure — it works on a single working copy of the free
//! pool and never touches the real matrices. It runs on every request,
//! so it allocates only that copy and the order vector. O(C²·R) for C
//! consumers and R resource classes.

use arbiter_core::{ConsumerId, ResourceVector};

/// Find a completion order for all consumers, if one exists.
///
/// Scans unfinished consumers in ascending index and finishes the first
/// whose `need` row fits within the working pool, reclaiming its
/// `allocation` row; repeats until everyone is finished or a full scan
/// finds nobody eligible. Returns the order found, or `None` if the
/// state is unsafe.
///
/// The ascending-index scan means ties always resolve to the lowest
/// index. The safe/unsafe verdict does not depend on the scan order;
/// only the reported sequence does.
///
/// # Examples
///
/// ```
/// use arbiter_core::ResourceVector;
/// use arbiter_engine::safety::safe_sequence;
///
/// let available = ResourceVector::from_slice(&[2, 1]);
/// let allocation = [
///     ResourceVector::from_slice(&[2, 0]),
///     ResourceVector::from_slice(&[1, 2]),
/// ];
/// let need = [
///     ResourceVector::from_slice(&[3, 1]),
///     ResourceVector::from_slice(&[1, 1]),
/// ];
/// // Consumer 1 can finish first, then consumer 0.
/// let order = safe_sequence(&available, &allocation, &need).unwrap();
/// assert_eq!(order[0].0, 1);
/// assert_eq!(order[1].0, 0);
/// ```
pub fn safe_sequence(
    available: &ResourceVector,
    allocation: &[ResourceVector],
    need: &[ResourceVector],
) -> Option<Vec<ConsumerId>> {
    debug_assert_eq!(allocation.len(), need.len());

    let consumer_count = need.len();
    let mut work = available.clone();
    let mut finished = vec![false; consumer_count];
    let mut order = Vec::with_capacity(consumer_count);

    for _round in 0..consumer_count {
        let eligible = (0..consumer_count)
            .find(|&c| !finished[c] && need[c].fits_within(&work))?;
        finished[eligible] = true;
        work += &allocation[eligible];
        order.push(ConsumerId(eligible));
    }

    Some(order)
}

/// Boolean verdict: is the state safe?
pub fn is_safe(
    available: &ResourceVector,
    allocation: &[ResourceVector],
    need: &[ResourceVector],
) -> bool {
    safe_sequence(available, allocation, need).is_some()
}
