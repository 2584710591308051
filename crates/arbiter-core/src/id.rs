//! Strongly-typed consumer index.

use std::fmt;

/// Identifies a consumer within an arbiter instance.
///
/// Consumers are fixed at construction and indexed densely:
/// `ConsumerId(n)` is the n-th row of the `maximum`, `allocation`,
/// and `need` matrices. The engine range-checks every incoming ID
/// before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConsumerId(pub usize);

impl fmt::Display for ConsumerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ConsumerId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
