//! Deadlock-avoidance engine for a fixed population of consumers
//! competing for reusable resource classes.
//!
//! Two components, the second built on the first:
//!
//! - [`safety`]: the safety check — given a snapshot of the allocation
//!   state, decide whether some ordering lets every consumer run to
//!   completion.
//! - [`ledger`]: the [`Ledger`], sole owner and mutator of the shared
//!   state. Requests are validated, tentatively applied, confirmed by
//!   the safety check, and reverted exactly if the check fails.
//!
//! State is constructed once from a validated [`ArbiterConfig`] and
//! never resized. All operations are synchronous; if a `Ledger` is ever
//! shared across threads, the whole request-validate-commit-or-revert
//! sequence must sit inside one mutual-exclusion domain, since the
//! safety verdict depends on a consistent snapshot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod ledger;
pub mod safety;

pub use config::{ArbiterConfig, ConfigError};
pub use ledger::{Ledger, StateSnapshot};
pub use safety::{is_safe, safe_sequence};
