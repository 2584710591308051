//! Core types for the arbiter resource allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! the [`ResourceVector`] counts type, the [`ConsumerId`] index, and
//! the error types returned by the allocation engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod vector;

pub use error::{ReleaseError, RequestError};
pub use id::ConsumerId;
pub use vector::ResourceVector;
