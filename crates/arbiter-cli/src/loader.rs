//! Startup loader for the maximum-demand matrix.
//!
//! The resources file is a whitespace-delimited list of exactly
//! `consumers × resources` non-negative integers, row-major: consumer
//! 0's row first. A count mismatch or malformed token is a fatal
//! startup error; the engine is never constructed from a partial read.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use arbiter_core::ResourceVector;

/// Errors from [`load_maximum`].
#[derive(Debug)]
pub enum LoadError {
    /// The resources file could not be read.
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A token was not a non-negative integer.
    MalformedEntry {
        /// The offending token.
        token: String,
        /// Zero-based position of the token in the file.
        position: usize,
    },
    /// The file held the wrong number of entries.
    EntryCountMismatch {
        /// `consumers × resources`.
        expected: usize,
        /// Entries actually present.
        actual: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "unable to read {}: {source}", path.display())
            }
            Self::MalformedEntry { token, position } => {
                write!(f, "entry {position} is not a non-negative integer: '{token}'")
            }
            Self::EntryCountMismatch { expected, actual } => {
                write!(f, "expected {expected} entries, found {actual}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read the `consumers × resources` maximum matrix from `path`.
pub fn load_maximum(
    path: &Path,
    consumers: usize,
    resources: usize,
) -> Result<Vec<ResourceVector>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_maximum(&text, consumers, resources)
}

/// Parse the matrix from already-read text. Split out for testing.
pub fn parse_maximum(
    text: &str,
    consumers: usize,
    resources: usize,
) -> Result<Vec<ResourceVector>, LoadError> {
    let mut entries = Vec::with_capacity(consumers * resources);
    for (position, token) in text.split_whitespace().enumerate() {
        let value: u32 = token.parse().map_err(|_| LoadError::MalformedEntry {
            token: token.to_string(),
            position,
        })?;
        entries.push(value);
    }

    let expected = consumers * resources;
    if entries.len() != expected {
        return Err(LoadError::EntryCountMismatch {
            expected,
            actual: entries.len(),
        });
    }

    Ok(entries
        .chunks(resources)
        .map(ResourceVector::from_slice)
        .collect())
}
