//! Error types for the Concord library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`ConcordError`] enum.
//!
//! # Examples
//!
//! ```
//! use concord::error::{ConcordError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordError::invalid_argument("word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Concord operations.
///
/// The tree and iterator variants (`EmptyTree`, `EndOfSequence`) are local
/// and non-retryable; callers either guard with presence checks
/// (`is_empty()`, `has_next()`) or propagate the failure. The storage
/// variants surface framing and I/O problems from the repository layer.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O errors (file operations, stream reads, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied argument was unusable (e.g. an empty word).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The tree root was requested while the tree held no elements.
    #[error("Tree is empty: no root node")]
    EmptyTree,

    /// A traversal iterator was advanced past its last element.
    #[error("Iterator advanced past the end of its sequence")]
    EndOfSequence,

    /// Repository framing or encoding errors (bad magic, checksum mismatch,
    /// unsupported format version, undecodable payload).
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ConcordError.
pub type Result<T> = std::result::Result<T, ConcordError>;

impl ConcordError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConcordError::InvalidArgument(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        ConcordError::Storage(msg.into())
    }
}
