//! Error handling for container parsing.

use std::io;
use thiserror::Error;

use crate::fourcc::FourCC;

/// Errors that can occur while parsing a chunk container.
///
/// Every structural variant denotes malformed input: parsing aborts at the
/// first inconsistency and no partial tree is returned. Lookup operations
/// never produce an error — a missing chunk name yields an empty sequence or
/// the empty sentinel chunk instead.
#[derive(Debug, Error)]
pub enum RiffError {
    /// An I/O error occurred while reading the input into memory
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before a complete 8-byte chunk header
    #[error("truncated chunk header at offset {offset}: {remaining} byte(s) remaining, need 8")]
    TruncatedHeader {
        /// Offset of the incomplete header
        offset: usize,
        /// Bytes left in the enclosing scope
        remaining: usize,
    },

    /// A chunk declared more payload bytes than its enclosing scope holds
    #[error(
        "chunk '{id}' at offset {offset} declares {declared} byte(s) but only {available} remain"
    )]
    ChunkOverrun {
        /// Identifier of the offending chunk
        id: FourCC,
        /// Offset of the chunk header
        offset: usize,
        /// Declared payload size
        declared: u32,
        /// Bytes actually available in the enclosing scope
        available: usize,
    },

    /// A container chunk is too small to hold its mandatory 4-byte subtype
    #[error("container '{id}' at offset {offset} declares {size} byte(s), too small for a subtype")]
    ContainerTooSmall {
        /// Identifier of the offending container
        id: FourCC,
        /// Offset of the chunk header
        offset: usize,
        /// Declared payload size
        size: u32,
    },
}

/// Type alias for Results from container operations
pub type Result<T> = std::result::Result<T, RiffError>;
