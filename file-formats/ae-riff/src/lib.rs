//! Parser for RIFF/RIFX chunk containers.
//!
//! Adobe After Effects `.aep` project files are RIFX containers: a tree of
//! chunks, each introduced by a 4-byte identifier and a 4-byte size, where
//! reserved identifiers (`RIFX`, `RIFF`, `LIST`) mark containers holding a
//! subtype and nested chunks, and everything else is an opaque leaf. This
//! crate parses such a stream into an owned [`Chunk`] tree and provides
//! name-based lookup over it. What the individual chunk names and leaf
//! payloads mean is the caller's business; this crate only deals in
//! structure.
//!
//! The root identifier decides, once, whether every integer in the stream
//! is little-endian (`RIFF`) or big-endian (`RIFX`, the variant After
//! Effects writes). Chunk bodies are 2-byte aligned: an odd-sized body is
//! followed by one pad byte before the next sibling header.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ae_riff::RiffParser;
//!
//! let data = std::fs::read("project.aep")?;
//! let root = RiffParser::new().parse(&data)?;
//!
//! // Chained lookups degrade to the empty sentinel instead of failing
//! let item = root.first_chunk_named(b"LIST").first_chunk_named(b"idta");
//! if !item.is_empty() {
//!     println!("item data: {} byte(s)", item.payload().len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod chunk;
pub mod endian;
pub mod error;
pub mod fourcc;
pub mod parser;

pub use chunk::{Chunk, ChunkBody};
pub use endian::ByteOrder;
pub use error::{Result, RiffError};
pub use fourcc::FourCC;
pub use parser::{CHUNK_HEADER_SIZE, RiffParser, parse};
