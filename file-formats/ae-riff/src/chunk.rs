//! The parsed chunk tree and name-based lookup over it.

use std::io::{self, Write};

use crate::endian::ByteOrder;
use crate::fourcc::FourCC;

/// The empty sentinel returned by lookups that find nothing.
static EMPTY: Chunk = Chunk {
    id: FourCC::NIL,
    size: 0,
    body: ChunkBody::Leaf {
        payload: Vec::new(),
    },
};

/// A node in a parsed container tree.
///
/// A chunk is either a container (a 4-byte subtype followed by nested
/// chunks) or a leaf (opaque payload bytes) — never both. The tree owns all
/// of its descendants and their payload bytes; lookups hand out borrowed
/// references into it. Once built, a tree is immutable and safe to share
/// across threads without synchronization.
///
/// # Examples
///
/// ```rust
/// use ae_riff::{Chunk, FourCC};
///
/// let root = Chunk::container(
///     FourCC::RIFX,
///     b"Egg!",
///     vec![Chunk::leaf(b"fdta", vec![1, 2, 3, 4])],
/// );
///
/// assert_eq!(root.first_chunk_named(b"fdta").payload(), [1, 2, 3, 4]);
/// assert!(root.first_chunk_named(b"none").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The four-byte identifier of this chunk
    pub id: FourCC,
    /// Declared payload size in bytes, as read from the stream.
    ///
    /// Excludes the 8 header bytes; for containers it includes the 4
    /// subtype bytes and the nested chunks (with their inter-sibling
    /// padding), matching what the size field on the wire covers.
    pub size: u32,
    /// Container or leaf body
    pub body: ChunkBody,
}

/// Body of a chunk: nested chunks or raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkBody {
    /// A container: subtype plus nested chunks in source order
    Container {
        /// Secondary identifier naming the kind of container
        subtype: FourCC,
        /// Child chunks, ordered as they appear in the stream
        children: Vec<Chunk>,
    },
    /// A leaf: uninterpreted payload bytes
    Leaf {
        /// Raw payload, exactly as stored in the stream
        payload: Vec<u8>,
    },
}

impl Chunk {
    /// Creates a leaf chunk; the declared size is the payload length.
    pub fn leaf(id: impl Into<FourCC>, payload: Vec<u8>) -> Self {
        let size = payload.len() as u32;
        Self {
            id: id.into(),
            size,
            body: ChunkBody::Leaf { payload },
        }
    }

    /// Creates a container chunk.
    ///
    /// The declared size is computed the way it appears on the wire: 4
    /// subtype bytes plus each child's header, body, and pad byte for
    /// odd-sized bodies.
    pub fn container(
        id: impl Into<FourCC>,
        subtype: impl Into<FourCC>,
        children: Vec<Self>,
    ) -> Self {
        let size = 4 + children
            .iter()
            .map(|c| 8 + c.size + (c.size & 1))
            .sum::<u32>();
        Self {
            id: id.into(),
            size,
            body: ChunkBody::Container {
                subtype: subtype.into(),
                children,
            },
        }
    }

    /// The shared empty sentinel chunk.
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// Whether this is the empty sentinel produced by a failed lookup.
    pub fn is_empty(&self) -> bool {
        self.id == FourCC::NIL && self.size == 0 && self.payload().is_empty()
    }

    /// Whether this chunk holds nested chunks.
    pub fn is_container(&self) -> bool {
        matches!(self.body, ChunkBody::Container { .. })
    }

    /// Whether this chunk holds raw payload bytes.
    pub fn is_leaf(&self) -> bool {
        matches!(self.body, ChunkBody::Leaf { .. })
    }

    /// The container subtype, if this chunk is a container.
    pub fn subtype(&self) -> Option<FourCC> {
        match &self.body {
            ChunkBody::Container { subtype, .. } => Some(*subtype),
            ChunkBody::Leaf { .. } => None,
        }
    }

    /// Child chunks in source order; empty for leaves.
    pub fn children(&self) -> &[Self] {
        match &self.body {
            ChunkBody::Container { children, .. } => children,
            ChunkBody::Leaf { .. } => &[],
        }
    }

    /// Payload bytes; empty for containers.
    pub fn payload(&self) -> &[u8] {
        match &self.body {
            ChunkBody::Container { .. } => &[],
            ChunkBody::Leaf { payload } => payload,
        }
    }

    /// Every immediate child whose identifier equals `id`, in source order.
    ///
    /// Only direct children are considered, not descendants. Returns an
    /// empty vector — never an error — when nothing matches.
    pub fn chunks_named(&self, id: impl Into<FourCC>) -> Vec<&Self> {
        let id = id.into();
        self.children().iter().filter(|c| c.id == id).collect()
    }

    /// Every chunk in this subtree whose identifier equals `id`, in
    /// pre-order. The receiver itself is included when it matches.
    pub fn chunks_named_recursive(&self, id: impl Into<FourCC>) -> Vec<&Self> {
        let id = id.into();
        let mut found = Vec::new();
        self.collect_named(id, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, id: FourCC, found: &mut Vec<&'a Self>) {
        if self.id == id {
            found.push(self);
        }
        for child in self.children() {
            child.collect_named(id, found);
        }
    }

    /// The first direct child whose identifier equals `id`, or the empty
    /// sentinel when no child matches.
    ///
    /// Returning a sentinel instead of an `Option` lets lookups chain
    /// through absent links and degrade to the empty chunk:
    ///
    /// ```rust
    /// use ae_riff::{Chunk, FourCC};
    ///
    /// let root = Chunk::container(FourCC::RIFX, b"Egg!", vec![]);
    /// assert!(
    ///     root.first_chunk_named(b"Layr")
    ///         .first_chunk_named(b"fdta")
    ///         .is_empty()
    /// );
    /// ```
    pub fn first_chunk_named(&self, id: impl Into<FourCC>) -> &Self {
        let id = id.into();
        self.children()
            .iter()
            .find(|c| c.id == id)
            .unwrap_or(&EMPTY)
    }

    /// Total number of chunks in this subtree, including the receiver.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Self::count).sum::<usize>()
    }

    /// Height of this subtree; 1 for a leaf.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Serializes this chunk (and its subtree) in the given byte order.
    ///
    /// A pad byte is emitted after every odd-sized body, so sibling headers
    /// land on even offsets when the output is embedded in a container.
    pub fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(order, &mut buf);
        buf
    }

    /// Writes this chunk (and its subtree) to a writer in the given byte
    /// order.
    pub fn write<W: Write>(&self, order: ByteOrder, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes(order))
    }

    fn encode_into(&self, order: ByteOrder, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.id.bytes());
        buf.extend_from_slice(&order.u32_bytes(self.size));
        match &self.body {
            ChunkBody::Container { subtype, children } => {
                buf.extend_from_slice(&subtype.bytes());
                for child in children {
                    child.encode_into(order, buf);
                }
            }
            ChunkBody::Leaf { payload } => {
                buf.extend_from_slice(payload);
            }
        }
        if self.size % 2 == 1 {
            buf.push(0);
        }
    }
}
