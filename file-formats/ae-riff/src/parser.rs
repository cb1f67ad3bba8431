//! Parser for RIFF-family chunk containers.
//!
//! The parser turns a byte buffer into a [`Chunk`] tree in a single pass.
//! Byte order is decided once from the root chunk's identifier and applies
//! to every size field in the stream. Parsing either yields a complete tree
//! or fails outright — a malformed chunk aborts the whole parse and no
//! partial tree is returned.

use std::io::Read;

use crate::chunk::{Chunk, ChunkBody};
use crate::endian::ByteOrder;
use crate::error::{Result, RiffError};
use crate::fourcc::FourCC;

/// Chunk header size in bytes (identifier + size)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Parser for RIFF/RIFX chunk containers.
///
/// Which identifiers mark a container, and which root identifiers select
/// big-endian integers, are configuration rather than format law: the
/// defaults cover classic RIFF (`RIFF`/`LIST`, little-endian) and the RIFX
/// variant After Effects writes (`RIFX`, big-endian), but both sets can be
/// overridden for related container dialects.
///
/// # Examples
///
/// ```rust
/// use ae_riff::{Chunk, FourCC, RiffParser};
///
/// let tree = Chunk::container(
///     FourCC::RIFX,
///     b"Egg!",
///     vec![Chunk::leaf(b"fdta", vec![1, 2, 3, 4])],
/// );
/// let bytes = tree.to_bytes(ae_riff::ByteOrder::Big);
///
/// let parser = RiffParser::new();
/// let parsed = parser.parse(&bytes).unwrap();
/// assert_eq!(parsed, tree);
/// ```
#[derive(Debug, Clone)]
pub struct RiffParser {
    /// Identifiers whose chunks hold a subtype plus nested chunks
    containers: Vec<FourCC>,
    /// Root identifiers that switch the whole stream to big-endian
    big_endian_roots: Vec<FourCC>,
}

impl Default for RiffParser {
    fn default() -> Self {
        Self {
            containers: vec![FourCC::RIFF, FourCC::RIFX, FourCC::LIST],
            big_endian_roots: vec![FourCC::RIFX],
        }
    }
}

impl RiffParser {
    /// Creates a parser with the standard RIFF/RIFX/LIST markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom marker sets.
    ///
    /// `containers` lists every identifier to treat as a container;
    /// `big_endian_roots` lists the root identifiers that select big-endian
    /// integers for the whole stream.
    pub fn with_markers(containers: Vec<FourCC>, big_endian_roots: Vec<FourCC>) -> Self {
        Self {
            containers,
            big_endian_roots,
        }
    }

    /// Whether chunks with this identifier carry a subtype and children.
    pub fn is_container(&self, id: FourCC) -> bool {
        self.containers.contains(&id)
    }

    /// Byte order selected by a root chunk identifier.
    pub fn byte_order(&self, root_id: FourCC) -> ByteOrder {
        if self.big_endian_roots.contains(&root_id) {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Parses a byte buffer into a chunk tree.
    ///
    /// The buffer must hold one top-level chunk; bytes after its span are
    /// ignored. Byte order for every size field — including those of all
    /// descendants — is decided here, from the first four bytes, and never
    /// re-evaluated for nested chunks.
    pub fn parse(&self, data: &[u8]) -> Result<Chunk> {
        if data.len() < CHUNK_HEADER_SIZE {
            return Err(RiffError::TruncatedHeader {
                offset: 0,
                remaining: data.len(),
            });
        }
        let root_id = FourCC([data[0], data[1], data[2], data[3]]);
        let order = self.byte_order(root_id);

        let mut pos = 0;
        self.read_chunk(data, &mut pos, data.len(), order)
    }

    /// Reads a reader to the end, then parses the buffered bytes.
    ///
    /// Chunk sizes are only trustworthy against a complete buffer, so the
    /// whole stream is loaded before any header is interpreted.
    pub fn parse_reader<R: Read>(&self, reader: &mut R) -> Result<Chunk> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse(&data)
    }

    /// Reads one chunk starting at `*pos`, bounded by `end`.
    ///
    /// On success `*pos` is advanced past the chunk's declared bytes (pad
    /// bytes between siblings are the caller's concern). Any structural
    /// inconsistency aborts with an error; `*pos` is then meaningless.
    fn read_chunk(
        &self,
        data: &[u8],
        pos: &mut usize,
        end: usize,
        order: ByteOrder,
    ) -> Result<Chunk> {
        let offset = *pos;
        if end - offset < CHUNK_HEADER_SIZE {
            return Err(RiffError::TruncatedHeader {
                offset,
                remaining: end - offset,
            });
        }

        let id = FourCC([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        let size = order.read_u32([
            data[offset + 4],
            data[offset + 5],
            data[offset + 6],
            data[offset + 7],
        ]);
        *pos = offset + CHUNK_HEADER_SIZE;

        let available = end - *pos;
        if size as usize > available {
            return Err(RiffError::ChunkOverrun {
                id,
                offset,
                declared: size,
                available,
            });
        }

        if self.is_container(id) {
            if size < 4 {
                return Err(RiffError::ContainerTooSmall { id, offset, size });
            }
            let subtype = FourCC([data[*pos], data[*pos + 1], data[*pos + 2], data[*pos + 3]]);
            *pos += 4;

            let body_end = *pos + (size as usize - 4);
            let mut children = Vec::new();
            while *pos < body_end {
                let child = self.read_chunk(data, pos, body_end, order)?;
                let odd = child.size % 2 == 1;
                children.push(child);
                // Sibling headers start at even offsets; a pad byte follows
                // an odd-sized body when the container has room for it.
                if odd && *pos < body_end {
                    *pos += 1;
                }
            }

            Ok(Chunk {
                id,
                size,
                body: ChunkBody::Container { subtype, children },
            })
        } else {
            let payload = data[*pos..*pos + size as usize].to_vec();
            *pos += size as usize;

            Ok(Chunk {
                id,
                size,
                body: ChunkBody::Leaf { payload },
            })
        }
    }
}

/// Parses a byte buffer with the standard RIFF/RIFX/LIST markers.
///
/// Convenience for `RiffParser::new().parse(data)`.
pub fn parse(data: &[u8]) -> Result<Chunk> {
    RiffParser::new().parse(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-assembles a chunk stream: each entry is (id, size-field, body).
    fn raw(order: ByteOrder, entries: &[(&[u8; 4], u32, &[u8])]) -> Vec<u8> {
        let mut buf = Vec::new();
        for (id, size, body) in entries {
            buf.extend_from_slice(*id);
            buf.extend_from_slice(&order.u32_bytes(*size));
            buf.extend_from_slice(body);
        }
        buf
    }

    #[test]
    fn parses_big_endian_container_with_leaf() {
        // RIFX(20) { TEST | DATA(4) [01 02 03 04] }
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 20, b"TEST")]);
        data.extend(raw(ByteOrder::Big, &[(b"DATA", 4, &[1, 2, 3, 4])]));

        let root = parse(&data).unwrap();
        assert_eq!(root.id, FourCC::RIFX);
        assert_eq!(root.subtype(), Some(FourCC(*b"TEST")));
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.first_chunk_named(b"DATA").payload(), [1, 2, 3, 4]);
    }

    #[test]
    fn parses_little_endian_variant() {
        let mut data = raw(ByteOrder::Little, &[(b"RIFF", 16, b"WAVE")]);
        data.extend(raw(ByteOrder::Little, &[(b"fdta", 4, &[5, 6, 7, 8])]));

        let root = parse(&data).unwrap();
        assert_eq!(root.id, FourCC::RIFF);
        assert_eq!(root.first_chunk_named(b"fdta").payload(), [5, 6, 7, 8]);
    }

    #[test]
    fn odd_sized_body_skips_pad_before_next_sibling() {
        // RIFX(32) { TEST | odd!(3) [AA BB CC] pad | next(4) [01 02 03 04] }
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 32, b"TEST")]);
        data.extend(raw(ByteOrder::Big, &[(b"odd!", 3, &[0xAA, 0xBB, 0xCC])]));
        data.push(0); // pad
        data.extend(raw(ByteOrder::Big, &[(b"next", 4, &[1, 2, 3, 4])]));

        let root = parse(&data).unwrap();
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].payload(), [0xAA, 0xBB, 0xCC]);
        assert_eq!(root.children()[1].id, FourCC(*b"next"));
        assert_eq!(root.children()[1].payload(), [1, 2, 3, 4]);
    }

    #[test]
    fn final_odd_child_without_pad_is_accepted() {
        // Container size stops right after the odd body, no pad byte.
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 15, b"TEST")]);
        data.extend(raw(ByteOrder::Big, &[(b"odd!", 3, &[1, 2, 3])]));

        let root = parse(&data).unwrap();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].payload(), [1, 2, 3]);
    }

    #[test]
    fn endianness_is_decided_once_at_the_root() {
        // A RIFF chunk nested inside a RIFX stream still reads its size
        // big-endian, whatever its own identifier suggests.
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 28, b"TEST")]);
        data.extend(raw(ByteOrder::Big, &[(b"RIFF", 12, b"sub ")]));
        data.extend(raw(ByteOrder::Big, &[(b"fdta", 0, &[])]));

        let root = parse(&data).unwrap();
        let nested = root.first_chunk_named(b"RIFF");
        assert!(nested.is_container());
        assert_eq!(nested.subtype(), Some(FourCC(*b"sub ")));
        assert_eq!(nested.children()[0].id, FourCC(*b"fdta"));
    }

    #[test]
    fn non_container_root_parses_as_little_endian_leaf() {
        let data = raw(ByteOrder::Little, &[(b"blob", 2, &[0xCA, 0xFE])]);
        let root = parse(&data).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.payload(), [0xCA, 0xFE]);
    }

    #[test]
    fn trailing_bytes_after_root_are_ignored() {
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 4, b"TEST")]);
        data.extend_from_slice(b"junk trailing the root");
        let root = parse(&data).unwrap();
        assert_eq!(root.children().len(), 0);
    }

    #[test]
    fn short_input_is_a_truncated_header() {
        let err = parse(&[0x52, 0x49]).unwrap_err();
        assert!(matches!(
            err,
            RiffError::TruncatedHeader {
                offset: 0,
                remaining: 2
            }
        ));
    }

    #[test]
    fn declared_size_beyond_input_is_an_overrun() {
        let data = raw(ByteOrder::Big, &[(b"RIFX", 100, b"TEST")]);
        let err = parse(&data).unwrap_err();
        assert!(matches!(
            err,
            RiffError::ChunkOverrun {
                id: FourCC::RIFX,
                declared: 100,
                ..
            }
        ));
    }

    #[test]
    fn child_overrunning_its_container_fails() {
        // The leaf declares 64 bytes but the enclosing RIFX scope only
        // holds 4 more.
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 16, b"TEST")]);
        data.extend(raw(ByteOrder::Big, &[(b"fdta", 64, &[0, 0, 0, 0])]));

        let err = parse(&data).unwrap_err();
        assert!(matches!(err, RiffError::ChunkOverrun { declared: 64, .. }));
    }

    #[test]
    fn partial_header_inside_container_fails() {
        // Container body holds 6 bytes after the subtype, too short for a
        // sibling header.
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 10, b"TEST")]);
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

        let err = parse(&data).unwrap_err();
        assert!(matches!(
            err,
            RiffError::TruncatedHeader { remaining: 6, .. }
        ));
    }

    #[test]
    fn container_smaller_than_subtype_fails() {
        let data = raw(ByteOrder::Big, &[(b"RIFX", 2, &[0, 0])]);
        let err = parse(&data).unwrap_err();
        assert!(matches!(err, RiffError::ContainerTooSmall { size: 2, .. }));
    }

    #[test]
    fn parse_is_deterministic() {
        let mut data = raw(ByteOrder::Big, &[(b"RIFX", 32, b"TEST")]);
        data.extend(raw(ByteOrder::Big, &[(b"LIST", 12, b"Layr")]));
        data.extend(raw(ByteOrder::Big, &[(b"fdta", 0, &[])]));
        data.extend(raw(ByteOrder::Big, &[(b"tail", 4, &[1, 2, 3, 4])]));

        assert_eq!(parse(&data).unwrap(), parse(&data).unwrap());
    }

    #[test]
    fn custom_markers_override_the_defaults() {
        // An IFF-style dialect: FORM is the big-endian root, CAT holds
        // nested chunks, and LIST is just a leaf.
        let parser = RiffParser::with_markers(
            vec![FourCC(*b"FORM"), FourCC(*b"CAT ")],
            vec![FourCC(*b"FORM")],
        );

        let mut data = raw(ByteOrder::Big, &[(b"FORM", 16, b"ILBM")]);
        data.extend(raw(ByteOrder::Big, &[(b"LIST", 4, &[1, 2, 3, 4])]));

        let root = parser.parse(&data).unwrap();
        assert_eq!(root.subtype(), Some(FourCC(*b"ILBM")));
        let list = root.first_chunk_named(b"LIST");
        assert!(list.is_leaf());
        assert_eq!(list.payload(), [1, 2, 3, 4]);
    }

    #[test]
    fn parse_reader_buffers_then_parses() {
        let data = raw(ByteOrder::Big, &[(b"RIFX", 4, b"TEST")]);
        let mut cursor = std::io::Cursor::new(data.clone());

        let parser = RiffParser::new();
        let from_reader = parser.parse_reader(&mut cursor).unwrap();
        assert_eq!(from_reader, parser.parse(&data).unwrap());
    }
}
